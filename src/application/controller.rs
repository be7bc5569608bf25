// src/application/controller.rs
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::application::{Randomizer, RestaurantSource, ViewRenderer};
use crate::constants::{
    ACTIVE_CLASS, ALL_MOODS, CARD_TAB_ID, CLOSE_CLASS, GRID_ID, MODAL_ID, MOOD_ATTRIBUTE,
    MOOD_FILTER_ID, PRIMARY_BUTTON_CLASS, RANDOM_SLOT_ID, SECONDARY_BUTTON_CLASS, SPIN_BUTTON_ID,
    TABLE_TAB_ID,
};
use crate::domain::{MoodFilter, Restaurant, ViewMode};
use crate::ports::{Clock, Display, Document, Element};

/// Click events the host forwards to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A button inside `mood-filter`, by element id.
    FilterClicked(String),
    SpinClicked,
    CloseClicked,
    TabClicked(ViewMode),
}

/// Handlers wired during [`InteractionController::initialize`]. Events for
/// unwired handlers are ignored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub filters: bool,
    pub randomizer: bool,
    pub modal: bool,
    pub tabs: bool,
}

/// Owns the host document and reacts to click events.
///
/// State lives in two small machines, [`ViewMode`] and the active
/// [`MoodFilter`]; each handler computes the new state first and then applies
/// it to the document.
pub struct InteractionController<D, S, C, R>
where
    D: Document,
    S: RestaurantSource,
    C: Clock,
    R: Rng,
{
    document: D,
    source: S,
    renderer: ViewRenderer<C>,
    randomizer: Randomizer<R>,
    bindings: Bindings,
    view: ViewMode,
    active_mood: Option<MoodFilter>,
    close_control: Option<String>,
}

impl<D, S, C, R> InteractionController<D, S, C, R>
where
    D: Document,
    S: RestaurantSource,
    C: Clock,
    R: Rng,
{
    pub fn new(document: D, source: S, renderer: ViewRenderer<C>, rng: R) -> Self {
        Self {
            document,
            source,
            renderer,
            randomizer: Randomizer::new(rng),
            bindings: Bindings::default(),
            view: ViewMode::default(),
            active_mood: None,
            close_control: None,
        }
    }

    /// Page-ready: wire handlers for the controls present and do the initial
    /// renders.
    #[instrument(level = "debug", skip(self))]
    pub fn initialize(&mut self) {
        let has_filters = self.document.contains(MOOD_FILTER_ID);

        if has_filters {
            self.bindings.filters = true;
            self.bindings.randomizer = self.document.contains(SPIN_BUTTON_ID);
            self.close_control = self.document.find_by_class(CLOSE_CLASS);
            self.bindings.modal = self.close_control.is_some();

            match self.find_mood_button(ALL_MOODS) {
                Some(all_button) => {
                    self.dispatch(UiEvent::FilterClicked(all_button));
                }
                None => debug!("No 'all' filter button, skipping initial card render"),
            }
        }

        if self.document.contains(GRID_ID) && !has_filters {
            let all: Vec<&Restaurant> = self.source.restaurants().iter().collect();
            self.renderer.render_cards(&mut self.document, &all, GRID_ID);
        }

        self.renderer.render_table(&mut self.document, &self.source);

        self.bindings.tabs =
            self.document.contains(CARD_TAB_ID) && self.document.contains(TABLE_TAB_ID);

        debug!(bindings = ?self.bindings, "Directory initialized");
    }

    /// Returns `false` when the event's handler is not wired or the event
    /// does not apply (e.g. an unknown filter button).
    pub fn dispatch(&mut self, event: UiEvent) -> bool {
        let wired = match &event {
            UiEvent::FilterClicked(_) => self.bindings.filters,
            UiEvent::SpinClicked => self.bindings.randomizer,
            UiEvent::CloseClicked => self.bindings.modal,
            UiEvent::TabClicked(_) => self.bindings.tabs,
        };
        if !wired {
            debug!(?event, "No handler wired, ignoring");
            return false;
        }

        match event {
            UiEvent::FilterClicked(button_id) => self.on_filter_click(&button_id),
            UiEvent::SpinClicked => self.on_spin_click(),
            UiEvent::CloseClicked => self.on_close_click(),
            UiEvent::TabClicked(mode) => self.on_tab_click(mode),
        }
    }

    /// Click the filter button whose mood attribute equals `mood`.
    pub fn click_mood(&mut self, mood: &str) -> bool {
        match self.find_mood_button(mood) {
            Some(button_id) => self.dispatch(UiEvent::FilterClicked(button_id)),
            None => {
                debug!(mood, "No filter button for mood");
                false
            }
        }
    }

    pub fn find_mood_button(&self, mood: &str) -> Option<String> {
        self.document
            .children(MOOD_FILTER_ID)
            .into_iter()
            .find(|id| {
                self.document
                    .element(id)
                    .and_then(|e| e.attribute(MOOD_ATTRIBUTE))
                    == Some(mood)
            })
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }

    pub fn bindings(&self) -> Bindings {
        self.bindings
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn active_mood(&self) -> Option<&MoodFilter> {
        self.active_mood.as_ref()
    }

    #[instrument(level = "debug", skip(self))]
    fn on_filter_click(&mut self, button_id: &str) -> bool {
        let buttons = self.document.children(MOOD_FILTER_ID);
        if !buttons.iter().any(|id| id == button_id) {
            debug!("Not a filter button");
            return false;
        }
        let Some(mood) = self
            .document
            .element(button_id)
            .and_then(|b| b.attribute(MOOD_ATTRIBUTE))
        else {
            debug!("Filter button has no mood attribute");
            return false;
        };

        let filter = MoodFilter::from_attribute(mood);
        let filtered = self.source.filtered(&filter);
        debug!(mood = filter.as_attribute(), matches = filtered.len(), "Filtering");
        self.renderer
            .render_cards(&mut self.document, &filtered, GRID_ID);
        self.active_mood = Some(filter);

        for id in &buttons {
            if let Some(button) = self.document.element_mut(id) {
                if id == button_id {
                    button.remove_class(SECONDARY_BUTTON_CLASS);
                    button.add_class(PRIMARY_BUTTON_CLASS);
                } else {
                    button.remove_class(PRIMARY_BUTTON_CLASS);
                    button.add_class(SECONDARY_BUTTON_CLASS);
                }
            }
        }
        true
    }

    #[instrument(level = "debug", skip(self))]
    fn on_spin_click(&mut self) -> bool {
        let Some(pick) = self.randomizer.pick(self.source.restaurants()) else {
            debug!("Store is empty, nothing to pick");
            return false;
        };
        info!(name = %pick.name, "Random pick");
        self.renderer
            .render_cards(&mut self.document, &[pick], RANDOM_SLOT_ID);

        if let Some(modal) = self.document.element_mut(MODAL_ID) {
            modal.set_display(Display::Flex);
        }
        true
    }

    fn on_close_click(&mut self) -> bool {
        if let Some(modal) = self.document.element_mut(MODAL_ID) {
            modal.set_display(Display::Hidden);
        }
        true
    }

    #[instrument(level = "debug", skip(self))]
    fn on_tab_click(&mut self, clicked: ViewMode) -> bool {
        self.view = self.view.on_tab_click(clicked);
        self.apply_view();
        true
    }

    fn apply_view(&mut self) {
        let shown = self.view;
        let hidden = shown.other();

        if let Some(tab) = self.document.element_mut(shown.tab_id()) {
            tab.add_class(ACTIVE_CLASS);
        }
        if let Some(tab) = self.document.element_mut(hidden.tab_id()) {
            tab.remove_class(ACTIVE_CLASS);
        }
        if let Some(view) = self.document.element_mut(shown.view_id()) {
            view.set_display(Display::Block);
        }
        if let Some(view) = self.document.element_mut(hidden.view_id()) {
            view.set_display(Display::Hidden);
        }
    }
}
