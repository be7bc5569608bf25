// src/application/view_renderer.rs
use tracing::{debug, instrument};

use crate::application::RestaurantSource;
use crate::constants::TABLE_BODY_ID;
use crate::domain::{OpenStatus, OpeningHours, Restaurant};
use crate::ports::{Clock, Document, Element, HtmlPresenter};

/// Writes formatted fragments into document containers, replacing whatever
/// they held.
///
/// The clock is read once per render, so all fragments of one render agree
/// on the open/closed status.
pub struct ViewRenderer<C: Clock> {
    presenter: HtmlPresenter,
    clock: C,
    hours: OpeningHours,
}

impl<C: Clock> ViewRenderer<C> {
    pub fn new(clock: C, hours: OpeningHours) -> Self {
        Self {
            presenter: HtmlPresenter::new(),
            clock,
            hours,
        }
    }

    /// Status at the current clock reading.
    pub fn status(&self) -> OpenStatus {
        self.hours.status(&self.clock.now())
    }

    /// Returns `false` when `target_id` is absent; that is not an error.
    #[instrument(level = "debug", skip(self, document, restaurants))]
    pub fn render_cards<D: Document>(
        &self,
        document: &mut D,
        restaurants: &[&Restaurant],
        target_id: &str,
    ) -> bool {
        let Some(container) = document.element_mut(target_id) else {
            debug!(target_id, "Card container absent, skipping render");
            return false;
        };
        let status = self.status();
        let html = self
            .presenter
            .render_cards(restaurants.iter().copied(), status);
        container.set_inner_html(&html);
        debug!(target_id, count = restaurants.len(), ?status, "Rendered cards");
        true
    }

    /// Renders the full store into the table body.
    #[instrument(level = "debug", skip_all)]
    pub fn render_table<D: Document, S: RestaurantSource>(&self, document: &mut D, source: &S) -> bool {
        let Some(body) = document.element_mut(TABLE_BODY_ID) else {
            debug!("Table body absent, skipping render");
            return false;
        };
        let status = self.status();
        let html = self.presenter.render_rows(source.restaurants(), status);
        body.set_inner_html(&html);
        debug!(count = source.restaurants().len(), ?status, "Rendered table");
        true
    }
}
