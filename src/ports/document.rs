// src/ports/document.rs
//! Host document seam.
//!
//! Lookups return `Option`: an absent container is a normal deployment (a
//! card-only page has no table), so callers branch on presence instead of
//! failing.

/// CSS `display` values the controller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Flex,
    Hidden,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Flex => "flex",
            Display::Hidden => "none",
        }
    }
}

pub trait Element {
    /// Replace all content of the element.
    fn set_inner_html(&mut self, html: &str);
    fn inner_html(&self) -> &str;

    fn set_display(&mut self, display: Display);
    /// `None` until a display value has been set, i.e. the markup default applies.
    fn display(&self) -> Option<Display>;

    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn is_visible(&self) -> bool {
        self.display() != Some(Display::Hidden)
    }
}

pub trait Document {
    type Element: Element;

    fn contains(&self, id: &str) -> bool;
    fn element(&self, id: &str) -> Option<&Self::Element>;
    fn element_mut(&mut self, id: &str) -> Option<&mut Self::Element>;

    /// Ids of the direct children of `parent_id`, in document order.
    fn children(&self, parent_id: &str) -> Vec<String>;

    /// Id of the first element carrying `class`.
    fn find_by_class(&self, class: &str) -> Option<String>;
}
