// src/infrastructure/memory_document.rs
use std::collections::{BTreeMap, HashMap};

use crate::constants::{
    ALL_MOODS, CARD_TAB_ID, CARD_VIEW_ID, CLOSE_CLASS, GRID_ID, MODAL_ID, MOOD_ATTRIBUTE,
    MOOD_FILTER_ID, RANDOM_SLOT_ID, SECONDARY_BUTTON_CLASS, SPIN_BUTTON_ID, TABLE_BODY_ID,
    TABLE_TAB_ID, TABLE_VIEW_ID,
};
use crate::ports::{Display, Document, Element};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    tag: String,
    inner_html: String,
    display: Option<Display>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl Element for MemoryElement {
    fn set_inner_html(&mut self, html: &str) {
        self.inner_html = html.to_string();
    }

    fn inner_html(&self) -> &str {
        &self.inner_html
    }

    fn set_display(&mut self, display: Display) {
        self.display = Some(display);
    }

    fn display(&self) -> Option<Display> {
        self.display
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Headless host document: a flat id -> element map plus parent/child order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
    order: Vec<String>,
    children: HashMap<String, Vec<String>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level element. Re-adding an id replaces it.
    pub fn with_element(mut self, id: &str, tag: &str) -> Self {
        self.insert(id, MemoryElement::new(tag));
        self
    }

    pub fn with_class(mut self, id: &str, class: &str) -> Self {
        if let Some(element) = self.elements.get_mut(id) {
            element.add_class(class);
        }
        self
    }

    pub fn with_attribute(mut self, id: &str, name: &str, value: &str) -> Self {
        if let Some(element) = self.elements.get_mut(id) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Add an element under `parent_id`. Ignored when the parent is missing or
    /// `id` is already taken.
    pub fn with_child(mut self, parent_id: &str, id: &str, tag: &str) -> Self {
        if self.elements.contains_key(parent_id) && !self.elements.contains_key(id) {
            self.insert(id, MemoryElement::new(tag));
            self.children
                .entry(parent_id.to_string())
                .or_default()
                .push(id.to_string());
        }
        self
    }

    /// Filter button under `mood-filter`, id `mood-{slug}`. Moods that slug
    /// alike ("Coffee", "coffee") get a numeric suffix.
    pub fn with_mood_button(self, mood: &str) -> Self {
        let slug = format!("mood-{}", mood.to_lowercase().replace(' ', "-"));
        let mut id = slug.clone();
        let mut n = 1;
        while self.elements.contains_key(&id) {
            n += 1;
            id = format!("{slug}-{n}");
        }
        self.with_child(MOOD_FILTER_ID, &id, "button")
            .with_attribute(&id, MOOD_ATTRIBUTE, mood)
            .with_class(&id, SECONDARY_BUTTON_CLASS)
    }

    /// Every container the directory page uses, with an `all` filter button
    /// followed by one button per mood.
    pub fn directory_page(moods: &[&str]) -> Self {
        let mut doc = Self::new()
            .with_element(CARD_TAB_ID, "button")
            .with_element(TABLE_TAB_ID, "button")
            .with_element(MOOD_FILTER_ID, "div")
            .with_element(SPIN_BUTTON_ID, "button")
            .with_element(CARD_VIEW_ID, "section")
            .with_element(GRID_ID, "div")
            .with_element(TABLE_VIEW_ID, "section")
            .with_element(TABLE_BODY_ID, "tbody")
            .with_element(MODAL_ID, "div")
            .with_element(RANDOM_SLOT_ID, "div")
            .with_element("modal-close", "span")
            .with_class("modal-close", CLOSE_CLASS)
            .with_mood_button(ALL_MOODS);
        for mood in moods {
            doc = doc.with_mood_button(mood);
        }
        doc
    }

    /// Render every element as a flat sequence of tags, in insertion order.
    pub fn to_html(&self) -> String {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id).map(|element| (id, element)))
            .map(|(id, element)| {
                let mut open = format!("<{} id=\"{}\"", element.tag, id);
                if !element.classes.is_empty() {
                    open.push_str(&format!(" class=\"{}\"", element.classes.join(" ")));
                }
                for (name, value) in &element.attributes {
                    open.push_str(&format!(" {name}=\"{value}\""));
                }
                if let Some(display) = element.display {
                    open.push_str(&format!(" style=\"display: {}\"", display.as_css()));
                }
                format!("{open}>{}</{}>\n", element.inner_html, element.tag)
            })
            .collect()
    }

    fn insert(&mut self, id: &str, element: MemoryElement) {
        if self.elements.insert(id.to_string(), element).is_none() {
            self.order.push(id.to_string());
        }
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut MemoryElement> {
        self.elements.get_mut(id)
    }

    fn children(&self, parent_id: &str) -> Vec<String> {
        self.children.get(parent_id).cloned().unwrap_or_default()
    }

    fn find_by_class(&self, class: &str) -> Option<String> {
        self.order
            .iter()
            .find(|id| self.elements.get(*id).is_some_and(|e| e.has_class(class)))
            .cloned()
    }
}
