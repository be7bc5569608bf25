// src/domain/mood.rs
use crate::constants::ALL_MOODS;
use crate::domain::Restaurant;

/// The filter selected by the active mood button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MoodFilter {
    #[default]
    All,
    Mood(String),
}

impl MoodFilter {
    /// Interpret a button's mood attribute; `"all"` selects everything.
    pub fn from_attribute(value: &str) -> Self {
        if value == ALL_MOODS {
            MoodFilter::All
        } else {
            MoodFilter::Mood(value.to_string())
        }
    }

    pub fn as_attribute(&self) -> &str {
        match self {
            MoodFilter::All => ALL_MOODS,
            MoodFilter::Mood(mood) => mood,
        }
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        match self {
            MoodFilter::All => true,
            MoodFilter::Mood(mood) => restaurant.has_mood(mood),
        }
    }

    /// References into `restaurants` that pass the filter, in their original order.
    pub fn apply<'a>(&self, restaurants: &'a [Restaurant]) -> Vec<&'a Restaurant> {
        restaurants.iter().filter(|r| self.matches(r)).collect()
    }
}
