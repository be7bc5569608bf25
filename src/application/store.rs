// src/application/store.rs
use std::collections::HashSet;

use crate::domain::{DomainError, MoodFilter, Restaurant};

/// Read-only access to the restaurant list, injected into the renderer and
/// controller.
pub trait RestaurantSource {
    fn restaurants(&self) -> &[Restaurant];

    fn find(&self, name: &str) -> Result<&Restaurant, DomainError> {
        self.restaurants()
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| DomainError::RestaurantNotFound(name.to_string()))
    }

    fn filtered(&self, filter: &MoodFilter) -> Vec<&Restaurant> {
        filter.apply(self.restaurants())
    }
}

/// Validated, immutable, ordered list of restaurants.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantStore {
    restaurants: Vec<Restaurant>,
}

impl RestaurantStore {
    /// Validates ratings and name uniqueness. An empty list is allowed.
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for restaurant in &restaurants {
            restaurant.validate()?;
            if !seen.insert(restaurant.name.as_str()) {
                return Err(DomainError::DuplicateName(restaurant.name.clone()));
            }
        }
        Ok(Self { restaurants })
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Distinct moods across all records, in first-seen order.
    pub fn moods(&self) -> Vec<&str> {
        let mut moods: Vec<&str> = Vec::new();
        for mood in self.restaurants.iter().flat_map(|r| &r.moods) {
            if !moods.contains(&mood.as_str()) {
                moods.push(mood);
            }
        }
        moods
    }
}

impl RestaurantSource for RestaurantStore {
    fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }
}

impl<S: RestaurantSource + ?Sized> RestaurantSource for &S {
    fn restaurants(&self) -> &[Restaurant] {
        (**self).restaurants()
    }
}
