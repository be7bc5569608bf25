// src/application/randomizer.rs
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::Restaurant;

/// Uniform pick over the full store.
pub struct Randomizer<R: Rng> {
    rng: R,
}

impl<R: Rng> Randomizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// `None` only when `restaurants` is empty.
    pub fn pick<'a>(&mut self, restaurants: &'a [Restaurant]) -> Option<&'a Restaurant> {
        restaurants.choose(&mut self.rng)
    }
}
