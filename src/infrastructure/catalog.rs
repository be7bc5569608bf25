// src/infrastructure/catalog.rs
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::RestaurantStore;
use crate::domain::{DomainError, Restaurant};

struct Seed {
    name: &'static str,
    image: &'static str,
    description: &'static str,
    vibes: &'static [&'static str],
    walk: &'static str,
    rating: f64,
    reviews: u32,
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "McDonald's",
        image: "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/15/06/c0/56/img-20181013-142845-largejpg.jpg?w=1000&h=1000&s=1",
        description: "Quick, reliable fast food with burgers, fries and happy meals – perfect for families and late-night cravings.",
        vibes: &["Quick Snack", "Family Dinner", "Late Night"],
        walk: "4 min walk",
        rating: 4.3,
        reviews: 312,
    },
    Seed {
        name: "KFC",
        image: "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/28/59/4c/73/caption.jpg?w=400&h=-1&s=1",
        description: "Crispy fried chicken, zinger burgers and hot wings – the ultimate comfort food spot.",
        vibes: &["Quick Snack", "Family Dinner", "Late Night"],
        walk: "5 min walk",
        rating: 4.2,
        reviews: 289,
    },
    Seed {
        name: "Burning Brownie",
        image: "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/22/05/44/37/burning-brownie.jpg?w=900&h=500&s=1",
        description: "Heaven for dessert lovers – signature sizzling brownies, cakes and milkshakes that melt in your mouth.",
        vibes: &["Late Night", "Coffee & Chill"],
        walk: "3 min walk",
        rating: 4.6,
        reviews: 156,
    },
    Seed {
        name: "Second Cup",
        image: "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/1a/27/d9/bd/counter.jpg?w=900&h=500&s=1",
        description: "Cozy atmosphere and excellent coffee – perfect for chilling with friends or quiet work sessions.",
        vibes: &["Coffee & Chill", "Best View"],
        walk: "6 min walk",
        rating: 4.4,
        reviews: 203,
    },
    Seed {
        name: "Pizza Hut",
        image: "https://lookaside.instagram.com/seo/google_widget/crawler/?media_id=3757028892377631112",
        description: "Freshly baked pan pizzas with unlimited toppings – ideal for group hangouts and family dinners.",
        vibes: &["Family Dinner", "Late Night"],
        walk: "7 min walk",
        rating: 4.1,
        reviews: 267,
    },
    Seed {
        name: "Wild Wings",
        image: "https://www.youlinmagazine.com/articles/wild-wings-restaurant-islamabad-2.jpg",
        description: "Exceptional wings in multiple flavors with great sides – perfect for casual dining and sports nights.",
        vibes: &["Family Dinner", "Late Night"],
        walk: "5 min walk",
        rating: 4.5,
        reviews: 178,
    },
];

/// The six built-in restaurants. Table-only fields and moods are not part of
/// the data and stay empty.
pub fn builtin_restaurants() -> Vec<Restaurant> {
    SEEDS
        .iter()
        .map(|seed| Restaurant {
            name: seed.name.to_string(),
            image: seed.image.to_string(),
            description: seed.description.to_string(),
            vibes: seed.vibes.iter().map(|v| v.to_string()).collect(),
            walk: seed.walk.to_string(),
            rating: seed.rating,
            reviews: seed.reviews,
            cuisine: None,
            avg_price: None,
            hours: None,
            wifi: None,
            moods: vec![],
        })
        .collect()
}

pub fn builtin_store() -> Result<RestaurantStore, DomainError> {
    RestaurantStore::new(builtin_restaurants())
}

/// Parse a JSON array of restaurants. An empty array is rejected.
pub fn parse_catalog(json: &str) -> Result<RestaurantStore> {
    let restaurants: Vec<Restaurant> =
        serde_json::from_str(json).context("Failed to parse restaurant catalog")?;
    if restaurants.is_empty() {
        return Err(DomainError::CatalogError("catalog contains no restaurants".to_string()).into());
    }
    Ok(RestaurantStore::new(restaurants)?)
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<RestaurantStore> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let store = parse_catalog(&content)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;
    debug!(path = %path.display(), count = store.len(), "Loaded catalog");
    Ok(store)
}
