// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::Restaurant;

/// Builder for restaurant records in tests
///
/// Every field gets a predictable default derived from the name, so tests
/// only spell out what they assert on.
///
/// # Examples
///
/// ```
/// use dinedir::util::testing::RestaurantFixture;
///
/// let r = RestaurantFixture::new("Wild Wings")
///     .with_moods(&["late-night"])
///     .with_rating(4.5)
///     .build();
/// assert_eq!(r.image, "https://example.com/wild-wings.jpg");
/// assert!(r.has_mood("late-night"));
/// ```
pub struct RestaurantFixture {
    restaurant: Restaurant,
}

impl RestaurantFixture {
    pub fn new(name: &str) -> Self {
        let slug = name.to_lowercase().replace(' ', "-");
        Self {
            restaurant: Restaurant {
                name: name.to_string(),
                image: format!("https://example.com/{slug}.jpg"),
                description: format!("Description of {name}"),
                vibes: vec![],
                walk: "5 min walk".to_string(),
                rating: 4.0,
                reviews: 10,
                cuisine: None,
                avg_price: None,
                hours: None,
                wifi: None,
                moods: vec![],
            },
        }
    }

    pub fn with_vibes(mut self, vibes: &[&str]) -> Self {
        self.restaurant.vibes = vibes.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_moods(mut self, moods: &[&str]) -> Self {
        self.restaurant.moods = moods.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.restaurant.rating = rating;
        self
    }

    pub fn with_reviews(mut self, reviews: u32) -> Self {
        self.restaurant.reviews = reviews;
        self
    }

    /// Populate cuisine, average price, hours and wifi.
    pub fn with_table_fields(mut self, cuisine: &str, avg_price: &str, hours: &str, wifi: &str) -> Self {
        self.restaurant.cuisine = Some(cuisine.to_string());
        self.restaurant.avg_price = Some(avg_price.to_string());
        self.restaurant.hours = Some(hours.to_string());
        self.restaurant.wifi = Some(wifi.to_string());
        self
    }

    pub fn build(self) -> Restaurant {
        self.restaurant
    }
}

/// Four records; A and C share the `late-night` mood, D has none.
pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        RestaurantFixture::new("A").with_moods(&["late-night", "family"]).build(),
        RestaurantFixture::new("B").with_moods(&["coffee"]).build(),
        RestaurantFixture::new("C").with_moods(&["late-night"]).build(),
        RestaurantFixture::new("D").build(),
    ]
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
