#![allow(dead_code)]

use dinedir::application::{InteractionController, RestaurantStore, ViewRenderer};
use dinedir::domain::{OpeningHours, Restaurant};
use dinedir::infrastructure::MemoryDocument;
use dinedir::ports::FixedClock;
use dinedir::util::testing::RestaurantFixture;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type PageController = InteractionController<MemoryDocument, RestaurantStore, FixedClock, StdRng>;

/// Moods used by the test catalog
pub mod moods {
    pub const LATE_NIGHT: &str = "Late Night";
    pub const COFFEE: &str = "Coffee & Chill";
    pub const FAMILY: &str = "Family Dinner";
    pub const BRUNCH: &str = "Brunch";
}

/// Five restaurants; "Late Night" on three, "Coffee & Chill" on two,
/// "Family Dinner" on one, "Brunch" on none.
pub fn catalog() -> Vec<Restaurant> {
    vec![
        RestaurantFixture::new("McDonald's")
            .with_moods(&[moods::LATE_NIGHT, moods::FAMILY])
            .with_rating(4.3)
            .with_reviews(312)
            .build(),
        RestaurantFixture::new("Second Cup")
            .with_moods(&[moods::COFFEE])
            .with_table_fields("Cafe", "$", "07:00-23:00", "yes")
            .with_rating(4.4)
            .build(),
        RestaurantFixture::new("Burning Brownie")
            .with_moods(&[moods::LATE_NIGHT, moods::COFFEE])
            .with_rating(4.6)
            .with_reviews(1)
            .build(),
        RestaurantFixture::new("Pizza Hut").with_rating(4.1).build(),
        RestaurantFixture::new("Wild Wings")
            .with_moods(&[moods::LATE_NIGHT])
            .with_rating(4.5)
            .build(),
    ]
}

pub fn store() -> RestaurantStore {
    RestaurantStore::new(catalog()).expect("catalog is valid")
}

/// Controller over `document` with the clock fixed at `hour` and a seeded RNG.
pub fn controller_at(document: MemoryDocument, hour: u32, seed: u64) -> PageController {
    let renderer = ViewRenderer::new(
        FixedClock::at_hour(hour).expect("valid hour"),
        OpeningHours::default(),
    );
    InteractionController::new(document, store(), renderer, StdRng::seed_from_u64(seed))
}

/// Full directory page with a button for each test mood.
pub fn full_page() -> MemoryDocument {
    MemoryDocument::directory_page(&[moods::LATE_NIGHT, moods::COFFEE, moods::FAMILY, moods::BRUNCH])
}

/// Names in the order their `<h3>` headings appear in `html`.
pub fn card_names(html: &str) -> Vec<String> {
    html.split("<h3>")
        .skip(1)
        .filter_map(|part| part.split("</h3>").next())
        .map(str::to_string)
        .collect()
}
