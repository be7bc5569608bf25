// src/ports/html.rs

use crate::constants::STAR_SLOTS;
use crate::domain::{OpenStatus, Restaurant};
use tracing::instrument;

/// Turns restaurant records into markup fragments.
///
/// Text fields are inserted as-is; escaping belongs to the host document.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Five glyph slots followed by the rating to one decimal.
    ///
    /// Slot `i` (1-based) is filled iff `i <= floor(rating)`, so 4.9 shows
    /// four filled stars.
    pub fn render_stars(&self, rating: f64) -> String {
        let full = rating.floor();
        let slots: String = (1..=STAR_SLOTS)
            .map(|i| {
                if f64::from(i) <= full {
                    r#"<span class="filled">★</span>"#
                } else {
                    r#"<span class="empty">☆</span>"#
                }
            })
            .collect();

        // Ties round up, as a browser's toFixed(1) does
        let shown = (rating * 10.0).round() / 10.0;
        format!(r#"<div class="rating"><div class="stars">{slots}</div> {shown:.1}</div>"#)
    }

    #[instrument(level = "trace", skip(self, restaurant), fields(name = %restaurant.name))]
    pub fn render_card(&self, restaurant: &Restaurant, status: OpenStatus) -> String {
        let vibes: String = restaurant
            .vibes
            .iter()
            .map(|v| format!(r#"<span class="vibe-tag">{v}</span>"#))
            .collect();

        format!(
            r#"
        <div class="restaurant-card">
            <img src="{image}" alt="{name}">
            <span class="status-badge {badge_class}">🕒 {status}</span>
            <div class="card-content">
                <h3>{name}</h3>
                <div class="rating">
                    <div class="stars">{stars}</div> {rating} ({reviews})
                </div>
                <p class="restaurant-description">{description}</p>
                <div class="vibe-tags">{vibes}</div>
                <div class="walk-distance">{walk}</div>
            </div>
        </div>"#,
            image = restaurant.image,
            name = restaurant.name,
            badge_class = status.badge_class(),
            status = status.label(),
            stars = self.render_stars(restaurant.rating),
            rating = restaurant.rating,
            reviews = restaurant.review_label(),
            description = restaurant.description,
            vibes = vibes,
            walk = restaurant.walk,
        )
    }

    /// Table row; absent optional fields become empty cells.
    #[instrument(level = "trace", skip(self, restaurant), fields(name = %restaurant.name))]
    pub fn render_row(&self, restaurant: &Restaurant, status: OpenStatus) -> String {
        let cell = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();

        format!(
            r#"
        <tr>
            <td>{name}</td>
            <td>{cuisine}</td>
            <td>{avg_price}</td>
            <td>{hours}</td>
            <td>{wifi}</td>
            <td>{stars}</td>
            <td>{status}</td>
        </tr>"#,
            name = restaurant.name,
            cuisine = cell(&restaurant.cuisine),
            avg_price = cell(&restaurant.avg_price),
            hours = cell(&restaurant.hours),
            wifi = cell(&restaurant.wifi),
            stars = self.render_stars(restaurant.rating),
            status = status.label(),
        )
    }

    pub fn render_cards<'a, I>(&self, restaurants: I, status: OpenStatus) -> String
    where
        I: IntoIterator<Item = &'a Restaurant>,
    {
        restaurants
            .into_iter()
            .map(|r| self.render_card(r, status))
            .collect()
    }

    pub fn render_rows<'a, I>(&self, restaurants: I, status: OpenStatus) -> String
    where
        I: IntoIterator<Item = &'a Restaurant>,
    {
        restaurants
            .into_iter()
            .map(|r| self.render_row(r, status))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::RestaurantFixture;
    use rstest::rstest;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[rstest]
    #[case(4.6, 4, "4.6")]
    #[case(5.0, 5, "5.0")]
    #[case(0.0, 0, "0.0")]
    #[case(4.9, 4, "4.9")]
    #[case(3.04, 3, "3.0")]
    #[case(4.25, 4, "4.3")]
    #[case(3.75, 3, "3.8")]
    fn given_rating_when_rendering_stars_then_fills_floor_slots(
        #[case] rating: f64,
        #[case] filled: usize,
        #[case] text: &str,
    ) {
        let html = HtmlPresenter::new().render_stars(rating);

        assert_eq!(count(&html, r#"class="filled""#), filled);
        assert_eq!(count(&html, r#"class="empty""#), 5 - filled);
        assert!(html.ends_with(&format!("</div> {text}</div>")), "{html}");
    }

    #[test]
    fn given_open_restaurant_when_rendering_card_then_contains_all_fields() {
        let r = RestaurantFixture::new("Burning Brownie")
            .with_vibes(&["Late Night", "Coffee & Chill"])
            .with_rating(4.6)
            .with_reviews(156)
            .build();

        let html = HtmlPresenter::new().render_card(&r, OpenStatus::Open);

        assert!(html.contains(r#"<img src="https://example.com/burning-brownie.jpg" alt="Burning Brownie">"#));
        assert!(html.contains(r#"<span class="status-badge ">🕒 OPEN</span>"#));
        assert!(html.contains("<h3>Burning Brownie</h3>"));
        assert!(html.contains("4.6 (156 reviews)"));
        assert!(html.contains(r#"<p class="restaurant-description">Description of Burning Brownie</p>"#));
        assert!(html.contains(
            r#"<div class="vibe-tags"><span class="vibe-tag">Late Night</span><span class="vibe-tag">Coffee & Chill</span></div>"#
        ));
        assert!(html.contains(r#"<div class="walk-distance">5 min walk</div>"#));
    }

    #[test]
    fn given_closed_status_when_rendering_card_then_badge_is_styled_closed() {
        let r = RestaurantFixture::new("KFC").build();

        let html = HtmlPresenter::new().render_card(&r, OpenStatus::Closed);

        assert!(html.contains(r#"<span class="status-badge closed">🕒 CLOSED</span>"#));
    }

    #[test]
    fn given_single_review_when_rendering_card_then_singular() {
        let r = RestaurantFixture::new("KFC").with_rating(4.2).with_reviews(1).build();

        let html = HtmlPresenter::new().render_card(&r, OpenStatus::Open);

        assert!(html.contains("4.2 (1 review)"));
    }

    #[test]
    fn given_missing_optional_fields_when_rendering_row_then_cells_are_empty() {
        let r = RestaurantFixture::new("KFC").with_rating(4.2).build();

        let html = HtmlPresenter::new().render_row(&r, OpenStatus::Closed);

        assert!(html.contains("<td>KFC</td>"));
        assert_eq!(count(&html, "<td></td>"), 4);
        assert!(html.contains("<td>CLOSED</td>"));
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn given_populated_optional_fields_when_rendering_row_then_cells_are_filled() {
        let r = RestaurantFixture::new("Second Cup")
            .with_table_fields("Cafe", "$", "07:00-23:00", "yes")
            .build();

        let html = HtmlPresenter::new().render_row(&r, OpenStatus::Open);

        assert!(html.contains("<td>Cafe</td>"));
        assert!(html.contains("<td>$</td>"));
        assert!(html.contains("<td>07:00-23:00</td>"));
        assert!(html.contains("<td>yes</td>"));
        assert!(html.contains("<td>OPEN</td>"));
    }

    #[test]
    fn given_several_restaurants_when_rendering_cards_then_keeps_order() {
        let list = vec![
            RestaurantFixture::new("First").build(),
            RestaurantFixture::new("Second").build(),
        ];

        let html = HtmlPresenter::new().render_cards(&list, OpenStatus::Open);

        let first = html.find("<h3>First</h3>").unwrap();
        let second = html.find("<h3>Second</h3>").unwrap();
        assert!(first < second);
        assert_eq!(count(&html, r#"class="restaurant-card""#), 2);
    }

    #[test]
    fn given_no_restaurants_when_rendering_rows_then_empty() {
        let list: Vec<Restaurant> = vec![];
        assert_eq!(HtmlPresenter::new().render_rows(&list, OpenStatus::Open), "");
    }
}
