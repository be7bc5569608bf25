// src/domain/restaurant.rs
use serde::{Deserialize, Serialize};

use crate::constants::MAX_RATING;
use crate::domain::DomainError;

/// One restaurant's static display data.
///
/// `cuisine`, `avg_price`, `hours`, `wifi` and `moods` are only read by the
/// table and the mood filter and are often absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub vibes: Vec<String>,
    pub walk: String,
    pub rating: f64,
    pub reviews: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wifi: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moods: Vec<String>,
}

impl Restaurant {
    pub fn has_mood(&self, mood: &str) -> bool {
        self.moods.iter().any(|m| m == mood)
    }

    /// "1 review" or "N reviews"
    pub fn review_label(&self) -> String {
        let noun = if self.reviews == 1 { "review" } else { "reviews" };
        format!("{} {}", self.reviews, noun)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.rating.is_finite() || self.rating < 0.0 || self.rating > MAX_RATING {
            return Err(DomainError::InvalidRating {
                name: self.name.clone(),
                rating: self.rating,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn restaurant(reviews: u32, rating: f64) -> Restaurant {
        Restaurant {
            name: "Second Cup".to_string(),
            image: "https://example.com/cup.jpg".to_string(),
            description: "Coffee".to_string(),
            vibes: vec!["Coffee & Chill".to_string()],
            walk: "6 min walk".to_string(),
            rating,
            reviews,
            cuisine: None,
            avg_price: None,
            hours: None,
            wifi: None,
            moods: vec!["chill".to_string()],
        }
    }

    #[rstest]
    #[case(1, "1 review")]
    #[case(0, "0 reviews")]
    #[case(312, "312 reviews")]
    fn given_review_count_when_labelling_then_pluralizes(#[case] reviews: u32, #[case] expected: &str) {
        assert_eq!(restaurant(reviews, 4.0).review_label(), expected);
    }

    #[test]
    fn given_mood_list_when_checking_mood_then_matches_exactly() {
        let r = restaurant(1, 4.0);
        assert!(r.has_mood("chill"));
        assert!(!r.has_mood("Chill"));
        assert!(!r.has_mood("late-night"));
    }

    #[rstest]
    #[case(0.0)]
    #[case(4.4)]
    #[case(5.0)]
    fn given_rating_in_range_when_validating_then_ok(#[case] rating: f64) {
        assert!(restaurant(1, rating).validate().is_ok());
    }

    #[rstest]
    #[case(-0.1)]
    #[case(5.1)]
    #[case(f64::NAN)]
    fn given_rating_out_of_range_when_validating_then_fails(#[case] rating: f64) {
        let result = restaurant(1, rating).validate();
        assert!(matches!(result, Err(DomainError::InvalidRating { .. })));
    }

    #[test]
    fn given_camel_case_json_without_optionals_when_parsing_then_optionals_absent() {
        let json = r#"{
            "name": "KFC",
            "image": "https://example.com/kfc.jpg",
            "description": "Fried chicken",
            "vibes": ["Quick Snack"],
            "walk": "5 min walk",
            "rating": 4.2,
            "reviews": 289
        }"#;

        let r: Restaurant = serde_json::from_str(json).unwrap();

        assert_eq!(r.name, "KFC");
        assert_eq!(r.avg_price, None);
        assert!(r.moods.is_empty());
    }

    #[test]
    fn given_avg_price_key_when_parsing_then_maps_to_field() {
        let json = r#"{
            "name": "KFC", "image": "", "description": "", "walk": "",
            "rating": 4.2, "reviews": 1, "avgPrice": "$$", "moods": ["late-night"]
        }"#;

        let r: Restaurant = serde_json::from_str(json).unwrap();

        assert_eq!(r.avg_price.as_deref(), Some("$$"));
        assert!(r.has_mood("late-night"));
    }
}
