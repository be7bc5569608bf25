// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),
    #[error("Duplicate restaurant name: {0}")]
    DuplicateName(String),
    #[error("Rating {rating} of {name} is outside 0.0..=5.0")]
    InvalidRating { name: String, rating: f64 },
    #[error("Invalid opening hour: {0}")]
    InvalidHour(u32),
    #[error("Catalog error: {0}")]
    CatalogError(String),
}
