// src/domain/mod.rs
pub mod error;
pub mod mood;
pub mod restaurant;
pub mod status;
pub mod view;

pub use error::DomainError;
pub use mood::MoodFilter;
pub use restaurant::Restaurant;
pub use status::{is_open, OpenStatus, OpeningHours};
pub use view::ViewMode;
