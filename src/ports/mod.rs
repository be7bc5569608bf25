// src/ports/mod.rs
pub mod clock;
pub mod document;
pub mod html;

pub use clock::{Clock, FixedClock, SystemClock};
pub use document::{Display, Document, Element};
pub use html::HtmlPresenter;
