// src/application/mod.rs
pub mod controller;
pub mod randomizer;
pub mod store;
pub mod view_renderer;

pub use controller::{Bindings, InteractionController, UiEvent};
pub use randomizer::Randomizer;
pub use store::{RestaurantSource, RestaurantStore};
pub use view_renderer::ViewRenderer;
