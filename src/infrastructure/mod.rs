// src/infrastructure/mod.rs
pub mod catalog;
pub mod config;
pub mod memory_document;
pub mod page;

pub use catalog::{builtin_store, load_catalog};
pub use config::Config;
pub use memory_document::{MemoryDocument, MemoryElement};
pub use page::PageWriter;
