//! Shop settings: key-value store seam and typed read-through.

pub mod shop;
pub mod store;

pub use shop::ShopSettings;
pub use store::{InMemorySettings, SettingsStore};
