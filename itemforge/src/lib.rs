pub mod config;
pub mod error;
pub mod item;

pub use config::{deserialize_description, deserialize_item, ItemDeserializer};
pub use error::ItemForgeError;
pub use item::{ItemDescription, LoreAppendMode, Templated};
