//! Reading item descriptions out of configuration trees.

mod catalog;
mod serializer;

pub use catalog::catalog_hook;
pub use serializer::{deserialize_description, deserialize_item, ItemDeserializer};
