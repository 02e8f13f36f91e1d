//! Declarative items and how they become [`ItemStack`](itemforge_world::ItemStack)s.

mod builder;
mod introspect;
mod lore;
mod materialize;
pub mod texture;

use itemforge_core::Identifier;

pub use builder::{ItemDescription, Templated};
pub use lore::{LoreAppendMode, UnknownLoreAppendMode};

/// Tag holding the unresolved skull owner template.
pub fn skull_owner_key() -> Identifier {
    Identifier::new("itemforge", "skull_owner")
}

/// Tag holding the unresolved skull texture template.
pub fn skull_texture_key() -> Identifier {
    Identifier::new("itemforge", "skull_texture")
}
