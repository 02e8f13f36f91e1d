pub mod identifier;
pub mod profile;
pub mod text;

pub use identifier::Identifier;
pub use profile::GameProfile;

/// Character that marks a string as still containing unresolved placeholders.
pub const PLACEHOLDER_MARKER: char = '%';

/// Whether `text` still carries a placeholder that has to be resolved later.
pub fn has_placeholder(text: &str) -> bool {
    text.contains(PLACEHOLDER_MARKER)
}
