use std::str::FromStr;

use thiserror::Error;

/// Where declared lore goes relative to the lore the base item already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoreAppendMode {
    /// Keep the base lore, drop the declared lines.
    Ignore,
    /// Declared lines above the base lore.
    Top,
    /// Declared lines below the base lore.
    Bottom,
    /// Declared lines replace the base lore.
    Override,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown lore append mode '{0}'")]
pub struct UnknownLoreAppendMode(pub String);

impl FromStr for LoreAppendMode {
    type Err = UnknownLoreAppendMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IGNORE" => Ok(Self::Ignore),
            "TOP" => Ok(Self::Top),
            "BOTTOM" => Ok(Self::Bottom),
            "OVERRIDE" => Ok(Self::Override),
            _ => Err(UnknownLoreAppendMode(s.to_string())),
        }
    }
}

impl LoreAppendMode {
    /// The mode actually used. Without a requested mode the declared lore
    /// replaces the base lore. Merging into a base without lore keeps that
    /// (empty) lore, except for an explicit override.
    pub fn effective(requested: Option<Self>, base_has_lore: bool) -> Self {
        match requested {
            None | Some(Self::Override) => Self::Override,
            Some(_) if !base_has_lore => Self::Ignore,
            Some(mode) => mode,
        }
    }

    pub fn merge(self, base: &[String], declared: &[String]) -> Vec<String> {
        match self {
            Self::Ignore => base.to_vec(),
            Self::Top => declared.iter().chain(base).cloned().collect(),
            Self::Bottom => base.iter().chain(declared).cloned().collect(),
            Self::Override => declared.to_vec(),
        }
    }
}
