use derive_more::Display;

pub const VANILLA_NAMESPACE: &str = "minecraft";

/// A namespaced key like `minecraft:diamond` or `itemforge:skull_owner`.
#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{namespace}:{path}")]
pub struct Identifier {
    pub namespace: String,
    pub path: String,
}

impl Identifier {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    pub fn vanilla(path: impl Into<String>) -> Self {
        Self::new(VANILLA_NAMESPACE, path)
    }

    /// Keys without a namespace land in the vanilla one.
    pub fn parse(key: &str) -> Self {
        match key.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::vanilla(key),
        }
    }
}
