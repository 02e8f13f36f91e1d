use std::collections::BTreeMap;

use itemforge_core::Identifier;

/// String tags stored on an item, surviving every rebuild of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistentDataContainer {
    values: BTreeMap<Identifier, String>,
}

impl PersistentDataContainer {
    pub fn set(&mut self, key: Identifier, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: &Identifier) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &Identifier) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Identifier, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
