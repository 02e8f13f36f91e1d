use std::collections::HashMap;

use indexmap::IndexMap;
use itemforge_core::Identifier;
use itemforge_world::{Entity, ItemStack};

use crate::{Hook, HookCapabilities};

/// A hook backed by a fixed catalog instead of a live plugin.
///
/// Every catalog item is stamped with an `<id>:id` tag holding its key, the
/// same way content plugins recognise their own items later on.
pub struct StaticHook {
    id: String,
    capabilities: HookCapabilities,
    items: IndexMap<String, ItemStack>,
    entities: HashMap<String, String>,
    placeholders: HashMap<String, String>,
    loaded: bool,
}

impl StaticHook {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_capabilities(id, HookCapabilities::ITEMS)
    }

    pub fn with_capabilities(id: impl Into<String>, capabilities: HookCapabilities) -> Self {
        Self {
            id: id.into(),
            capabilities,
            items: IndexMap::new(),
            entities: HashMap::new(),
            placeholders: HashMap::new(),
            loaded: false,
        }
    }

    fn id_key(&self) -> Identifier {
        Identifier::new(self.id.to_lowercase(), "id")
    }

    pub fn with_item(mut self, key: impl Into<String>, mut item: ItemStack) -> Self {
        let key = key.into();
        let id_key = self.id_key();
        if let Some(meta) = item.meta_mut() {
            meta.persistent_data_mut().set(id_key, key.clone());
        }
        self.items.insert(key, item);
        self.capabilities.items = true;
        self
    }

    /// Labels every entity of `entity_type` as `key`.
    pub fn with_entity(mut self, entity_type: &str, key: impl Into<String>) -> Self {
        self.entities
            .insert(entity_type.to_ascii_uppercase(), key.into());
        self.capabilities.entities = true;
        self
    }

    /// Answers placeholder requests; `%player_name%` always resolves to the
    /// viewer.
    pub fn with_placeholders(mut self) -> Self {
        self.capabilities.placeholders = true;
        self
    }

    pub fn with_placeholder(mut self, name: &str, value: impl Into<String>) -> Self {
        self.placeholders.insert(format!("%{name}%"), value.into());
        self.with_placeholders()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Hook for StaticHook {
    fn id(&self) -> &str {
        &self.id
    }

    fn capabilities(&self) -> HookCapabilities {
        self.capabilities
    }

    fn on_load(&mut self) -> Result<(), String> {
        self.loaded = true;
        log::debug!("{} serves {} catalog items", self.id, self.items.len());
        Ok(())
    }

    fn item(&self, key: &str) -> Option<ItemStack> {
        self.items.get(key).cloned()
    }

    fn item_key(&self, item: &ItemStack) -> Option<String> {
        match item.meta() {
            Some(meta) => meta
                .persistent_data()
                .get(&self.id_key())
                .map(str::to_string),
            // Nothing to stamp, fall back to the material.
            None => self
                .items
                .iter()
                .find(|(_, candidate)| candidate.material() == item.material())
                .map(|(key, _)| key.clone()),
        }
    }

    fn entity_key(&self, entity: &Entity) -> Option<String> {
        self.entities.get(&entity.type_name()).cloned()
    }

    fn process_placeholders(&self, viewer: &str, raw: &str) -> Option<String> {
        if !self.capabilities.placeholders {
            return None;
        }
        let processed = self
            .placeholders
            .iter()
            .fold(raw.replace("%player_name%", viewer), |text, (name, value)| {
                text.replace(name.as_str(), value)
            });
        Some(processed)
    }
}
