use itemforge_world::{Entity, ItemStack};

/// What a hook is able to answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookCapabilities {
    pub items: bool,
    pub entities: bool,
    pub placeholders: bool,
}

impl HookCapabilities {
    pub const NONE: Self = Self {
        items: false,
        entities: false,
        placeholders: false,
    };

    pub const ITEMS: Self = Self {
        items: true,
        ..Self::NONE
    };

    pub const fn with_entities(mut self) -> Self {
        self.entities = true;
        self
    }

    pub const fn with_placeholders(mut self) -> Self {
        self.placeholders = true;
        self
    }
}

/// Bridge to an external content plugin.
///
/// A hook is registered up front; it only gets asked anything once the
/// registry found the external system it stands for and activated it.
pub trait Hook: Send + Sync {
    /// Id of the external system, matched case-insensitively. Also the
    /// prefix of qualified item references, e.g. `oraxen:` in `oraxen:ruby`.
    fn id(&self) -> &str;

    fn capabilities(&self) -> HookCapabilities;

    /// Called once on activation.
    fn on_load(&mut self) -> Result<(), String> {
        Ok(())
    }

    /// The item registered under `key`.
    fn item(&self, _key: &str) -> Option<ItemStack> {
        None
    }

    /// The key this hook knows `item` by, without the hook prefix.
    fn item_key(&self, _item: &ItemStack) -> Option<String> {
        None
    }

    fn entity_key(&self, _entity: &Entity) -> Option<String> {
        None
    }

    /// Resolves placeholders in `raw` from the point of view of `viewer`.
    fn process_placeholders(&self, _viewer: &str, _raw: &str) -> Option<String> {
        None
    }
}
