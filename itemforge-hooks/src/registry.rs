use indexmap::IndexMap;
use itemforge_world::{Entity, ItemStack};

use crate::{Environment, Hook, HookCapabilities, HookError};

/// Collects hooks before anything is known about which external systems
/// exist. Turning it into a [`HookRegistry`] runs activation once.
#[derive(Default)]
pub struct HookRegistryBuilder {
    hooks: IndexMap<String, Box<dyn Hook>>,
}

impl HookRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering an id twice replaces the earlier hook but keeps its
    /// place in the lookup order.
    pub fn register<H: Hook + 'static>(&mut self, hook: H) -> &mut Self {
        self.register_boxed(Box::new(hook))
    }

    pub fn register_boxed(&mut self, hook: Box<dyn Hook>) -> &mut Self {
        let id = hook.id().to_lowercase();
        if self.hooks.insert(id, hook).is_some() {
            log::debug!("Replaced an already registered hook");
        }
        self
    }

    /// Activates, in registration order, every hook whose external system
    /// is present. A failing `on_load` is logged and leaves the other hooks
    /// alone.
    pub fn activate(self, environment: &dyn Environment) -> HookRegistry {
        let hooks = self
            .hooks
            .into_iter()
            .map(|(key, mut hook)| {
                let active = environment.is_present(hook.id());
                if active {
                    match hook.on_load() {
                        Ok(()) => log::info!("Successfully hooked into {}", hook.id()),
                        Err(err) => log::error!("Hook {} failed to load: {}", hook.id(), err),
                    }
                }
                (key, RegisteredHook { hook, active })
            })
            .collect();
        HookRegistry { hooks }
    }
}

struct RegisteredHook {
    hook: Box<dyn Hook>,
    active: bool,
}

/// Activated hooks. Read only, so it can be shared freely.
pub struct HookRegistry {
    hooks: IndexMap<String, RegisteredHook>,
}

impl HookRegistry {
    /// A registry that only knows built-in materials.
    pub fn vanilla() -> Self {
        Self {
            hooks: IndexMap::new(),
        }
    }

    pub fn get_hook(&self, id: &str) -> Option<&dyn Hook> {
        self.hooks
            .get(&id.to_lowercase())
            .map(|registered| registered.hook.as_ref())
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.hooks.contains_key(&id.to_lowercase())
    }

    /// False for unknown ids.
    pub fn is_active(&self, id: &str) -> bool {
        self.hooks
            .get(&id.to_lowercase())
            .is_some_and(|registered| registered.active)
    }

    /// Active hooks having `capability`, in registration order.
    fn active_with(
        &self,
        capability: fn(HookCapabilities) -> bool,
    ) -> impl Iterator<Item = &dyn Hook> {
        self.hooks
            .values()
            .filter(move |registered| {
                registered.active && capability(registered.hook.capabilities())
            })
            .map(|registered| registered.hook.as_ref())
    }

    /// Resolves `plugin:key` through the matching hook, anything without a
    /// `:` as a built-in material name.
    pub fn resolve_item(&self, reference: &str) -> Result<ItemStack, HookError> {
        let Some((hook_id, key)) = reference.split_once(':') else {
            return ItemStack::of(reference)
                .ok_or_else(|| HookError::UnknownMaterial(reference.to_string()));
        };

        let registered = self
            .hooks
            .get(&hook_id.to_lowercase())
            .ok_or_else(|| HookError::UnknownHook(hook_id.to_string()))?;
        if !registered.hook.capabilities().items {
            return Err(HookError::MissingItemCapability(hook_id.to_string()));
        }
        if !registered.active {
            return Err(HookError::InactiveHook(hook_id.to_string()));
        }
        registered
            .hook
            .item(key)
            .ok_or_else(|| HookError::UnknownItem {
                hook: hook_id.to_string(),
                key: key.to_string(),
            })
    }

    /// The reference [`resolve_item`](Self::resolve_item) would accept for
    /// `item`. The first active item hook that claims it wins; unclaimed items
    /// fall back to their material name.
    pub fn unresolve_item(&self, item: &ItemStack) -> String {
        self.active_with(|caps| caps.items)
            .find_map(|hook| {
                hook.item_key(item)
                    .filter(|key| !key.is_empty())
                    .map(|key| format!("{}:{}", hook.id(), key))
            })
            .unwrap_or_else(|| item.type_name().to_string())
    }

    pub fn resolve_entity_label(&self, entity: &Entity) -> String {
        self.active_with(|caps| caps.entities)
            .find_map(|hook| {
                hook.entity_key(entity)
                    .filter(|key| !key.is_empty())
                    .map(|key| format!("{}:{}", hook.id(), key))
            })
            .unwrap_or_else(|| entity.type_name())
    }

    /// Asks the first active placeholder hook to fill in `raw`. Without one
    /// the text comes back untouched.
    pub fn process_placeholders(&self, viewer: &str, raw: &str) -> String {
        self.active_with(|caps| caps.placeholders)
            .find_map(|hook| hook.process_placeholders(viewer, raw))
            .unwrap_or_else(|| raw.to_string())
    }
}
