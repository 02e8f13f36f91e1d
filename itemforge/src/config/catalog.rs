use itemforge_config::ConfigNode;
use itemforge_hooks::{HookCapabilities, HookRegistry, StaticHook};

use super::ItemDeserializer;

const ITEMS: &str = "items";
const ENTITIES: &str = "entities";
const PLACEHOLDERS: &str = "placeholders";

/// Builds a catalog hook from a `[hooks.<id>]` section.
///
/// Catalog items may only use built-in materials; an item referring to
/// another hook is dropped.
pub fn catalog_hook<N: ConfigNode>(
    id: &str,
    source: &N,
    deserializer: &ItemDeserializer,
) -> StaticHook {
    let vanilla = HookRegistry::vanilla();
    let mut hook = StaticHook::with_capabilities(id, HookCapabilities::NONE);

    if let Some(items) = source.child(ITEMS) {
        for (key, node) in items.children() {
            match deserializer.deserialize_item(node, &vanilla) {
                Some(item) => hook = hook.with_item(key, item),
                None => log::warn!("Catalog {id} has no usable item {key}"),
            }
        }
    }
    if let Some(entities) = source.child(ENTITIES) {
        for (entity_type, label) in entities.children() {
            hook = hook.with_entity(entity_type, label.get_string(""));
        }
    }
    if let Some(placeholders) = source.child(PLACEHOLDERS) {
        hook = hook.with_placeholders();
        for (name, value) in placeholders.children() {
            hook = hook.with_placeholder(name, value.get_string(""));
        }
    }
    hook
}

#[cfg(test)]
mod test {
    use itemforge_hooks::{Hook, HookRegistryBuilder};
    use itemforge_world::Entity;

    use super::catalog_hook;
    use crate::config::ItemDeserializer;

    fn section() -> toml::Value {
        toml::Value::Table(
            toml::from_str(
                r#"
                [items.ruby]
                material = "EMERALD"
                name = "&cRuby"

                [items.broken]
                material = "other:thing"

                [entities]
                zombie = "ghoul"

                [placeholders]
                rank = "Knight"
                "#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn builds_catalog() {
        let hook = catalog_hook("Forge", &section(), &ItemDeserializer::default());
        let caps = hook.capabilities();
        assert!(caps.items && caps.entities && caps.placeholders);
        assert_eq!(hook.len(), 1);
        let ruby = hook.item("ruby").unwrap();
        assert_eq!(ruby.meta().unwrap().display_name(), Some("§cRuby"));
        assert!(hook.item("broken").is_none());
    }

    #[test]
    fn catalog_serves_registry() {
        let mut builder = HookRegistryBuilder::new();
        builder.register(catalog_hook("Forge", &section(), &ItemDeserializer::default()));
        let hooks = builder.activate(&|_: &str| true);

        let ruby = hooks.resolve_item("forge:ruby").unwrap();
        assert_eq!(hooks.unresolve_item(&ruby), "Forge:ruby");
        assert_eq!(
            hooks.resolve_entity_label(&Entity::new(1, "zombie")),
            "Forge:ghoul"
        );
        assert_eq!(
            hooks.process_placeholders("Alex", "%player_name% the %rank%"),
            "Alex the Knight"
        );
    }

    #[test]
    fn empty_section_has_no_capabilities() {
        let hook = catalog_hook(
            "bare",
            &toml::Value::Table(toml::Table::new()),
            &ItemDeserializer::default(),
        );
        assert!(hook.is_empty());
        assert!(!hook.capabilities().items);
    }
}
