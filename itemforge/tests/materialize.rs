use itemforge::{deserialize_description, deserialize_item, ItemDescription, LoreAppendMode};
use itemforge_hooks::{HookRegistry, HookRegistryBuilder, PresentPlugins, StaticHook};
use itemforge_world::{item::Enchantment, ItemStack};
use proptest::prelude::*;

fn node(s: &str) -> toml::Value {
    toml::Value::Table(toml::from_str(s).unwrap())
}

/// A registry with one active hook serving a sword that already has lore.
fn armory(base_lore: &[String]) -> HookRegistry {
    let mut blade = ItemStack::of("DIAMOND_SWORD").unwrap();
    blade.meta_mut().unwrap().set_lore(base_lore.to_vec());
    let mut builder = HookRegistryBuilder::new();
    builder.register(StaticHook::new("armory").with_item("blade", blade));
    builder.activate(&PresentPlugins::new(["armory"]))
}

fn lore_after(hooks: &HookRegistry, declared: &[String], mode: LoreAppendMode) -> Vec<String> {
    ItemDescription::new("armory:blade")
        .with_lore(declared.iter().cloned())
        .with_lore_append_mode(mode)
        .materialize(hooks)
        .unwrap()
        .meta()
        .unwrap()
        .lore()
        .unwrap_or_default()
        .to_vec()
}

#[test]
fn bottom_append_onto_provider_lore() {
    let hooks = armory(&["Ancient Blade".to_string()]);
    let source = node(
        r#"
        material = "armory:blade"
        amount = 3
        lore = ["+5 ATK"]
        lore-append-mode = "BOTTOM"
        "#,
    );
    let item = deserialize_item(&source, &hooks).unwrap();
    assert_eq!(item.amount(), 3);
    assert_eq!(item.type_name(), "DIAMOND_SWORD");
    assert_eq!(
        item.meta().unwrap().lore().unwrap(),
        ["Ancient Blade", "+5 ATK"]
    );
}

#[test]
fn bad_flag_drops_the_whole_list() {
    let source = node(
        r#"
        material = "DIAMOND_SWORD"
        item-flags = ["HIDE_ATTRIBUTES", "NOT_A_REAL_FLAG"]
        "#,
    );
    let description = deserialize_description(&source).unwrap();
    assert!(description.item_flags().is_empty());
    let item = description.materialize(&HookRegistry::vanilla()).unwrap();
    assert!(item.meta().unwrap().item_flags().is_empty());
}

#[test]
fn unknown_provider_yields_nothing() {
    let hooks = armory(&[]);
    assert!(ItemDescription::new("unknownprovider:foo")
        .materialize(&hooks)
        .is_none());
    assert!(ItemDescription::new("armory:missing")
        .materialize(&hooks)
        .is_none());
}

#[test]
fn inactive_provider_yields_nothing() {
    let mut builder = HookRegistryBuilder::new();
    builder.register(
        StaticHook::new("armory").with_item("blade", ItemStack::of("IRON_SWORD").unwrap()),
    );
    let hooks = builder.activate(&PresentPlugins::default());
    assert!(hooks.is_registered("armory"));
    assert!(!hooks.is_active("armory"));
    assert!(ItemDescription::new("armory:blade")
        .materialize(&hooks)
        .is_none());
}

#[test]
fn round_trip_through_provider() {
    let hooks = armory(&[]);
    let item = hooks.resolve_item("armory:blade").unwrap();
    assert_eq!(hooks.unresolve_item(&item), "armory:blade");
    assert_eq!(hooks.resolve_item("armory:blade"), Ok(item));
}

#[test]
fn broken_texture_still_builds_a_head() {
    let item = ItemDescription::new("PLAYER_HEAD")
        .with_skull_texture("!!definitely not base64!!")
        .materialize(&HookRegistry::vanilla())
        .unwrap();
    assert!(item.meta().unwrap().skull().unwrap().profile().is_none());
}

fn lore_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 +]{1,12}", 0..4)
}

proptest! {
    #[test]
    fn lore_merge_algebra(base in lore_lines(), declared in lore_lines().prop_filter("declared lore", |d| !d.is_empty())) {
        let hooks = armory(&base);
        let concat = |a: &[String], b: &[String]| a.iter().chain(b).cloned().collect::<Vec<_>>();

        prop_assert_eq!(lore_after(&hooks, &declared, LoreAppendMode::Override), declared.clone());
        if base.is_empty() {
            prop_assert!(lore_after(&hooks, &declared, LoreAppendMode::Top).is_empty());
            prop_assert!(lore_after(&hooks, &declared, LoreAppendMode::Bottom).is_empty());
            prop_assert!(lore_after(&hooks, &declared, LoreAppendMode::Ignore).is_empty());
        } else {
            prop_assert_eq!(lore_after(&hooks, &declared, LoreAppendMode::Top), concat(&declared, &base));
            prop_assert_eq!(lore_after(&hooks, &declared, LoreAppendMode::Bottom), concat(&base, &declared));
            prop_assert_eq!(lore_after(&hooks, &declared, LoreAppendMode::Ignore), base.clone());
        }
    }

    #[test]
    fn unknown_enchantments_never_appear(
        enchants in prop::collection::btree_map("[a-z_]{1,16}", 1u32..10, 0..8)
    ) {
        let description = enchants
            .iter()
            .fold(ItemDescription::new("DIAMOND_SWORD"), |description, (name, level)| {
                description.with_enchantment(name, *level)
            });
        let item = description.materialize(&HookRegistry::vanilla()).unwrap();
        for (enchantment, level) in item.meta().unwrap().enchants() {
            prop_assert!(enchants.contains_key(enchantment.key()));
            prop_assert_eq!(enchants.get(enchantment.key()), Some(level));
        }
        let known = enchants.keys().filter(|name| Enchantment::from_key(name).is_some()).count();
        prop_assert_eq!(item.meta().unwrap().enchants().len(), known);
    }

    #[test]
    fn resolving_is_repeatable(index in 0usize..20) {
        let name = itemforge_world::item::MATERIALS.keys().nth(index).unwrap().clone();
        let hooks = HookRegistry::vanilla();
        prop_assert_eq!(hooks.resolve_item(&name), hooks.resolve_item(&name));
    }
}
