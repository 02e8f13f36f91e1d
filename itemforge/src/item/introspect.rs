use itemforge_core::Identifier;
use itemforge_hooks::HookRegistry;
use itemforge_world::ItemStack;

use super::{
    skull_owner_key, skull_texture_key, texture::encode_texture_url, ItemDescription, Templated,
};

impl ItemDescription {
    /// Describes an existing item, so it can be tweaked and built again.
    ///
    /// The material is written the way `hooks` would resolve it, which
    /// keeps items that came from a content plugin tied to that plugin.
    pub fn from_item(item: &ItemStack, hooks: &HookRegistry) -> Self {
        let mut description = Self::new(hooks.unresolve_item(item)).with_amount(item.amount());
        let Some(meta) = item.meta() else {
            return description;
        };

        description.display_name = meta.display_name().map(str::to_string);
        description.model_data = meta.custom_model_data();
        description.unbreakable = meta.is_unbreakable();

        if let Some(skull) = meta.skull() {
            let data = meta.persistent_data();
            description.skull_owner = skull.owner_name().map(|name| {
                match data.get(&skull_owner_key()) {
                    Some(template) => Templated::resolved(name, template),
                    None => Templated::new(name),
                }
            });
            description.skull_texture = data
                .get(&skull_texture_key())
                .map(Templated::new)
                .or_else(|| {
                    skull
                        .profile()
                        .and_then(|profile| profile.skin.as_deref())
                        .map(|skin| Templated::new(encode_texture_url(skin)))
                });
        }

        if let Some(lore) = meta.lore() {
            description.lore = lore.to_vec();
        }
        description.color = meta.color().map(|dye| dye.rgb());
        description.enchantments = meta
            .enchants()
            .iter()
            .map(|(enchantment, level)| (enchantment.key().to_string(), *level))
            .collect();
        description.item_flags = meta
            .item_flags()
            .iter()
            .map(|flag| flag.name().to_string())
            .collect();
        description.tags = meta
            .persistent_data()
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect();
        description
    }

    /// A copy with the skull owner and texture filled in for `viewer`.
    ///
    /// Templates come from the values as configured, or from the stashed
    /// tags when the description was read back from an item.
    pub fn resolve_placeholders(&self, hooks: &HookRegistry, viewer: &str) -> Self {
        let resolve = |value: &Option<Templated>, key: &Identifier| {
            let template = value
                .as_ref()
                .and_then(Templated::raw_template)
                .or_else(|| self.tag(key));
            match template {
                Some(template) => Some(Templated::resolved(
                    hooks.process_placeholders(viewer, template),
                    template,
                )),
                None => value.clone(),
            }
        };

        let mut resolved = self.clone();
        resolved.skull_owner = resolve(&self.skull_owner, &skull_owner_key());
        resolved.skull_texture = resolve(&self.skull_texture, &skull_texture_key());
        resolved
    }
}

#[cfg(test)]
mod test {
    use itemforge_core::Identifier;
    use itemforge_hooks::{HookCapabilities, HookRegistry, HookRegistryBuilder, StaticHook};
    use itemforge_world::{
        item::{DyeColor, ItemFlag},
        ItemStack,
    };

    use crate::item::{skull_owner_key, texture::encode_texture_url};
    use crate::ItemDescription;

    fn placeholder_hooks() -> HookRegistry {
        let mut builder = HookRegistryBuilder::new();
        builder.register(
            StaticHook::with_capabilities("papi", HookCapabilities::NONE).with_placeholders(),
        );
        builder.activate(&|_: &str| true)
    }

    #[test]
    fn reads_back_a_built_item() {
        let hooks = HookRegistry::vanilla();
        let description = ItemDescription::new("DIAMOND_SWORD")
            .with_amount(2)
            .with_display_name("Edge")
            .with_lore(["one", "two"])
            .with_model_data(7)
            .with_unbreakable(true)
            .with_enchantment("Sharpness", 3)
            .with_item_flag(ItemFlag::HideEnchants)
            .with_tag(Identifier::new("shop", "price"), "9");
        let item = description.materialize(&hooks).unwrap();
        let read = ItemDescription::from_item(&item, &hooks);

        assert_eq!(read.material(), "DIAMOND_SWORD");
        assert_eq!(read.amount(), 2);
        assert_eq!(read.display_name(), Some("Edge"));
        assert_eq!(read.lore(), ["one", "two"]);
        assert_eq!(read.model_data(), Some(7));
        assert!(read.is_unbreakable());
        assert_eq!(read.enchantments().get("sharpness"), Some(&3));
        assert!(read.has_item_flag(ItemFlag::HideEnchants));
        assert_eq!(read.tag(&Identifier::new("shop", "price")), Some("9"));
        assert_eq!(read.materialize(&hooks), Some(item));
    }

    #[test]
    fn plugin_items_keep_their_reference() {
        let mut builder = HookRegistryBuilder::new();
        builder.register(
            StaticHook::new("forge").with_item("ruby", ItemStack::of("EMERALD").unwrap()),
        );
        let hooks = builder.activate(&|_: &str| true);
        let item = ItemDescription::new("forge:ruby").materialize(&hooks).unwrap();
        assert_eq!(ItemDescription::from_item(&item, &hooks).material(), "forge:ruby");
    }

    #[test]
    fn reads_skulls_and_colors() {
        let hooks = HookRegistry::vanilla();
        let skin = "https://textures.minecraft.net/texture/ff00";
        let head = ItemDescription::new("PLAYER_HEAD")
            .with_skull_texture(encode_texture_url(skin))
            .materialize(&hooks)
            .unwrap();
        let read = ItemDescription::from_item(&head, &hooks);
        assert_eq!(
            read.skull_texture().map(|texture| texture.value().to_string()),
            Some(encode_texture_url(skin))
        );

        let box_item = ItemDescription::new("WHITE_SHULKER_BOX")
            .with_dye_color(DyeColor::Cyan)
            .materialize(&hooks)
            .unwrap();
        assert_eq!(
            ItemDescription::from_item(&box_item, &hooks).color(),
            Some(DyeColor::Cyan.rgb())
        );
    }

    #[test]
    fn placeholders_resolve_per_viewer() {
        let hooks = placeholder_hooks();
        let description = ItemDescription::new("PLAYER_HEAD").with_skull_owner("%player_name%");

        let for_alex = description.resolve_placeholders(&hooks, "Alex");
        let owner = for_alex.skull_owner().unwrap();
        assert_eq!(owner.value(), "Alex");
        assert_eq!(owner.raw_template(), Some("%player_name%"));

        let for_steve = for_alex.resolve_placeholders(&hooks, "Steve");
        assert_eq!(for_steve.skull_owner().unwrap().value(), "Steve");
    }

    #[test]
    fn placeholders_survive_a_rebuild() {
        let hooks = placeholder_hooks();
        let item = ItemDescription::new("PLAYER_HEAD")
            .with_skull_owner("%player_name%")
            .materialize(&hooks)
            .unwrap();
        let read = ItemDescription::from_item(&item, &hooks);
        assert_eq!(read.tag(&skull_owner_key()), Some("%player_name%"));

        let rebuilt = read
            .resolve_placeholders(&hooks, "Alex")
            .materialize(&hooks)
            .unwrap();
        let skull = rebuilt.meta().unwrap().skull().unwrap();
        assert_eq!(skull.owner_name(), Some("Alex"));
    }

    #[test]
    fn plain_values_are_untouched() {
        let hooks = placeholder_hooks();
        let description = ItemDescription::new("PLAYER_HEAD").with_skull_owner("Notch");
        assert_eq!(description.resolve_placeholders(&hooks, "Alex"), description);
    }
}
