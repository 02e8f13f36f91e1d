use itemforge_core::{text::legacy, GameProfile};
use itemforge_hooks::{HookError, HookRegistry};
use itemforge_world::{
    item::{DyeColor, Enchantment, ItemFlag, ItemMeta},
    ItemStack,
};

use super::{
    skull_owner_key, skull_texture_key, texture::decode_texture_url, ItemDescription,
    LoreAppendMode,
};
use crate::error::ItemForgeError;

impl ItemDescription {
    /// Builds the item, or `None` when the material can't be resolved.
    ///
    /// Everything past resolving the material is best effort: invalid flags,
    /// enchantments or textures are skipped and logged.
    pub fn materialize(&self, hooks: &HookRegistry) -> Option<ItemStack> {
        match self.try_materialize(hooks) {
            Ok(item) => Some(item),
            Err(error) => {
                error.log();
                None
            }
        }
    }

    /// Like [`materialize`](Self::materialize), but says why the material
    /// didn't resolve.
    pub fn try_materialize(&self, hooks: &HookRegistry) -> Result<ItemStack, HookError> {
        let mut item = hooks.resolve_item(&self.material)?;
        item.set_amount(self.amount);

        let Some(mut meta) = item.take_meta() else {
            return Ok(item);
        };

        if let Some(display_name) = &self.display_name {
            meta.set_display_name(legacy::style(display_name));
        }
        if let Some(model_data) = self.model_data.filter(|data| *data >= 0) {
            meta.set_custom_model_data(model_data);
        }
        if !self.lore.is_empty() {
            self.apply_lore(&mut meta);
        }
        if meta.skull().is_some() {
            self.apply_skull(&mut meta);
        }

        for name in &self.item_flags {
            match name.parse::<ItemFlag>() {
                Ok(flag) => meta.add_item_flags([flag]),
                Err(error) => error.log(),
            }
        }

        if self.glowing {
            meta.add_enchant(Enchantment::LuckOfTheSea, 1, true);
            meta.add_item_flags([ItemFlag::HideEnchants]);
        }

        for (name, level) in &self.enchantments {
            match Enchantment::from_key(name) {
                Some(enchantment) => {
                    meta.add_enchant(enchantment, *level, true);
                }
                None => log::debug!("Skipping unknown enchantment {name}"),
            }
        }

        for (key, value) in &self.tags {
            meta.persistent_data_mut().set(key.clone(), value.clone());
        }

        if let Some(color) = self.color {
            if meta.is_colorable() {
                meta.set_color(DyeColor::nearest(color));
            }
        }

        item.set_meta(meta);
        Ok(item)
    }

    fn apply_lore(&self, meta: &mut ItemMeta) {
        meta.set_unbreakable(self.unbreakable);

        let base = meta.lore().unwrap_or_default().to_vec();
        let declared: Vec<String> = self.lore.iter().map(|line| legacy::style(line)).collect();
        let mode = LoreAppendMode::effective(self.lore_append_mode, meta.has_lore());
        meta.set_lore(mode.merge(&base, &declared));
    }

    fn apply_skull(&self, meta: &mut ItemMeta) {
        if let Some(owner) = &self.skull_owner {
            if owner.is_unresolved() {
                meta.persistent_data_mut()
                    .set(skull_owner_key(), owner.value());
            }
            // An unresolved template matches nobody and yields an anonymous
            // looking head.
            let profile = GameProfile::offline(owner.value());
            if let Some(skull) = meta.skull_mut() {
                skull.set_profile(profile);
            }
        }

        if let Some(texture) = &self.skull_texture {
            if texture.is_unresolved() {
                meta.persistent_data_mut()
                    .set(skull_texture_key(), texture.value());
            }
            match decode_texture_url(texture.value()) {
                Ok(url) => {
                    let profile = GameProfile::random().with_skin(url.as_str());
                    if let Some(skull) = meta.skull_mut() {
                        skull.set_profile(profile);
                    }
                }
                Err(error) => error.log(),
            }
        }
    }
}
