use itemforge_config::{ConfigNode, FlagParsePolicy};
use itemforge_core::{
    text::{color::ColorError, RGBColor},
    Identifier,
};
use itemforge_hooks::HookRegistry;
use itemforge_world::{
    item::{Enchantment, ItemFlag, UnknownItemFlag},
    ItemStack,
};

use crate::{
    error::ItemForgeError,
    item::{skull_owner_key, skull_texture_key, ItemDescription, LoreAppendMode},
};

const MATERIAL: &str = "material";
const AMOUNT: &str = "amount";
const NAME: &str = "name";
const UNBREAKABLE: &str = "unbreakable";
const GLOWING: &str = "glowing";
const LORE: &str = "lore";
const APPEND_LORE: &str = "lore-append-mode";
const MODEL_DATA: &str = "model-data";
const NBT_TAGS: &str = "nbt-tag";
const ENCHANTS: &str = "enchants";
const ITEM_FLAGS: &str = "item-flags";
const TEXTURE: &str = "texture";
const OWNER: &str = "owner";
const COLOR: &str = "color";
const RED: &str = "red";
const GREEN: &str = "green";
const BLUE: &str = "blue";

/// Reads [`ItemDescription`]s from configuration nodes.
///
/// Only `material` is required. Every other key is optional and invalid
/// values are skipped instead of failing the whole item.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemDeserializer {
    flag_policy: FlagParsePolicy,
}

impl ItemDeserializer {
    pub fn new(flag_policy: FlagParsePolicy) -> Self {
        Self { flag_policy }
    }

    /// `None` when the node has no `material`.
    pub fn deserialize<N: ConfigNode>(&self, source: &N) -> Option<ItemDescription> {
        let material = source.child(MATERIAL)?;
        let mut builder = ItemDescription::new(material.get_string("AIR"));

        if let Some(amount) = source.child(AMOUNT) {
            builder = builder.with_amount(clamp_amount(amount.get_int(1)));
        }
        if let Some(name) = source.child(NAME) {
            builder = builder.with_display_name(name.get_string(""));
        }
        if let Some(unbreakable) = source.child(UNBREAKABLE) {
            builder = builder.with_unbreakable(unbreakable.get_bool(false));
        }
        if let Some(glowing) = source.child(GLOWING) {
            builder = builder.with_glowing(glowing.get_bool(false));
        }
        if let Some(lore) = source.child(LORE) {
            builder = builder.with_lore(lore.get_string_list());
        }
        if let Some(mode) = source.child(APPEND_LORE) {
            match mode.get_string("").parse::<LoreAppendMode>() {
                Ok(mode) => builder = builder.with_lore_append_mode(mode),
                Err(error) => error.log(),
            }
        }
        if let Some(model_data) = source.child(MODEL_DATA) {
            match i32::try_from(model_data.get_int(0)) {
                Ok(model_data) => builder = builder.with_model_data(model_data),
                Err(_) => log::warn!("Ignoring out of range model-data"),
            }
        }

        if let Some(tags) = source.child(NBT_TAGS) {
            for (key, value) in tags.children() {
                builder = builder.with_tag(Identifier::parse(key), value.get_string(""));
            }
        }
        if let Some(enchants) = source.child(ENCHANTS) {
            for (key, level) in enchants.children() {
                if Enchantment::from_key(key).is_none() {
                    log::debug!("Skipping unknown enchantment {key}");
                    continue;
                }
                builder = builder.with_enchantment(key, clamp_level(level.get_int(1)));
            }
        }
        if let Some(flags) = source.child(ITEM_FLAGS) {
            for flag in self.read_flags(flags) {
                builder = builder.with_item_flag(flag);
            }
        }

        if let Some(owner) = source.child(OWNER) {
            let owner = owner.get_string("");
            if itemforge_core::has_placeholder(&owner) {
                builder = builder.with_tag(skull_owner_key(), owner.clone());
            }
            builder = builder.with_skull_owner(owner);
        }
        if let Some(texture) = source.child(TEXTURE) {
            let texture = texture.get_string("");
            if itemforge_core::has_placeholder(&texture) {
                builder = builder.with_tag(skull_texture_key(), texture.clone());
            }
            builder = builder.with_skull_texture(texture);
        }

        if let Some(color) = source.child(COLOR) {
            match read_color(color) {
                Ok(color) => builder = builder.with_color(color),
                Err(error) => error.log(),
            }
        }

        Some(builder)
    }

    /// Deserializes and materializes in one go.
    pub fn deserialize_item<N: ConfigNode>(
        &self,
        source: &N,
        hooks: &HookRegistry,
    ) -> Option<ItemStack> {
        self.deserialize(source)?.materialize(hooks)
    }

    fn read_flags<N: ConfigNode>(&self, flags: &N) -> Vec<ItemFlag> {
        let parsed: Vec<Result<ItemFlag, UnknownItemFlag>> = flag_entries(flags)
            .into_iter()
            .map(|entry| match entry {
                Some(name) => name.parse(),
                None => Err(UnknownItemFlag("<not a string>".to_string())),
            })
            .collect();

        match self.flag_policy {
            FlagParsePolicy::AllOrNothing => parsed
                .into_iter()
                .collect::<Result<Vec<_>, _>>()
                .unwrap_or_else(|error| {
                    error.log();
                    log::warn!("Discarding item-flags list");
                    Vec::new()
                }),
            FlagParsePolicy::PerEntry => parsed
                .into_iter()
                .filter_map(|flag| flag.inspect_err(|error| error.log()).ok())
                .collect(),
        }
    }
}

/// Entries of a flag list, `None` where an entry isn't a scalar. A lone
/// scalar counts as a one entry list.
fn flag_entries<N: ConfigNode>(flags: &N) -> Vec<Option<String>> {
    match flags.as_list() {
        Some(entries) => entries.into_iter().map(N::as_string).collect(),
        None => flags.get_string_list().into_iter().map(Some).collect(),
    }
}

/// Deserializes with the default (all or nothing) item flag handling.
pub fn deserialize_description<N: ConfigNode>(source: &N) -> Option<ItemDescription> {
    ItemDeserializer::default().deserialize(source)
}

pub fn deserialize_item<N: ConfigNode>(source: &N, hooks: &HookRegistry) -> Option<ItemStack> {
    ItemDeserializer::default().deserialize_item(source, hooks)
}

fn clamp_amount(amount: i64) -> u32 {
    amount.clamp(0, u32::MAX as i64) as u32
}

fn clamp_level(level: i64) -> u32 {
    level.clamp(1, u32::MAX as i64) as u32
}

fn channel<N: ConfigNode>(color: &N, key: &str) -> u8 {
    color
        .child(key)
        .map_or(0, |node| node.get_int(0))
        .clamp(0, 255) as u8
}

/// Explicit channels win over a hex string.
fn read_color<N: ConfigNode>(color: &N) -> Result<RGBColor, ColorError> {
    if color.child(RED).is_some() {
        return Ok(RGBColor::new(
            channel(color, RED),
            channel(color, GREEN),
            channel(color, BLUE),
        ));
    }
    color.get_string("#FFFFFF").parse()
}
