use std::collections::{BTreeMap, BTreeSet};

use itemforge_core::{has_placeholder, text::RGBColor, Identifier};
use itemforge_world::item::{DyeColor, Enchantment, ItemFlag};

use super::LoreAppendMode;

/// A value that may still contain `%placeholders%`.
///
/// `raw_template` keeps the string as written so the value can be resolved
/// again for another viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templated {
    value: String,
    raw_template: Option<String>,
}

impl Templated {
    /// Remembers `value` as a template if it contains a placeholder marker.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let raw_template = has_placeholder(&value).then(|| value.clone());
        Self {
            value,
            raw_template,
        }
    }

    /// A value produced by resolving `template`.
    pub fn resolved(value: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            raw_template: Some(template.into()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn raw_template(&self) -> Option<&str> {
        self.raw_template.as_deref()
    }

    /// Still carries a placeholder marker.
    pub fn is_unresolved(&self) -> bool {
        has_placeholder(&self.value)
    }
}

/// Everything a configuration can say about an item.
///
/// Descriptions are plain values. Materializing one never changes it, so the
/// same description can be materialized any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDescription {
    pub(crate) material: String,
    pub(crate) amount: u32,
    pub(crate) display_name: Option<String>,
    pub(crate) lore: Vec<String>,
    pub(crate) lore_append_mode: Option<LoreAppendMode>,
    pub(crate) model_data: Option<i32>,
    pub(crate) unbreakable: bool,
    pub(crate) glowing: bool,
    pub(crate) color: Option<RGBColor>,
    pub(crate) skull_owner: Option<Templated>,
    pub(crate) skull_texture: Option<Templated>,
    pub(crate) tags: BTreeMap<Identifier, String>,
    pub(crate) enchantments: BTreeMap<String, u32>,
    pub(crate) item_flags: BTreeSet<String>,
}

impl Default for ItemDescription {
    fn default() -> Self {
        Self {
            material: String::new(),
            amount: 1,
            display_name: None,
            lore: Vec::new(),
            lore_append_mode: None,
            model_data: None,
            unbreakable: false,
            glowing: false,
            color: None,
            skull_owner: None,
            skull_texture: None,
            tags: BTreeMap::new(),
            enchantments: BTreeMap::new(),
            item_flags: BTreeSet::new(),
        }
    }
}

impl ItemDescription {
    /// `material` is either a built-in material name or `hook:key`.
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            ..Self::default()
        }
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_lore<I, S>(mut self, lore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore = lore.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_lore_append_mode(mut self, mode: LoreAppendMode) -> Self {
        self.lore_append_mode = Some(mode);
        self
    }

    pub fn with_model_data(mut self, model_data: i32) -> Self {
        self.model_data = Some(model_data);
        self
    }

    pub fn with_unbreakable(mut self, unbreakable: bool) -> Self {
        self.unbreakable = unbreakable;
        self
    }

    pub fn with_glowing(mut self, glowing: bool) -> Self {
        self.glowing = glowing;
        self
    }

    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_dye_color(self, dye: DyeColor) -> Self {
        self.with_color(dye.rgb())
    }

    pub fn with_skull_owner(mut self, owner: impl Into<String>) -> Self {
        self.skull_owner = Some(Templated::new(owner));
        self
    }

    /// Base64 encoded textures payload.
    pub fn with_skull_texture(mut self, texture: impl Into<String>) -> Self {
        self.skull_texture = Some(Templated::new(texture));
        self
    }

    /// Overwrites an existing tag with the same key.
    pub fn with_tag(mut self, key: Identifier, value: impl Into<String>) -> Self {
        self.tags.insert(key, value.into());
        self
    }

    /// Levels below 1 are raised to 1. Names are stored canonically, so
    /// `Sharpness` and `minecraft:sharpness` are the same entry.
    pub fn with_enchantment(mut self, name: &str, level: u32) -> Self {
        self.enchantments
            .insert(Enchantment::canonical_key(name), level.max(1));
        self
    }

    pub fn with_item_flag(self, flag: ItemFlag) -> Self {
        self.with_item_flag_name(flag.name())
    }

    /// Unknown names are kept here and skipped when materializing.
    pub fn with_item_flag_name(mut self, flag: impl Into<String>) -> Self {
        self.item_flags.insert(flag.into());
        self
    }

    pub fn remove_tag(&mut self, key: &Identifier) -> Option<String> {
        self.tags.remove(key)
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    pub fn lore_append_mode(&self) -> Option<LoreAppendMode> {
        self.lore_append_mode
    }

    pub fn model_data(&self) -> Option<i32> {
        self.model_data
    }

    pub fn is_unbreakable(&self) -> bool {
        self.unbreakable
    }

    pub fn is_glowing(&self) -> bool {
        self.glowing
    }

    pub fn color(&self) -> Option<RGBColor> {
        self.color
    }

    pub fn skull_owner(&self) -> Option<&Templated> {
        self.skull_owner.as_ref()
    }

    pub fn skull_texture(&self) -> Option<&Templated> {
        self.skull_texture.as_ref()
    }

    pub fn tags(&self) -> &BTreeMap<Identifier, String> {
        &self.tags
    }

    pub fn tag(&self, key: &Identifier) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn tag_keys(&self) -> impl Iterator<Item = &Identifier> {
        self.tags.keys()
    }

    pub fn has_tag(&self, key: &Identifier) -> bool {
        self.tags.contains_key(key)
    }

    pub fn enchantments(&self) -> &BTreeMap<String, u32> {
        &self.enchantments
    }

    pub fn is_enchanted(&self) -> bool {
        !self.enchantments.is_empty()
    }

    pub fn has_enchantment(&self, name: &str) -> bool {
        self.enchantments
            .contains_key(&Enchantment::canonical_key(name))
    }

    pub fn item_flags(&self) -> &BTreeSet<String> {
        &self.item_flags
    }

    pub fn has_item_flag(&self, flag: ItemFlag) -> bool {
        self.item_flags.contains(flag.name())
    }
}
