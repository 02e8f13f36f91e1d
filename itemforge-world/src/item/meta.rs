use std::collections::{BTreeMap, BTreeSet};

use itemforge_core::GameProfile;

use super::{
    dye::DyeColor, enchantment::Enchantment, flag::ItemFlag, material::MetaKind,
    persistent::PersistentDataContainer,
};

/// Metadata container of an [`ItemStack`](super::ItemStack).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemMeta {
    display_name: Option<String>,
    lore: Option<Vec<String>>,
    custom_model_data: Option<i32>,
    unbreakable: bool,
    enchants: BTreeMap<Enchantment, u32>,
    item_flags: BTreeSet<ItemFlag>,
    persistent_data: PersistentDataContainer,
    extra: MetaExtra,
}

/// Data only some materials carry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MetaExtra {
    #[default]
    Basic,
    Skull(SkullMeta),
    Colorable { color: Option<DyeColor> },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkullMeta {
    profile: Option<GameProfile>,
}

impl SkullMeta {
    pub fn profile(&self) -> Option<&GameProfile> {
        self.profile.as_ref()
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|profile| profile.name.as_deref())
    }

    pub fn set_profile(&mut self, profile: GameProfile) {
        self.profile = Some(profile);
    }
}

impl ItemMeta {
    pub fn for_kind(kind: MetaKind) -> Option<Self> {
        let extra = match kind {
            MetaKind::None => return None,
            MetaKind::Basic => MetaExtra::Basic,
            MetaKind::Skull => MetaExtra::Skull(SkullMeta::default()),
            MetaKind::Colorable => MetaExtra::Colorable { color: None },
        };
        Some(Self {
            extra,
            ..Self::default()
        })
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    pub fn lore(&self) -> Option<&[String]> {
        self.lore.as_deref()
    }

    pub fn has_lore(&self) -> bool {
        self.lore.as_ref().is_some_and(|lore| !lore.is_empty())
    }

    /// An empty list clears the lore.
    pub fn set_lore(&mut self, lore: Vec<String>) {
        self.lore = (!lore.is_empty()).then_some(lore);
    }

    pub fn custom_model_data(&self) -> Option<i32> {
        self.custom_model_data
    }

    pub fn set_custom_model_data(&mut self, data: i32) {
        self.custom_model_data = Some(data);
    }

    pub fn is_unbreakable(&self) -> bool {
        self.unbreakable
    }

    pub fn set_unbreakable(&mut self, unbreakable: bool) {
        self.unbreakable = unbreakable;
    }

    pub fn enchants(&self) -> &BTreeMap<Enchantment, u32> {
        &self.enchants
    }

    /// Levels above the enchantment's maximum are rejected unless
    /// `ignore_level_restriction` is set. Returns whether the enchant was added.
    pub fn add_enchant(
        &mut self,
        enchantment: Enchantment,
        level: u32,
        ignore_level_restriction: bool,
    ) -> bool {
        if level == 0 || (!ignore_level_restriction && level > enchantment.max_level()) {
            return false;
        }
        self.enchants.insert(enchantment, level);
        true
    }

    pub fn item_flags(&self) -> &BTreeSet<ItemFlag> {
        &self.item_flags
    }

    pub fn add_item_flags(&mut self, flags: impl IntoIterator<Item = ItemFlag>) {
        self.item_flags.extend(flags);
    }

    pub fn has_item_flag(&self, flag: ItemFlag) -> bool {
        self.item_flags.contains(&flag)
    }

    pub fn persistent_data(&self) -> &PersistentDataContainer {
        &self.persistent_data
    }

    pub fn persistent_data_mut(&mut self) -> &mut PersistentDataContainer {
        &mut self.persistent_data
    }

    pub fn extra(&self) -> &MetaExtra {
        &self.extra
    }

    pub fn skull(&self) -> Option<&SkullMeta> {
        match &self.extra {
            MetaExtra::Skull(skull) => Some(skull),
            _ => None,
        }
    }

    pub fn skull_mut(&mut self) -> Option<&mut SkullMeta> {
        match &mut self.extra {
            MetaExtra::Skull(skull) => Some(skull),
            _ => None,
        }
    }

    pub fn is_colorable(&self) -> bool {
        matches!(self.extra, MetaExtra::Colorable { .. })
    }

    pub fn color(&self) -> Option<DyeColor> {
        match self.extra {
            MetaExtra::Colorable { color } => color,
            _ => None,
        }
    }

    /// Returns false when the item has no dye channel.
    pub fn set_color(&mut self, dye: DyeColor) -> bool {
        match &mut self.extra {
            MetaExtra::Colorable { color } => {
                *color = Some(dye);
                true
            }
            _ => false,
        }
    }
}
