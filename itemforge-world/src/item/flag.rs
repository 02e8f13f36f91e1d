use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemFlag {
    HideEnchants,
    HideAttributes,
    HideUnbreakable,
    HideDestroys,
    HidePlacedOn,
    HideAdditionalTooltip,
    HideDye,
    HideArmorTrim,
    HideStoredEnchants,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown item flag '{0}'")]
pub struct UnknownItemFlag(pub String);

impl ItemFlag {
    pub const ALL: [ItemFlag; 9] = [
        ItemFlag::HideEnchants,
        ItemFlag::HideAttributes,
        ItemFlag::HideUnbreakable,
        ItemFlag::HideDestroys,
        ItemFlag::HidePlacedOn,
        ItemFlag::HideAdditionalTooltip,
        ItemFlag::HideDye,
        ItemFlag::HideArmorTrim,
        ItemFlag::HideStoredEnchants,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ItemFlag::HideEnchants => "HIDE_ENCHANTS",
            ItemFlag::HideAttributes => "HIDE_ATTRIBUTES",
            ItemFlag::HideUnbreakable => "HIDE_UNBREAKABLE",
            ItemFlag::HideDestroys => "HIDE_DESTROYS",
            ItemFlag::HidePlacedOn => "HIDE_PLACED_ON",
            ItemFlag::HideAdditionalTooltip => "HIDE_ADDITIONAL_TOOLTIP",
            ItemFlag::HideDye => "HIDE_DYE",
            ItemFlag::HideArmorTrim => "HIDE_ARMOR_TRIM",
            ItemFlag::HideStoredEnchants => "HIDE_STORED_ENCHANTS",
        }
    }
}

impl FromStr for ItemFlag {
    type Err = UnknownItemFlag;

    /// Names are matched exactly, `hide_enchants` is not a flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.name() == s)
            .ok_or_else(|| UnknownItemFlag(s.to_string()))
    }
}

impl fmt::Display for ItemFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::{ItemFlag, UnknownItemFlag};

    #[test]
    fn parse_exact_names() {
        assert_eq!("HIDE_DYE".parse(), Ok(ItemFlag::HideDye));
        for flag in ItemFlag::ALL {
            assert_eq!(flag.to_string().parse(), Ok(flag));
        }
        assert_eq!(
            "hide_dye".parse::<ItemFlag>(),
            Err(UnknownItemFlag("hide_dye".to_string()))
        );
    }
}
