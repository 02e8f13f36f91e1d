use std::fmt;

macro_rules! enchantments {
    ($($variant:ident => $key:literal, $max_level:literal;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Enchantment {
            $($variant,)*
        }

        impl Enchantment {
            pub const ALL: &'static [Enchantment] = &[$(Enchantment::$variant,)*];

            /// Registry key without the `minecraft:` namespace.
            pub const fn key(self) -> &'static str {
                match self {
                    $(Enchantment::$variant => $key,)*
                }
            }

            pub const fn max_level(self) -> u32 {
                match self {
                    $(Enchantment::$variant => $max_level,)*
                }
            }
        }
    };
}

enchantments! {
    Protection => "protection", 4;
    FireProtection => "fire_protection", 4;
    FeatherFalling => "feather_falling", 4;
    BlastProtection => "blast_protection", 4;
    ProjectileProtection => "projectile_protection", 4;
    Respiration => "respiration", 3;
    AquaAffinity => "aqua_affinity", 1;
    Thorns => "thorns", 3;
    DepthStrider => "depth_strider", 3;
    FrostWalker => "frost_walker", 2;
    BindingCurse => "binding_curse", 1;
    SoulSpeed => "soul_speed", 3;
    SwiftSneak => "swift_sneak", 3;
    Sharpness => "sharpness", 5;
    Smite => "smite", 5;
    BaneOfArthropods => "bane_of_arthropods", 5;
    Knockback => "knockback", 2;
    FireAspect => "fire_aspect", 2;
    Looting => "looting", 3;
    SweepingEdge => "sweeping_edge", 3;
    Efficiency => "efficiency", 5;
    SilkTouch => "silk_touch", 1;
    Unbreaking => "unbreaking", 3;
    Fortune => "fortune", 3;
    Power => "power", 5;
    Punch => "punch", 2;
    Flame => "flame", 1;
    Infinity => "infinity", 1;
    LuckOfTheSea => "luck_of_the_sea", 3;
    Lure => "lure", 3;
    Loyalty => "loyalty", 3;
    Impaling => "impaling", 5;
    Riptide => "riptide", 3;
    Channeling => "channeling", 1;
    Multishot => "multishot", 1;
    QuickCharge => "quick_charge", 3;
    Piercing => "piercing", 4;
    Density => "density", 5;
    Breach => "breach", 4;
    WindBurst => "wind_burst", 3;
    Mending => "mending", 1;
    VanishingCurse => "vanishing_curse", 1;
}

impl Enchantment {
    /// Looks an enchantment up by key, ignoring case and an optional
    /// `minecraft:` prefix.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = Self::canonical_key(key);
        Self::ALL.iter().copied().find(|ench| ench.key() == key)
    }

    /// The form enchantment names are stored in: trimmed, lower case,
    /// without the vanilla namespace.
    pub fn canonical_key(key: &str) -> String {
        let key = key.trim().to_ascii_lowercase();
        match key.strip_prefix("minecraft:") {
            Some(stripped) => stripped.to_string(),
            None => key,
        }
    }
}

impl fmt::Display for Enchantment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod test {
    use super::Enchantment;

    #[test]
    fn from_key_is_lenient() {
        assert_eq!(Enchantment::from_key("sharpness"), Some(Enchantment::Sharpness));
        assert_eq!(Enchantment::from_key("SHARPNESS"), Some(Enchantment::Sharpness));
        assert_eq!(
            Enchantment::from_key("minecraft:luck_of_the_sea"),
            Some(Enchantment::LuckOfTheSea)
        );
        assert_eq!(Enchantment::from_key("super_sharpness"), None);
    }

    #[test]
    fn keys_are_canonical() {
        for ench in Enchantment::ALL {
            assert_eq!(Enchantment::canonical_key(ench.key()), ench.key());
            assert!(ench.max_level() >= 1);
        }
    }
}
