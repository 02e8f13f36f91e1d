use std::{collections::HashMap, sync::LazyLock};

use serde::Deserialize;

const ITEMS_JSON: &str = include_str!("../../assets/items.json");

/// Built-in materials keyed by their upper case name.
pub static MATERIALS: LazyLock<HashMap<String, Material>> = LazyLock::new(|| {
    let materials: Vec<Material> =
        serde_json::from_str(ITEMS_JSON).expect("Could not parse items.json registry.");
    materials
        .into_iter()
        .map(|material| (material.name.clone(), material))
        .collect()
});

/// Which metadata container an item of this material carries.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetaKind {
    /// No container at all (air).
    None,
    #[default]
    Basic,
    /// Heads, which carry an owner profile.
    Skull,
    /// Items with a single dye color channel.
    Colorable,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Material {
    pub name: String,
    pub max_stack: u8,
    #[serde(default)]
    pub meta: MetaKind,
}

impl Material {
    pub fn from_name(name: &str) -> Option<&'static Material> {
        MATERIALS.get(&name.trim().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod test {
    use super::{Material, MetaKind, MATERIALS};

    #[test]
    fn registry_loads() {
        assert!(!MATERIALS.is_empty());
        assert!(MATERIALS.keys().all(|name| name == &name.to_ascii_uppercase()));
    }

    #[test]
    fn lookup_ignores_case() {
        let sword = Material::from_name("diamond_sword").unwrap();
        assert_eq!(sword.max_stack, 1);
        assert_eq!(sword.meta, MetaKind::Basic);
        assert_eq!(Material::from_name("AIR").unwrap().meta, MetaKind::None);
        assert!(Material::from_name("oraxen:big_sword").is_none());
    }
}
