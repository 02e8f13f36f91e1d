mod dye;
mod enchantment;
mod flag;
mod material;
mod meta;
mod persistent;

pub use dye::DyeColor;
pub use enchantment::Enchantment;
pub use flag::{ItemFlag, UnknownItemFlag};
pub use material::{Material, MetaKind, MATERIALS};
pub use meta::{ItemMeta, MetaExtra, SkullMeta};
pub use persistent::PersistentDataContainer;

/// A concrete item: a material, a count and, for everything but air, a
/// metadata container.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    material: &'static Material,
    amount: u32,
    meta: Option<ItemMeta>,
}

impl ItemStack {
    pub fn new(material: &'static Material) -> Self {
        Self {
            material,
            amount: 1,
            meta: ItemMeta::for_kind(material.meta),
        }
    }

    /// Looks up a built-in material by name, ignoring case.
    pub fn of(name: &str) -> Option<Self> {
        Material::from_name(name).map(Self::new)
    }

    pub fn material(&self) -> &'static Material {
        self.material
    }

    /// The material name, e.g. `DIAMOND_SWORD`.
    pub fn type_name(&self) -> &str {
        &self.material.name
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount;
    }

    /// More items than the material stacks to in one slot.
    pub fn is_oversized(&self) -> bool {
        self.amount > u32::from(self.material.max_stack)
    }

    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    pub fn meta_mut(&mut self) -> Option<&mut ItemMeta> {
        self.meta.as_mut()
    }

    /// Detaches the metadata so it can be edited and committed back with
    /// [`ItemStack::set_meta`].
    pub fn take_meta(&mut self) -> Option<ItemMeta> {
        self.meta.take()
    }

    /// Ignored for materials without a metadata container.
    pub fn set_meta(&mut self, meta: ItemMeta) {
        if self.material.meta != MetaKind::None {
            self.meta = Some(meta);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ItemStack, MetaExtra};

    #[test]
    fn air_has_no_meta() {
        let mut air = ItemStack::of("air").unwrap();
        assert!(air.meta().is_none());
        let meta = ItemStack::of("STONE").unwrap().take_meta().unwrap();
        air.set_meta(meta);
        assert!(air.meta().is_none());
    }

    #[test]
    fn meta_follows_material() {
        let head = ItemStack::of("player_head").unwrap();
        assert!(matches!(head.meta().unwrap().extra(), MetaExtra::Skull(_)));
        let box_ = ItemStack::of("RED_SHULKER_BOX").unwrap();
        assert!(matches!(
            box_.meta().unwrap().extra(),
            MetaExtra::Colorable { color: None }
        ));
        let sword = ItemStack::of("Diamond_Sword").unwrap();
        assert_eq!(sword.type_name(), "DIAMOND_SWORD");
        assert_eq!(sword.amount(), 1);
        assert!(ItemStack::of("NOT_A_MATERIAL").is_none());
    }

    #[test]
    fn stack_limits() {
        let mut pearl = ItemStack::of("ENDER_PEARL").unwrap();
        pearl.set_amount(16);
        assert!(!pearl.is_oversized());
        pearl.set_amount(17);
        assert!(pearl.is_oversized());

        let mut sword = ItemStack::of("DIAMOND_SWORD").unwrap();
        assert!(!sword.is_oversized());
        sword.set_amount(2);
        assert!(sword.is_oversized());
    }
}
