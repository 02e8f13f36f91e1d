pub mod entity;
pub mod item;

pub use entity::Entity;
pub use item::ItemStack;
