pub type EntityId = i32;

/// The part of an entity the hooks get to look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub entity_id: EntityId,
    /// Vanilla type name, e.g. `zombie` or `ARMOR_STAND`.
    pub entity_type: String,
}

impl Entity {
    pub fn new(entity_id: EntityId, entity_type: impl Into<String>) -> Self {
        Self {
            entity_id,
            entity_type: entity_type.into(),
        }
    }

    /// Upper case type name, the fallback label for entities no hook claims.
    pub fn type_name(&self) -> String {
        self.entity_type.to_ascii_uppercase()
    }
}
