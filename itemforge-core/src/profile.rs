use uuid::Uuid;

/// Identity record attached to head items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProfile {
    pub id: Uuid,
    pub name: Option<String>,
    /// Skin texture url, if the profile carries one.
    pub skin: Option<String>,
}

impl GameProfile {
    /// Profile of a player that never authenticated, the same derivation the
    /// vanilla server uses for offline mode: an MD5 (version 3) UUID of
    /// `OfflinePlayer:<name>`.
    pub fn offline(name: &str) -> Self {
        Self {
            id: offline_uuid(name),
            name: Some(name.to_string()),
            skin: None,
        }
    }

    /// Anonymous profile with a fresh random id, used to carry a custom skin.
    pub fn random() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            skin: None,
        }
    }

    pub fn with_skin(mut self, url: impl Into<String>) -> Self {
        self.skin = Some(url.into());
        self
    }
}

pub fn offline_uuid(name: &str) -> Uuid {
    let digest = md5::compute(format!("OfflinePlayer:{name}").as_bytes());
    uuid::Builder::from_md5_bytes(digest.0).into_uuid()
}
