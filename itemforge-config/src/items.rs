use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

/// How an `item-flags` list reacts to a name that isn't a known flag.
#[derive(Deserialize, Serialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FlagParsePolicy {
    /// One bad entry discards the whole list.
    #[default]
    AllOrNothing,
    /// Bad entries are skipped, the rest is kept.
    PerEntry,
}

#[serde_inline_default]
#[derive(Deserialize, Serialize)]
pub struct ItemsConfig {
    /// File holding the `[hooks]` catalogs and `[items]` definitions.
    #[serde_inline_default("items.toml".to_string())]
    pub path: String,
    #[serde(default)]
    pub flag_policy: FlagParsePolicy,
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            path: "items.toml".to_string(),
            flag_policy: FlagParsePolicy::default(),
        }
    }
}
