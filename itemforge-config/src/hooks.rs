use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HooksConfig {
    /// Ids of the external systems installed next to us. Only hooks listed
    /// here get activated.
    pub present: Vec<String>,
}
