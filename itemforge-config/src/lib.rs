use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

pub mod hooks;
pub mod items;
pub mod logging;
pub mod node;

pub use hooks::HooksConfig;
pub use items::{FlagParsePolicy, ItemsConfig};
pub use logging::LoggingConfig;
pub use node::ConfigNode;

pub static ENGINE_CONFIG: LazyLock<EngineConfiguration> =
    LazyLock::new(EngineConfiguration::load);

/// Settings of the item engine itself. Item definitions live in their own
/// file, see [`ItemsConfig::path`].
#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EngineConfiguration {
    pub logging: LoggingConfig,
    pub hooks: HooksConfig,
    pub items: ItemsConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read {0:?}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("Couldn't parse {0:?}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

/// Reads a TOML file into its root table.
pub fn load_table(path: impl AsRef<Path>) -> Result<toml::Table, ConfigError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
    toml::from_str::<toml::Table>(&content)
        .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))
}

pub trait LoadTomlConfiguration {
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            let file_content = fs::read_to_string(path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {:?}", path));

            toml::from_str(&file_content).unwrap_or_else(|err| {
                panic!(
                    "Couldn't parse config at {:?}. Reason: {}. This is probably caused by a config update, just delete the old config and start again",
                    path,
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config. Reason: {}", err),
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadTomlConfiguration for EngineConfiguration {
    fn get_path() -> &'static Path {
        Path::new("itemforge.toml")
    }

    fn validate(&self) {
        assert!(!self.items.path.is_empty(), "items.path must not be empty");
    }
}
