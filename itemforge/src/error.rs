use log::log;

use itemforge_config::ConfigError;
use itemforge_core::text::color::ColorError;
use itemforge_hooks::HookError;
use itemforge_world::item::UnknownItemFlag;

use crate::item::{texture::TextureError, UnknownLoreAppendMode};

/// Errors the engine recovers from by logging them and moving on.
pub trait ItemForgeError: std::error::Error {
    fn severity(&self) -> log::Level;

    fn log(&self) {
        log!(self.severity(), "{}", self.to_string());
    }
}

impl ItemForgeError for HookError {
    fn severity(&self) -> log::Level {
        match self {
            HookError::AlreadyInstalled => log::Level::Error,
            // An item that can't be resolved is a normal outcome.
            HookError::UnknownMaterial(_)
            | HookError::UnknownHook(_)
            | HookError::MissingItemCapability(_)
            | HookError::InactiveHook(_)
            | HookError::UnknownItem { .. } => log::Level::Debug,
        }
    }
}

impl ItemForgeError for TextureError {
    fn severity(&self) -> log::Level {
        log::Level::Warn
    }
}

impl ItemForgeError for UnknownItemFlag {
    fn severity(&self) -> log::Level {
        log::Level::Warn
    }
}

impl ItemForgeError for UnknownLoreAppendMode {
    fn severity(&self) -> log::Level {
        log::Level::Warn
    }
}

impl ItemForgeError for ColorError {
    fn severity(&self) -> log::Level {
        log::Level::Warn
    }
}

impl ItemForgeError for ConfigError {
    fn severity(&self) -> log::Level {
        log::Level::Error
    }
}
