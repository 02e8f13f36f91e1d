use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HookError {
    #[error("'{0}' is not a known material")]
    UnknownMaterial(String),
    #[error("No hook registered with id '{0}'")]
    UnknownHook(String),
    #[error("Hook '{0}' does not provide items")]
    MissingItemCapability(String),
    #[error("Hook '{0}' is not active")]
    InactiveHook(String),
    #[error("Hook '{hook}' has no item '{key}'")]
    UnknownItem { hook: String, key: String },
    #[error("A hook registry is already installed")]
    AlreadyInstalled,
}
