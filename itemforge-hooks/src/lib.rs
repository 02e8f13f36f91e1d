use std::sync::OnceLock;

mod environment;
mod error;
mod hook;
mod registry;
mod static_hook;

pub use environment::{Environment, PresentPlugins};
pub use error::HookError;
pub use hook::{Hook, HookCapabilities};
pub use registry::{HookRegistry, HookRegistryBuilder};
pub use static_hook::StaticHook;

static HOOKS: OnceLock<HookRegistry> = OnceLock::new();

/// Makes an activated registry the process wide one. Only the first call
/// succeeds.
pub fn install(registry: HookRegistry) -> Result<&'static HookRegistry, HookError> {
    let mut installed = false;
    let hooks = HOOKS.get_or_init(|| {
        installed = true;
        registry
    });
    if installed {
        Ok(hooks)
    } else {
        Err(HookError::AlreadyInstalled)
    }
}

/// The installed registry, if [`install`] ran.
pub fn hooks() -> Option<&'static HookRegistry> {
    HOOKS.get()
}
