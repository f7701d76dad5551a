use std::{error::Error, fmt};

/// Global hotkey facility of the host platform.
///
/// Accelerators use the `Modifier+Modifier+Key` form, e.g. `Shift+Cmd+L`.
pub trait HotkeyRegistrar {
    fn unregister_all(&mut self);

    fn register(&mut self, accelerator: &str) -> Result<(), RegisterError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterError {
    pub accelerator: String,
    pub reason: String,
}

impl RegisterError {
    pub fn new(accelerator: &str, reason: impl Into<String>) -> Self {
        Self {
            accelerator: accelerator.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to register hotkey '{}': {}",
            self.accelerator, self.reason
        )
    }
}

impl Error for RegisterError {}

/// Drops every existing binding, then binds `accelerator`.
///
/// Returns `false` when the new binding was refused. The old binding stays dropped:
/// running without a hotkey is preferred over keeping a stale one.
pub fn rebind<R>(registrar: &mut R, accelerator: &str) -> bool
where
    R: HotkeyRegistrar + ?Sized,
{
    registrar.unregister_all();

    match registrar.register(accelerator) {
        Ok(()) => {
            tracing::info!(accelerator, "hotkey registered");
            true
        }
        Err(e) => {
            tracing::error!(accelerator, error = %e, "hotkey registration failed");
            false
        }
    }
}
