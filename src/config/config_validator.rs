use crate::config::{Config, constants::HOTKEY_REQUIRED};

/// A hotkey is usable when something is left after trimming.
pub fn validate_hotkey(hotkey: &str) -> bool {
    !hotkey.trim().is_empty()
}

pub fn find_config_error(config: &Config) -> Option<String> {
    if validate_hotkey(&config.hotkey) {
        None
    } else {
        Some(HOTKEY_REQUIRED.to_string())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(error) = find_config_error(self) {
            Err(error)
        } else {
            Ok(())
        }
    }
}
