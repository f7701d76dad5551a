use serde::Deserialize;

use super::{
    Config,
    constants::{DEFAULT_ENABLED, DEFAULT_HOTKEY},
};

/// Config as found on disk. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawConfig {
    pub enabled: Option<bool>,
    pub hotkey: Option<String>,
}

impl RawConfig {
    /// Fills missing fields from the defaults.
    pub fn merge_with_defaults(self) -> Config {
        Config {
            enabled: self.enabled.unwrap_or(DEFAULT_ENABLED),
            hotkey: self.hotkey.unwrap_or_else(|| DEFAULT_HOTKEY.to_string()),
        }
    }
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        raw.merge_with_defaults()
    }
}
