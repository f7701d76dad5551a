mod config_validator;
pub mod constants;
pub mod raw_config;

use std::{
    io,
    path::{Path, PathBuf},
};

pub use config_validator::{find_config_error, validate_hotkey};
pub use raw_config::RawConfig;
use serde::{Deserialize, Deserializer, Serialize};

use constants::{APP_NAME, CONFIG_NAME, DEFAULT_ENABLED, DEFAULT_HOTKEY};

/// User settings: whether the hotkey converts anything, and which accelerator triggers it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    pub enabled: bool,
    pub hotkey: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            hotkey: DEFAULT_HOTKEY.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawConfig::deserialize(deserializer).map(Self::from)
    }
}

/// Persisted settings file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<platform config dir>/layout-flip/config.toml`
    pub fn default_location() -> io::Result<Self> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)
            .map(Self::at)
            .map_err(confy_err)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored config, writing the defaults first if the file does not exist yet.
    pub fn load(&self) -> io::Result<Config> {
        ensure_parent_dir(&self.path)?;
        confy::load_path(&self.path).map_err(confy_err)
    }

    pub fn save(&self, cfg: &Config) -> io::Result<()> {
        cfg.validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        ensure_parent_dir(&self.path)?;
        confy::store_path(&self.path, cfg).map_err(confy_err)
    }
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)
}

fn confy_err(e: confy::ConfyError) -> io::Error {
    io::Error::other(e)
}
