use crate::error::{RenameditError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "RENAMEDIT_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Extra "wait until closed" flags keyed by editor program name.
    /// These take precedence over the built-in table; an empty string
    /// disables the built-in flag for that program.
    #[serde(default)]
    pub editor_flags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Editor command used when `EDITOR` is unset or empty
    #[serde(default)]
    pub editor: Option<String>,

    /// Hide extensions in the listing by default
    #[serde(default)]
    pub ignore_ext: bool,

    /// Append a line for every attempted rename to this file
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load config from `path`, returning defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(RenameditError::io(
                format!("Failed to read config {}", path.display()),
                e,
            )),
        }
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RenameditError::io(format!("Failed to read config {}", path.display()), e)
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RenameditError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save config to a specific path
    #[cfg(test)]
    pub(crate) fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| RenameditError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, content).map_err(|e| {
            RenameditError::io(format!("Failed to write config {}", path.display()), e)
        })
    }
}
