//! Manager configuration via `assetlink.toml`
//!
//! A host can keep the choice of manager and its settings in a config
//! file rather than in code:
//!
//! ```toml
//! [manager]
//! identifier = "org.example.manager"
//!
//! [manager.settings]
//! library_path = "${config_dir}/library"
//! cache_size = 128
//! ```
//!
//! Settings must be scalars (string, integer, float, bool). Every
//! `${config_dir}` inside a string setting is replaced with the directory
//! holding the config file, so paths can be written relative to it.
//!
//! Finding and loading the plugin named by `identifier` is the host's job;
//! this module only reads the file.

use assetlink_core::{Error, InfoDictionary, Result, Value};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "assetlink.toml";

/// Placeholder substituted in string settings.
pub const CONFIG_DIR_VAR: &str = "${config_dir}";

#[derive(Debug, Deserialize)]
struct ConfigFile {
    manager: ManagerSection,
}

#[derive(Debug, Deserialize)]
struct ManagerSection {
    identifier: String,
    #[serde(default)]
    settings: toml::Table,
}

/// Which manager to use and the settings to initialize it with.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerConfig {
    /// Identifier the manager must report.
    pub identifier: String,
    /// Settings passed to `initialize`.
    pub settings: InfoDictionary,
}

impl ManagerConfig {
    /// Read and parse config from a file path.
    ///
    /// `${config_dir}` expands to the file's parent directory, made
    /// absolute. A bare file name is relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the file cannot be read or parsed, or
    /// its directory cannot be made absolute.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let dir = config_dir_of(path)?;
        Self::from_toml_str(&content, &dir.to_string_lossy()).map_err(|e| match e {
            Error::Configuration { reason } => Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                reason
            )),
            other => other,
        })
    }

    /// Parse config text, expanding `${config_dir}` to `config_dir`.
    pub fn from_toml_str(content: &str, config_dir: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| Error::configuration(e.to_string()))?;

        let mut settings = InfoDictionary::new();
        for (key, value) in file.manager.settings {
            let value = match value {
                toml::Value::String(s) => Value::String(s.replace(CONFIG_DIR_VAR, config_dir)),
                toml::Value::Integer(i) => Value::Int(i),
                toml::Value::Float(f) => Value::Float(f),
                toml::Value::Boolean(b) => Value::Bool(b),
                other => {
                    return Err(Error::configuration(format!(
                        "setting '{}' has unsupported type {}; expected string, integer, float or bool",
                        key,
                        other.type_str()
                    )))
                }
            };
            settings.insert(key, value);
        }

        Ok(Self {
            identifier: file.manager.identifier,
            settings,
        })
    }
}

/// Absolute directory holding the config file at `path`.
fn config_dir_of(path: &Path) -> Result<PathBuf> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::canonicalize(dir).map_err(|e| {
        Error::configuration(format!(
            "Failed to resolve directory of config file '{}': {}",
            path.display(),
            e
        ))
    })
}
