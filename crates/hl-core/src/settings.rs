//! Service settings.
//!
//! [`Settings`] is loaded once at process start and handed to whatever builds
//! the server.  Sources are layered, later ones overriding earlier ones:
//!
//! 1. built-in defaults;
//! 2. a TOML file (an explicit path, or `config/default.toml` if present);
//! 3. environment variables prefixed with `HOLIDAYS__`, using `__` as the
//!    nesting separator (e.g. `HOLIDAYS__DATA__DIR=/srv/holidays`).

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Default listen address of the HTTP server.
pub const DEFAULT_BIND: &str = "0.0.0.0:8081";

/// Default directory holding `<year>.json` files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Errors raised while loading [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// A value was read but is not usable.
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Dotted key of the offending value.
        key: String,
        /// What is wrong with it.
        message: String,
    },

    /// Underlying `config` crate error.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Top-level service settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Year-data source settings.
    #[serde(default)]
    pub data: DataSettings,
}

/// HTTP server settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Year-data source settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataSettings {
    /// Directory containing one `<year>.json` file per year.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    /// Years to load into the cache at startup.
    #[serde(default)]
    pub preload: Vec<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            preload: Vec::new(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

impl Settings {
    /// Load settings from `path` (or `config/default.toml` when `None`) and
    /// the `HOLIDAYS__*` environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let file = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(SettingsError::FileNotFound(p.to_path_buf()));
                }
                File::from(p).required(true)
            }
            None => File::with_name("config/default").required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("HOLIDAYS").separator("__"))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.bind_addr()?;
        Ok(())
    }

    /// Parse [`ServerSettings::bind`] as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.server
            .bind
            .parse()
            .map_err(|e| SettingsError::InvalidValue {
                key: "server.bind".into(),
                message: format!("{e}"),
            })
    }
}
