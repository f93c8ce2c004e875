//! Configuration loader (defaults + file + env merge).

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::KommentarConfig;

/// Prefix for environment overrides, e.g. `KOMMENTAR_API__BASE_URL`.
pub const ENV_PREFIX: &str = "KOMMENTAR_";

/// Sections reachable from the environment. Other `KOMMENTAR_*`
/// variables are ignored rather than rejected as unknown keys.
const ENV_SECTIONS: [&str; 2] = ["api__", "logging__"];

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", path.display())]
    MissingFile { path: PathBuf },
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`KOMMENTAR_` prefix, `__` between section
///    and key); variables outside the `api` and `logging` sections are
///    skipped
///
/// # Errors
///
/// Returns `ConfigError::MissingFile` if `config_path` points nowhere,
/// and `ConfigError::Load` for malformed TOML, unknown top-level keys or
/// values of the wrong type.
pub fn load_config(config_path: Option<&Path>) -> Result<KommentarConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(KommentarConfig::default()));

    if let Some(path) = config_path {
        // figment reads a missing file as an empty one
        if !path.is_file() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .filter(|key| ENV_SECTIONS.iter().any(|section| key.starts_with(section)))
            .split("__"),
    );

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
