use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::AppConfig;

pub const ENV_CONFIG_PATH: &str = "REELSHELF_CONFIG_PATH";
pub const ENV_API_BASE_URL: &str = "REELSHELF_API_BASE_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "REELSHELF_API_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "REELSHELF_DATA_DIR";

const DEFAULT_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Where the configuration file came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults; no file was read.
    #[default]
    Default,
    /// Path given on the command line.
    Explicit(PathBuf),
    /// `$REELSHELF_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// `config.toml` in the platform config directory.
    File(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Default => None,
            ConfigSource::Explicit(path)
            | ConfigSource::EnvPath(path)
            | ConfigSource::File(path) => Some(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

/// Resolve configuration for the running process.
///
/// Evaluation order:
/// 1) a `.env` file in the working directory is loaded if present,
/// 2) the file from `explicit`, `$REELSHELF_CONFIG_PATH`, or the platform
///    default `config.toml` (first one found),
/// 3) `REELSHELF_*` environment variables override individual fields.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigLoadError> {
    if let Ok(path) = dotenvy::dotenv() {
        debug!(path = %path.display(), "Loaded .env");
    }

    load_with(explicit, default_config_path(), |key| env::var(key).ok())
}

/// [`load`] with the environment and default location supplied by the
/// caller.
pub fn load_with<F>(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
    lookup: F,
) -> Result<LoadedConfig, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let env_path = lookup(ENV_CONFIG_PATH)
        .filter(|raw| !raw.trim().is_empty())
        .map(PathBuf::from);

    let source = if let Some(path) = explicit {
        ConfigSource::Explicit(path.to_path_buf())
    } else if let Some(path) = env_path {
        ConfigSource::EnvPath(path)
    } else if let Some(path) = default_path.filter(|path| path.exists()) {
        ConfigSource::File(path)
    } else {
        ConfigSource::Default
    };

    let mut config = match source.path() {
        Some(path) => load_from_file(path)?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut config, &lookup)?;

    info!(source = ?source, base_url = %config.api.base_url, "Configuration resolved");
    Ok(LoadedConfig { config, source })
}

/// Parse a config file; `.toml` and `.json` by extension, anything else
/// tries TOML then JSON.
pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            serde_json::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                message: err.to_string(),
            })
        }
        Some("toml") => {
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                message: err.to_string(),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<AppConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                message: format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

pub fn apply_env_overrides<F>(
    config: &mut AppConfig,
    lookup: F,
) -> Result<(), ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| {
        lookup(key).filter(|raw: &String| !raw.trim().is_empty())
    };

    if let Some(base_url) = non_empty(ENV_API_BASE_URL) {
        config.api.base_url = base_url.trim().to_string();
    }

    if let Some(raw) = non_empty(ENV_API_TIMEOUT_SECS) {
        let secs = raw.trim().parse::<u64>().map_err(|_| {
            ConfigLoadError::InvalidEnv {
                key: ENV_API_TIMEOUT_SECS,
                value: raw.clone(),
            }
        })?;
        config.api.timeout_secs = Some(secs);
    }

    if let Some(dir) = non_empty(ENV_DATA_DIR) {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }

    Ok(())
}

/// `<platform config dir>/config.toml`, if a config dir can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "reelshelf", "reelshelf")
        .map(|dirs| dirs.config_dir().join(DEFAULT_FILE_NAME))
}
