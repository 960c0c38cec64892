//! Configuration loading for reelshelf.
//!
//! Settings resolve from built-in defaults, then a TOML or JSON file, then
//! `REELSHELF_*` environment variables (a `.env` file is honoured).
#![allow(missing_docs)]

pub mod loader;
pub mod models;

pub use loader::{
    ConfigLoadError, ConfigSource, ENV_API_BASE_URL, ENV_API_TIMEOUT_SECS,
    ENV_CONFIG_PATH, ENV_DATA_DIR, LoadedConfig, apply_env_overrides,
    default_config_path, load, load_from_file, load_with, parse_from_str,
};
pub use models::{ApiConfig, AppConfig, StorageConfig};
