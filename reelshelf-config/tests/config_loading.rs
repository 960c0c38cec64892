use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use reelshelf_config::{
    ConfigLoadError, ConfigSource, ENV_API_BASE_URL, ENV_API_TIMEOUT_SECS,
    ENV_CONFIG_PATH, ENV_DATA_DIR, load_from_file, load_with,
};
use tempfile::TempDir;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_configured() {
    let loaded = load_with(None, None, env_of(&[])).unwrap();

    assert_eq!(loaded.source, ConfigSource::Default);
    assert_eq!(loaded.config.api.base_url, "https://api.imdbapi.dev");
    assert_eq!(loaded.config.api.timeout(), None);
    assert_eq!(loaded.config.storage.data_dir, None);
}

#[test]
fn toml_file_then_env_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reelshelf.toml");
    std::fs::write(
        &path,
        r#"
[api]
base_url = "http://127.0.0.1:8080"
timeout_secs = 5

[storage]
data_dir = "/tmp/from-file"
"#,
    )
    .unwrap();

    let loaded = load_with(
        Some(&path),
        None,
        env_of(&[(ENV_DATA_DIR, "/tmp/from-env")]),
    )
    .unwrap();

    assert_eq!(loaded.source, ConfigSource::Explicit(path.clone()));
    assert_eq!(loaded.config.api.base_url, "http://127.0.0.1:8080");
    assert_eq!(loaded.config.api.timeout(), Some(Duration::from_secs(5)));
    assert_eq!(
        loaded.config.storage.data_dir,
        Some(PathBuf::from("/tmp/from-env"))
    );
}

#[test]
fn env_path_is_used_when_no_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "api": { "base_url": "https://mirror.example" } }"#)
        .unwrap();

    let loaded = load_with(
        None,
        Some(dir.path().join("missing.toml")),
        env_of(&[
            (ENV_CONFIG_PATH, path.to_str().unwrap()),
            (ENV_API_TIMEOUT_SECS, "12"),
        ]),
    )
    .unwrap();

    assert_eq!(loaded.source, ConfigSource::EnvPath(path));
    assert_eq!(loaded.config.api.base_url, "https://mirror.example");
    assert_eq!(loaded.config.api.timeout_secs, Some(12));
}

#[test]
fn default_file_is_picked_up_when_present() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"https://file.example\"\n").unwrap();

    let loaded = load_with(
        None,
        Some(path.clone()),
        env_of(&[(ENV_API_BASE_URL, "https://env.example")]),
    )
    .unwrap();

    assert_eq!(loaded.source, ConfigSource::File(path));
    assert_eq!(loaded.config.api.base_url, "https://env.example");
}

#[test]
fn extensionless_files_try_toml_then_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reelshelfrc");
    std::fs::write(&path, r#"{ "storage": { "data_dir": "/data" } }"#).unwrap();

    let config = load_from_file(&path).unwrap();
    assert_eq!(config.storage.data_dir, Some(PathBuf::from("/data")));
    assert_eq!(config.api.base_url, "https://api.imdbapi.dev");
}

#[test]
fn bad_timeout_is_rejected() {
    let err = load_with(None, None, env_of(&[(ENV_API_TIMEOUT_SECS, "soon")]))
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::InvalidEnv {
            key: ENV_API_TIMEOUT_SECS,
            ..
        }
    ));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = load_with(Some(&path), None, env_of(&[])).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Read { .. }));
}
