use std::path::{Path, PathBuf};

use crate::calendar::{ViewKind, DEFAULT_STORAGE_KEY};

#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            key: default_key(),
        }
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub default: ViewKind,
}

/// Reads the configuration file, or the defaults if no path is given.
pub fn init(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let string = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&string)?;

    if config.storage.key.trim().is_empty() {
        return Err("storage.key must not be empty".into());
    }

    Ok(config)
}

fn default_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(env!("CARGO_PKG_NAME"))
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        let config = init(None).unwrap();

        assert_eq!(config.storage.key, "rememberToDoEvents");
        assert!(config.storage.directory.ends_with("remember-calendar"));
        assert_eq!(config.view.default, ViewKind::Month);
    }

    #[test]
    fn sections_may_be_partial() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[view]\ndefault = \"week\"\n").unwrap();

        let config = init(Some(path.as_path())).unwrap();

        assert_eq!(config.view.default, ViewKind::Week);
        assert_eq!(config.storage.key, "rememberToDoEvents");
    }

    #[test]
    fn storage_section_is_read() {
        let config: Config = toml::from_str("[storage]\ndirectory = \"/tmp/cal\"\nkey = \"events\"\n").unwrap();

        assert_eq!(config.storage.directory, PathBuf::from("/tmp/cal"));
        assert_eq!(config.storage.key, "events");
    }

    #[test]
    fn empty_key_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nkey = \"\"\n").unwrap();

        assert!(init(Some(path.as_path())).is_err());
    }
}
