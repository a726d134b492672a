use std::{fs, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};
use anyhow::{self, Context};

use crate::backend::{FileKvStore, JsonStore, DEFAULT_KEY};

fn default_key() -> String {
    DEFAULT_KEY.to_owned()
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub directory: PathBuf,
    #[serde(default = "default_key")]
    pub key: String
}

impl StorageConfig {
    pub fn in_directory(directory: impl AsRef<Path>) -> Self {
        StorageConfig { directory: directory.as_ref().to_path_buf(), key: default_key() }
    }

    pub fn open(&self) -> JsonStore<FileKvStore> {
        JsonStore::with_key(FileKvStore::new(&self.directory), &self.key)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }
}


#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{AppConfig, StorageConfig};
    use crate::backend::LedgerBackend;
    use rstest::rstest;

    #[rstest]
    fn reads_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally.toml");
        std::fs::write(&path, "[storage]\ndirectory = \"/var/lib/tally\"\nkey = \"household\"\n").unwrap();

        let config = AppConfig::read(&path).unwrap();
        assert_eq!(config.storage.directory, PathBuf::from("/var/lib/tally"));
        assert_eq!(config.storage.key, "household");
    }

    #[rstest]
    fn key_defaults_to_transactions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally.toml");
        std::fs::write(&path, "[storage]\ndirectory = \"data\"\n").unwrap();

        let config = AppConfig::read(&path).unwrap();
        assert_eq!(config.storage, StorageConfig::in_directory("data"));
    }

    #[rstest]
    #[case("")]
    #[case("[storage]\nkey = \"x\"\n")]
    #[case("not toml at all")]
    fn bad_config_is_an_error(#[case] content: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally.toml");
        std::fs::write(&path, content).unwrap();

        assert!(AppConfig::read(&path).is_err());
    }

    #[rstest]
    fn missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::read(dir.path().join("absent.toml")).is_err());
    }

    #[rstest]
    fn opens_file_backed_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = StorageConfig::in_directory(dir.path()).open();

        assert!(store.load().is_empty());
        store.save(&[]);
        assert!(dir.path().join("transactions.json").exists());
    }
}
