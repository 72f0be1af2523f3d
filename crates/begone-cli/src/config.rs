//! Persisted credential storage
//!
//! Credentials are kept as a small TOML file:
//!
//! ```toml
//! username = "alice"
//! password = "secret"
//! ```
//!
//! The default location is `<config dir>/begone/config.toml`; `--config` or
//! `BEGONE_CONFIG` point somewhere else.

use std::path::{Path, PathBuf};

use begone_core::{ConfigStore, CredentialRecord};
use tracing::debug;

use crate::error::{CliError, Result};

const CONFIG_DIR_NAME: &str = "begone";
const CONFIG_FILE_NAME: &str = "config.toml";

/// TOML file holding the saved credential record
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `path` if given, otherwise at the platform default location
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(Self::default_config_path()?)),
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            CliError::Config("No configuration directory available on this platform".to_string())
        })?;
        Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved record, or an empty record if none was saved
    pub fn load_record(&self) -> Result<CredentialRecord> {
        if !self.path.exists() {
            debug!("No saved credentials at {}", self.path.display());
            return Ok(CredentialRecord::default());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save `record`, creating parent directories as needed
    pub fn save(&self, record: &CredentialRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(record)?;
        std::fs::write(&self.path, contents)?;
        debug!("Saved credentials to {}", self.path.display());
        Ok(())
    }

    /// Remove the saved record; returns whether anything was removed
    pub fn clear(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl ConfigStore for FileConfigStore {
    type Error = CliError;

    fn load(&self) -> std::result::Result<CredentialRecord, Self::Error> {
        self.load_record()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path().join("config.toml"));
        assert_eq!(store.load().unwrap(), CredentialRecord::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path().join("nested").join("config.toml"));

        store.save(&CredentialRecord::new("alice", "secret")).unwrap();
        assert_eq!(store.load().unwrap(), CredentialRecord::new("alice", "secret"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "username = [").unwrap();

        let store = FileConfigStore::new(path);
        assert!(matches!(store.load(), Err(CliError::TomlParsing(_))));
    }

    #[test]
    fn test_clear_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path().join("config.toml"));

        assert!(!store.clear().unwrap());
        store.save(&CredentialRecord::new("alice", "secret")).unwrap();
        assert!(store.clear().unwrap());
        assert!(!store.path().exists());
    }
}
