//! Persistent preference store.
//!
//! Preferences live in a small TOML document under the user config
//! directory. A missing or unreadable file is never fatal: readers fall
//! back to defaults and the failure is only logged.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::haptics::HapticType;

/// Errors from reading or writing the preference file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read preferences '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preferences '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write preferences '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Key-value surface the app needs from persistence.
pub trait PreferenceStore: Send + Sync {
    fn haptic_type(&self) -> Result<HapticType, StoreError>;
    fn set_haptic_type(&self, haptic_type: HapticType) -> Result<(), StoreError>;
    fn is_first_launch(&self) -> Result<bool, StoreError>;
    fn mark_launched(&self) -> Result<(), StoreError>;
}

/// On-disk document shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    haptic_type: HapticType,
    #[serde(default = "default_first_launch")]
    is_first_launch: bool,
}

fn default_first_launch() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            haptic_type: HapticType::default(),
            is_first_launch: true,
        }
    }
}

/// File-backed store at `dirs::config_dir()/hushcue/preferences.toml`.
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    /// Store at the default per-user location. Falls back to the current
    /// directory when no config directory is available.
    pub fn at_default_location() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(config_dir.join("hushcue").join("preferences.toml"))
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<Preferences, StoreError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, preferences: &Preferences) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent, &self.path)?;
        }
        let raw = toml::to_string_pretty(preferences)?;
        fs::write(&self.path, raw).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Read-modify-write; a broken existing file is replaced by defaults
    /// with the new value applied.
    fn update(&self, apply: impl FnOnce(&mut Preferences)) -> Result<(), StoreError> {
        let mut preferences = self.read().unwrap_or_default();
        apply(&mut preferences);
        self.write(&preferences)
    }
}

fn ensure_dir(parent: &Path, path: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(parent).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

impl PreferenceStore for TomlPreferenceStore {
    fn haptic_type(&self) -> Result<HapticType, StoreError> {
        Ok(self.read()?.haptic_type)
    }

    fn set_haptic_type(&self, haptic_type: HapticType) -> Result<(), StoreError> {
        self.update(|preferences| preferences.haptic_type = haptic_type)
    }

    fn is_first_launch(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_first_launch)
    }

    fn mark_launched(&self) -> Result<(), StoreError> {
        self.update(|preferences| preferences.is_first_launch = false)
    }
}

/// In-memory store for tests and headless hosts.
#[derive(Default)]
pub struct InMemoryPreferences {
    inner: Mutex<Preferences>,
}

impl InMemoryPreferences {
    pub fn with_haptic_type(haptic_type: HapticType) -> Self {
        let store = Self::default();
        store.inner.lock().haptic_type = haptic_type;
        store
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn haptic_type(&self) -> Result<HapticType, StoreError> {
        Ok(self.inner.lock().haptic_type)
    }

    fn set_haptic_type(&self, haptic_type: HapticType) -> Result<(), StoreError> {
        self.inner.lock().haptic_type = haptic_type;
        Ok(())
    }

    fn is_first_launch(&self) -> Result<bool, StoreError> {
        Ok(self.inner.lock().is_first_launch)
    }

    fn mark_launched(&self) -> Result<(), StoreError> {
        self.inner.lock().is_first_launch = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let store = TomlPreferenceStore::at(dir.path().join("preferences.toml"));
        assert_eq!(store.haptic_type().unwrap(), HapticType::Gentle);
        assert!(store.is_first_launch().unwrap());
    }

    #[test]
    fn set_then_get_round_trips_through_disk() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nested").join("preferences.toml");
        let store = TomlPreferenceStore::at(path.clone());

        store.set_haptic_type(HapticType::Pulse).unwrap();
        store.mark_launched().unwrap();

        let reopened = TomlPreferenceStore::at(path);
        assert_eq!(reopened.haptic_type().unwrap(), HapticType::Pulse);
        assert!(!reopened.is_first_launch().unwrap());
    }

    #[test]
    fn corrupt_file_reports_parse_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "not [valid toml").unwrap();

        let store = TomlPreferenceStore::at(path);
        assert!(matches!(store.haptic_type(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn update_replaces_a_corrupt_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "not [valid toml").unwrap();

        let store = TomlPreferenceStore::at(path);
        store.set_haptic_type(HapticType::Strong).unwrap();
        assert_eq!(store.haptic_type().unwrap(), HapticType::Strong);
    }
}
