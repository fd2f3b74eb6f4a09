//! Persisted user settings (~/.kittenspeak/settings.toml).
//!
//! Settings are stored as TOML under the user's home directory. A missing
//! file means defaults; a present file must parse and carry a valid
//! strength level. Paths are overridable so the CLI and tests can point at
//! their own files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strength::{MAX_STRENGTH, MIN_STRENGTH};

/// Default strength level for outgoing messages.
pub const DEFAULT_STRENGTH: u8 = 5;

/// Whether transformation of outgoing messages starts enabled.
pub const DEFAULT_ENABLED: bool = true;

/// Whether the reveal toggle icon starts visible.
pub const DEFAULT_SHOW_ICON: bool = true;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine home directory")]
    NoConfigDir,

    #[error("Strength must be between 1 and 5, got {0}")]
    InvalidStrength(u8),
}

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Strength level applied to outgoing messages (1-5).
    pub strength: u8,

    /// Whether outgoing messages are transformed at all.
    pub enabled: bool,

    /// Whether the host surface shows the reveal toggle on encoded messages.
    pub show_icon: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
            enabled: DEFAULT_ENABLED,
            show_icon: DEFAULT_SHOW_ICON,
        }
    }
}

impl Settings {
    /// Loads settings from the default path.
    ///
    /// Returns defaults if the file doesn't exist yet.
    pub fn load() -> Result<Self, SettingsError> {
        let path = default_settings_path()?;
        Self::load_from(&path)
    }

    /// Loads settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Saves settings to the default path, creating the directory if needed.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = default_settings_path()?;
        self.save_to(&path)
    }

    /// Saves settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Updates the strength level, rejecting out-of-range values.
    pub fn set_strength(&mut self, level: u8) -> Result<(), SettingsError> {
        if !(MIN_STRENGTH..=MAX_STRENGTH).contains(&level) {
            return Err(SettingsError::InvalidStrength(level));
        }
        self.strength = level;
        Ok(())
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_STRENGTH..=MAX_STRENGTH).contains(&self.strength) {
            return Err(SettingsError::InvalidStrength(self.strength));
        }
        Ok(())
    }
}

/// Returns the kittenspeak config directory (~/.kittenspeak).
pub fn config_dir() -> Result<PathBuf, SettingsError> {
    dirs::home_dir()
        .map(|home| home.join(".kittenspeak"))
        .ok_or(SettingsError::NoConfigDir)
}

/// Returns the default settings file path (~/.kittenspeak/settings.toml).
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    Ok(config_dir()?.join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.strength, DEFAULT_STRENGTH);
        assert!(settings.enabled);
        assert!(settings.show_icon);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let settings = Settings {
            strength: 2,
            enabled: false,
            show_icon: true,
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.toml");

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "strength = 2\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.strength, 2);
        assert_eq!(loaded.enabled, DEFAULT_ENABLED);
        assert_eq!(loaded.show_icon, DEFAULT_SHOW_ICON);
    }

    #[test]
    fn test_load_rejects_out_of_range_strength() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "strength = 9\n").unwrap();

        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(SettingsError::InvalidStrength(9))));
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "][ not toml").unwrap();

        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }

    #[test]
    fn test_set_strength_validates_range() {
        let mut settings = Settings::default();

        settings.set_strength(1).unwrap();
        assert_eq!(settings.strength, 1);

        let result = settings.set_strength(0);
        assert!(matches!(result, Err(SettingsError::InvalidStrength(0))));
        assert_eq!(settings.strength, 1);

        let result = settings.set_strength(6);
        assert!(matches!(result, Err(SettingsError::InvalidStrength(6))));
    }
}
