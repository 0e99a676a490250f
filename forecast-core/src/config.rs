use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, path::PathBuf};

use crate::normalize::{DEFAULT_MAX_DAYS, NormalizeOptions};

/// Which half of each unit pair human-readable output shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Imperial, UnitSystem::Metric]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Number of forecast days to keep; 5 when unset.
    pub max_days: Option<usize>,

    /// Location label used when none is given on the command line.
    pub default_location: Option<String>,

    #[serde(default)]
    pub units: UnitSystem,
}

impl Config {
    pub fn max_days(&self) -> usize {
        self.max_days.unwrap_or(DEFAULT_MAX_DAYS)
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions { max_days: self.max_days() }
    }

    /// Resolve the location label, preferring an explicit one.
    pub fn location_name(&self, explicit: Option<String>) -> Result<String> {
        explicit.or_else(|| self.default_location.clone()).ok_or_else(|| {
            anyhow!(
                "No location given and no default location configured.\n\
                 Hint: pass `--location <name>` or run `forecast configure` first."
            )
        })
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_five_days_imperial() {
        let cfg = Config::default();
        assert_eq!(cfg.max_days(), 5);
        assert_eq!(cfg.normalize_options(), NormalizeOptions::default());
        assert_eq!(cfg.units, UnitSystem::Imperial);
    }

    #[test]
    fn location_name_prefers_explicit() {
        let cfg = Config { default_location: Some("Bergen".into()), ..Default::default() };
        assert_eq!(cfg.location_name(Some("Oslo".into())).unwrap(), "Oslo");
        assert_eq!(cfg.location_name(None).unwrap(), "Bergen");
    }

    #[test]
    fn location_name_errors_when_nothing_configured() {
        let err = Config::default().location_name(None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("No location given"));
        assert!(msg.contains("Hint: pass `--location"));
    }

    #[test]
    fn load_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            max_days: Some(3),
            default_location: Some("Reykjavik".into()),
            units: UnitSystem::Metric,
        };
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.normalize_options().max_days, 3);
    }

    #[test]
    fn units_field_is_optional_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_days = 2\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.max_days(), 2);
        assert_eq!(cfg.units, UnitSystem::Imperial);
    }

    #[test]
    fn broken_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_days = \"many\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
