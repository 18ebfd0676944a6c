//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use atc_core::VfrThresholds;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one plan file per date.
    pub plans_dir: PathBuf,

    /// Minimum gap length for a recommended VFR window, in minutes.
    pub vfr_recommended_minutes: i32,

    /// Minimum gap length for a possible VFR window, in minutes.
    pub vfr_possible_minutes: i32,

    /// Imminent-block warning horizon, in minutes.
    pub lookahead_minutes: f64,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            plans_dir: data_dir.join("plans"),
            vfr_recommended_minutes: 30,
            vfr_possible_minutes: 20,
            lookahead_minutes: atc_core::DEFAULT_LOOKAHEAD_MINUTES,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (ATC_*)
        figment = figment.merge(Env::prefixed("ATC_"));

        figment.extract()
    }

    /// The VFR classification thresholds this configuration implies.
    #[must_use]
    pub fn vfr_thresholds(&self) -> VfrThresholds {
        VfrThresholds {
            recommended: self.vfr_recommended_minutes,
            possible: self.vfr_possible_minutes,
        }
    }
}

/// Returns the platform-specific config directory for atc.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("atc"))
}

/// Returns the platform-specific data directory for atc.
///
/// On Linux: `~/.local/share/atc`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("atc"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plans_dir_lives_under_data_dir() {
        let config = Config::default();
        assert_eq!(config.plans_dir.file_name().unwrap(), "plans");
    }

    #[test]
    fn default_thresholds_match_engine_defaults() {
        let config = Config::default();
        assert_eq!(config.vfr_thresholds(), VfrThresholds::default());
        assert!((config.lookahead_minutes - 10.0).abs() < f64::EPSILON);
    }
}
