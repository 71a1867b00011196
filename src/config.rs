//! Viewer configuration.
//!
//! Settings come from an optional TOML file (with the `config` feature) and are then
//! overridden by command-line flags. Every setting has a default, so running without a
//! file is the common case.
//!
//! ```toml
//! theme = "high-contrast"
//! data_path = "site/data/collection-data.js"
//! poll_interval_ms = 50
//! ```

use crate::error::{CollviewError, Result};
use crate::render::ui::ThemeName;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default input poll interval in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color theme for the terminal UI.
    pub theme: ThemeName,
    /// Data file used when none is given on the command line.
    pub data_path: Option<PathBuf>,
    /// How long the input thread waits for terminal events per poll.
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Default,
            data_path: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    /// Location of the per-user configuration file, if the platform has one.
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("collview").join("config.toml"))
    }

    #[cfg(not(feature = "config"))]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    /// Parse configuration from TOML text.
    #[cfg(feature = "config")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CollviewError::config(e.to_string()))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user file is read when present
    /// and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    #[cfg(feature = "config")]
    fn load_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CollviewError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CollviewError::file_error(format!("Failed to read {}", path.display()), e)
            }
        })?;
        let config = Self::from_toml_str(&text).map_err(|e| match e {
            CollviewError::ConfigError { message } => {
                CollviewError::config(format!("{}: {}", path.display(), message))
            }
            other => other,
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    #[cfg(not(feature = "config"))]
    fn load_file(path: &Path) -> Result<Self> {
        Err(CollviewError::config(format!(
            "cannot read {}: built without the `config` feature",
            path.display()
        )))
    }
}

#[cfg(all(test, feature = "config"))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Default);
        assert_eq!(config.data_path, None);
        assert_eq!(config.poll_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::from_toml_str("theme = \"monochrome\"\n").unwrap();
        assert_eq!(config.theme, ThemeName::Monochrome);
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::from_toml_str(
            "theme = \"high-contrast\"\ndata_path = \"site/data.js\"\npoll_interval_ms = 20\n",
        )
        .unwrap();
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert_eq!(config.data_path, Some(PathBuf::from("site/data.js")));
        assert_eq!(config.poll_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = Config::from_toml_str("max_rows = 10\n").unwrap_err();
        assert!(matches!(err, CollviewError::ConfigError { .. }));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "poll_interval_ms = 0\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.poll_interval(), Duration::from_millis(1));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(CollviewError::FileNotFound { .. })
        ));
    }
}
