//! User configuration loaded from `config.toml`.

use crate::constants;
use color_eyre::eyre::{ensure, WrapErr};
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings read from the config file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Interval between redraw ticks.
    pub tick_rate_ms: u64,
    /// Capture the mouse so the buttons are clickable.
    pub mouse: bool,
    /// Open the activity log panel at startup.
    pub show_log: bool,
    /// Keep order state for rows scrolled out of view.
    pub retain_offscreen_rows: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: constants::DEFAULT_TICK_RATE_MS,
            mouse: true,
            show_log: false,
            retain_offscreen_rows: false,
        }
    }
}

impl Config {
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Parses and validates config text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML, unknown keys or a zero tick rate.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        ensure!(config.tick_rate_ms > 0, "tick_rate_ms must be greater than zero");
        Ok(config)
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file found; built-in defaults.
    Defaults,
    /// Loaded from this file.
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => write!(f, "defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Default location: `<config dir>/menuboard/config.toml`.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::APP_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

/// Loads the configuration.
///
/// An explicit path must exist. The default path is optional and falls back
/// to [`Config::default`] when absent.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load(explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok((Config::default(), ConfigSource::Defaults)),
        },
    };

    let text = fs::read_to_string(&path)
        .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
    let config = Config::parse(&text)
        .wrap_err_with(|| format!("Invalid config file {}", path.display()))?;
    Ok((config, ConfigSource::File(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::parse("show_log = true\ntick_rate_ms = 100\n").unwrap();
        assert!(config.show_log);
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert!(config.mouse);
        assert!(!config.retain_offscreen_rows);
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let err = Config::parse("tick_rate_ms = 0").unwrap_err();
        assert!(err.to_string().contains("tick_rate_ms"));
    }

    #[test]
    fn test_rejects_unknown_key() {
        assert!(Config::parse("colour = \"red\"").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(Config::parse("mouse = = true").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "retain_offscreen_rows = true").unwrap();

        let (config, source) = load(Some(file.path())).unwrap();
        assert!(config.retain_offscreen_rows);
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_load_invalid_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mouse = \"sometimes\"").unwrap();
        let err = load(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(ConfigSource::Defaults.to_string(), "defaults");
        assert_eq!(
            ConfigSource::File(PathBuf::from("/tmp/config.toml")).to_string(),
            "/tmp/config.toml"
        );
    }
}
