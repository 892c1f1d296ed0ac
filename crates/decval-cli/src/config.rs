//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config FILE`, or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallback values used when the format flags are omitted.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Format spec in `N(m,k)` notation, e.g. `"N(17,2)"`.
    pub format: Option<String>,
    /// Behave as if `--only-positive` were always passed.
    pub only_positive: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicitly passed `--config` path must exist; the default
    /// location is optional and silently falls back to the built-in
    /// defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, explicit) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("config file not found: {}", path.display());
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.decval.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "decval", "decval")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".decval.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.format.is_none());
        assert!(!cfg.defaults.only_positive);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn parses_partial_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [defaults]
            format = "N(17,2)"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.format.as_deref(), Some("N(17,2)"));
        assert!(!cfg.defaults.only_positive);
    }

    #[test]
    fn load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[defaults]\nformat = \"N(3,1)\"\nonly_positive = true"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.format.as_deref(), Some("N(3,1)"));
        assert!(cfg.defaults.only_positive);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
