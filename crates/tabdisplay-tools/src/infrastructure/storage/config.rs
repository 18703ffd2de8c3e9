//! TOML-based configuration for the diagnostic tools.
//!
//! Reads `DiagnosticsConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\TabDisplay\diagnostics.toml`
//! - Linux:    `~/.config/tabdisplay/diagnostics.toml`
//! - macOS:    `~/Library/Application Support/TabDisplay/diagnostics.toml`
//!
//! The file is optional.  When it is absent the tools behave exactly as with
//! the built-in defaults:
//!
//! ```toml
//! [tablet]
//! width = 1752
//! height = 2800
//!
//! [host]
//! image_name = "TabDisplay.exe"
//! build_dir = 'host\build\vs2022-release'
//! log_path = 'host\TabDisplay.log'
//!
//! [network]
//! tethering_markers = ["USB", "RNDIS", "Android", "192.168.42.", "192.168.43."]
//!
//! [check]
//! stop_when_host_missing = true
//! ```
//!
//! Every table and field is optional; missing ones take their default.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tabdisplay_core::{HostDetails, TabletProfile, DEFAULT_TETHERING_MARKERS};
use thiserror::Error;

use crate::application::check_environment::CheckSettings;

/// File name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "diagnostics.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration shared by both tools.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub tablet: TabletProfile,
    #[serde(default)]
    pub host: HostDetails,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

/// Tethering interface detection settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Substrings that mark a network configuration line as a tethering
    /// interface.  Compared case-insensitively.
    #[serde(default = "default_tethering_markers")]
    pub tethering_markers: Vec<String>,
}

/// Environment checker behaviour.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Stop after the host check when the host is not running.
    #[serde(default = "default_true")]
    pub stop_when_host_missing: bool,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_tethering_markers() -> Vec<String> {
    DEFAULT_TETHERING_MARKERS
        .iter()
        .map(|m| m.to_string())
        .collect()
}
fn default_true() -> bool {
    true
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            tethering_markers: default_tethering_markers(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            stop_when_host_missing: default_true(),
        }
    }
}

impl DiagnosticsConfig {
    /// Settings for an environment checker run.
    pub fn check_settings(&self) -> CheckSettings {
        CheckSettings {
            image_name: self.host.image_name.clone(),
            tethering_markers: self.network.tethering_markers.clone(),
            stop_when_host_missing: self.check.stop_when_host_missing,
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Parses configuration text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed.
pub fn parse_config(content: &str) -> Result<DiagnosticsConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads configuration.
///
/// With `explicit` set, that file must exist.  Otherwise the default location
/// is tried and a missing file (or an undeterminable config directory) yields
/// [`DiagnosticsConfig::default()`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors (including a missing
/// explicit file) and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(explicit: Option<&Path>) -> Result<DiagnosticsConfig, ConfigError> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return parse_config(&content);
    }

    let path = match config_file_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("{e}; using built-in defaults");
            return Ok(DiagnosticsConfig::default());
        }
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded config");
            parse_config(&content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DiagnosticsConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Resolves the platform config base directory including the `TabDisplay`
/// subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("TabDisplay"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("tabdisplay"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("TabDisplay")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_fixed_constants() {
        // Arrange / Act
        let cfg = DiagnosticsConfig::default();

        // Assert
        assert_eq!(cfg.tablet.width, 1752);
        assert_eq!(cfg.tablet.height, 2800);
        assert_eq!(cfg.host.image_name, "TabDisplay.exe");
        assert_eq!(cfg.host.log_path, r"host\TabDisplay.log");
        assert_eq!(
            cfg.network.tethering_markers,
            ["USB", "RNDIS", "Android", "192.168.42.", "192.168.43."]
        );
        assert!(cfg.check.stop_when_host_missing);
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let cfg = parse_config("").expect("parse");
        assert_eq!(cfg, DiagnosticsConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // Arrange
        let content = r#"
            [tablet]
            height = 2560

            [check]
            stop_when_host_missing = false
        "#;

        // Act
        let cfg = parse_config(content).expect("parse");

        // Assert
        assert_eq!(cfg.tablet.width, 1752);
        assert_eq!(cfg.tablet.height, 2560);
        assert!(!cfg.check.stop_when_host_missing);
        assert_eq!(cfg.host, HostDetails::default());
        assert_eq!(cfg.network, NetworkConfig::default());
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let result = parse_config("[tablet]\nwidth = \"wide\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_check_settings_carry_host_and_network_values() {
        let cfg = parse_config(
            r#"
            [host]
            image_name = "TabHost.exe"

            [network]
            tethering_markers = ["galaxy"]
        "#,
        )
        .expect("parse");

        let settings = cfg.check_settings();

        assert_eq!(settings.image_name, "TabHost.exe");
        assert_eq!(settings.tethering_markers, ["galaxy"]);
        assert!(settings.stop_when_host_missing);
    }

    #[test]
    fn test_load_config_with_missing_explicit_path_is_io_error() {
        let path = std::env::temp_dir().join("tabdisplay-missing-config-7f3a.toml");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_config_reads_explicit_file() {
        // Arrange
        let path = std::env::temp_dir().join(format!(
            "tabdisplay-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[tablet]\nwidth = 1600\n").expect("write");

        // Act
        let result = load_config(Some(&path));
        let _ = std::fs::remove_file(&path);

        // Assert
        let cfg = result.expect("load");
        assert_eq!(cfg.tablet.width, 1600);
        assert_eq!(cfg.tablet.height, 2800);
    }

    #[test]
    fn test_config_file_path_ends_with_file_name() {
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
