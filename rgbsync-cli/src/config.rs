//! Configuration file support for rgbsync.
//!
//! Settings are resolved from the following sources (highest priority first):
//! 1. Command-line arguments
//! 2. Environment variables (RGBSYNC_*)
//! 3. Local config file (./rgbsync.toml)
//! 4. Global config file (~/.config/rgbsync/config.toml)
//!
//! `--config <PATH>` replaces both files.

use directories::ProjectDirs;
use log::{debug, warn};
use rgbsync::DEFAULT_PROGRAM;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Cli;

/// Mode used when neither the command line nor a config file picks one.
pub const DEFAULT_MODE: &str = "Static";

/// Color used by the demo when no config file picks one.
pub const DEFAULT_DEMO_COLOR: &str = "red";

/// External tool configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenRgbConfig {
    /// Path or name of the openrgb executable.
    pub program: Option<String>,
}

/// Sync configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncConfig {
    /// Default mode for sync runs.
    pub mode: Option<String>,
}

/// Demo configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoConfig {
    /// Color used for color-dependent demo effects.
    pub color: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// External tool configuration.
    #[serde(default)]
    pub openrgb: OpenRgbConfig,
    /// Sync configuration.
    #[serde(default)]
    pub sync: SyncConfig,
    /// Demo configuration.
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    /// Load configuration from all available sources.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global_config) = Self::load_from_file(&global_path) {
                debug!("Loaded global config from {}", global_path.display());
                config.merge(global_config);
            }
        }

        if let Some(local_config) = Self::load_from_file(Path::new("rgbsync.toml")) {
            debug!("Loaded local config from rgbsync.toml");
            config.merge(local_config);
        }

        config
    }

    /// Load configuration from a specific file path (--config flag).
    pub fn load_from_path(path: &Path) -> Self {
        if let Some(config) = Self::load_from_file(path) {
            debug!("Loaded config from {}", path.display());
            config
        } else {
            warn!(
                "Could not load config from {}, using defaults",
                path.display()
            );
            Self::default()
        }
    }

    fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("Failed to parse config file {}: {}", path.display(), e);
                    None
                },
            },
            Err(e) => {
                warn!("Failed to read config file {}: {}", path.display(), e);
                None
            },
        }
    }

    /// Get the global configuration directory.
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "rgbsync").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the global configuration file path.
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    fn merge(&mut self, other: Self) {
        if other.openrgb.program.is_some() {
            self.openrgb.program = other.openrgb.program;
        }
        if other.sync.mode.is_some() {
            self.sync.mode = other.sync.mode;
        }
        if other.demo.color.is_some() {
            self.demo.color = other.demo.color;
        }
    }
}

/// Effective settings after applying precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// External program to run.
    pub program: String,
    /// Mode for sync runs.
    pub mode: String,
    /// Color name or hex code used by the demo.
    pub demo_color: String,
}

impl Settings {
    /// Combine command-line values (which already include environment
    /// variables) with the loaded config.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            program: cli
                .program
                .clone()
                .or_else(|| config.openrgb.program.clone())
                .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
            mode: cli
                .mode
                .clone()
                .or_else(|| config.sync.mode.clone())
                .unwrap_or_else(|| DEFAULT_MODE.to_string()),
            demo_color: config
                .demo
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_DEMO_COLOR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["rgbsync"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.openrgb.program.is_none());
        assert!(config.sync.mode.is_none());
        assert!(config.demo.color.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[openrgb]
program = "/opt/openrgb/openrgb"

[sync]
mode = "Breathing"

[demo]
color = "cyan"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.openrgb.program.as_deref(), Some("/opt/openrgb/openrgb"));
        assert_eq!(config.sync.mode.as_deref(), Some("Breathing"));
        assert_eq!(config.demo.color.as_deref(), Some("cyan"));
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config: Config = toml::from_str("[demo]\ncolor = \"blue\"\n").unwrap();
        assert!(config.openrgb.program.is_none());
        assert_eq!(config.demo.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_config_merge_does_not_overwrite_with_none() {
        let mut base = Config::default();
        base.openrgb.program = Some("openrgb-git".to_string());
        base.sync.mode = Some("Breathing".to_string());

        base.merge(Config::default());

        assert_eq!(base.openrgb.program.as_deref(), Some("openrgb-git"));
        assert_eq!(base.sync.mode.as_deref(), Some("Breathing"));
    }

    #[test]
    fn test_config_merge_overrides() {
        let mut base = Config::default();
        base.demo.color = Some("red".to_string());
        let mut other = Config::default();
        other.demo.color = Some("pink".to_string());

        base.merge(other);
        assert_eq!(base.demo.color.as_deref(), Some("pink"));
    }

    #[test]
    fn test_load_from_path_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgbsync.toml");
        fs::write(&path, "[openrgb]\nprogram = \"/usr/local/bin/openrgb\"\n").unwrap();

        let config = Config::load_from_path(&path);
        assert_eq!(
            config.openrgb.program.as_deref(),
            Some("/usr/local/bin/openrgb")
        );
    }

    #[test]
    fn test_load_from_path_invalid_toml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[openrgb\nprogram = ").unwrap();

        let config = Config::load_from_path(&path);
        assert!(config.openrgb.program.is_none());
    }

    #[test]
    fn test_load_from_path_nonexistent() {
        let config = Config::load_from_path(Path::new("/nonexistent/path/config.toml"));
        assert!(config.openrgb.program.is_none());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(&cli(&["red"]), &Config::default());
        assert_eq!(settings.program, "openrgb");
        assert_eq!(settings.mode, "Static");
        assert_eq!(settings.demo_color, "red");
    }

    #[test]
    fn test_settings_config_fills_gaps() {
        let mut config = Config::default();
        config.openrgb.program = Some("/opt/openrgb".to_string());
        config.sync.mode = Some("Breathing".to_string());
        config.demo.color = Some("blue".to_string());

        let settings = Settings::resolve(&cli(&["red"]), &config);
        assert_eq!(settings.program, "/opt/openrgb");
        assert_eq!(settings.mode, "Breathing");
        assert_eq!(settings.demo_color, "blue");
    }

    #[test]
    fn test_settings_cli_wins_over_config() {
        let mut config = Config::default();
        config.openrgb.program = Some("/opt/openrgb".to_string());
        config.sync.mode = Some("Breathing".to_string());

        let settings = Settings::resolve(
            &cli(&["red", "--mode", "Color Pulse", "--program", "./openrgb"]),
            &config,
        );
        assert_eq!(settings.program, "./openrgb");
        assert_eq!(settings.mode, "Color Pulse");
    }

    #[test]
    fn test_global_config_path_shape() {
        if let Some(p) = Config::global_config_path() {
            assert!(p.to_str().unwrap().contains("rgbsync"));
            assert!(p.to_str().unwrap().ends_with("config.toml"));
        }
    }
}
