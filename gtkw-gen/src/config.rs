//! Layout settings.
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional TOML file passed with `--config`, and the command line.
//!
//! ```toml
//! [layout]
//! width = 1900
//! height = 900
//! format = "sav"
//!
//! [project]
//! elaborate_command = "xelab"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::layout::WindowSize;

pub const DEFAULT_WIDTH: u32 = 1900;
pub const DEFAULT_HEIGHT: u32 = 900;
pub const DEFAULT_ELABORATE_COMMAND: &str = "xelab";

/// Errors that can occur when loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("validation error: {0}")]
    Validation(String),
}

/// File format, which only changes the extension GTKWave expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutFormat {
    #[default]
    Gtkw,
    Sav,
}

impl LayoutFormat {
    pub fn extension(self) -> &'static str {
        match self {
            LayoutFormat::Gtkw => "gtkw",
            LayoutFormat::Sav => "sav",
        }
    }
}

/// Contents of a settings file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub layout: LayoutSection,
    pub project: ProjectSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSection {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<LayoutFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectSection {
    pub elaborate_command: Option<String>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<LayoutFormat>,
    pub elaborate_command: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub window: WindowSize,
    pub format: LayoutFormat,
    pub elaborate_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            format: LayoutFormat::default(),
            elaborate_command: DEFAULT_ELABORATE_COMMAND.to_string(),
        }
    }
}

impl Settings {
    /// Layers command line overrides on top of a settings file and validates the result.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        let settings = Settings {
            window: WindowSize::new(
                overrides
                    .width
                    .or(file.layout.width)
                    .unwrap_or(defaults.window.width),
                overrides
                    .height
                    .or(file.layout.height)
                    .unwrap_or(defaults.window.height),
            ),
            format: overrides
                .format
                .or(file.layout.format)
                .unwrap_or(defaults.format),
            elaborate_command: overrides
                .elaborate_command
                .or(file.project.elaborate_command)
                .unwrap_or(defaults.elaborate_command),
        };

        validate_settings(&settings)?;
        Ok(settings)
    }
}

/// Reads a settings file, or returns empty settings when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses settings from a string.
pub fn load_config_from_str(content: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    if settings.window.width == 0 || settings.window.height == 0 {
        return Err(ConfigError::Validation(format!(
            "window size must be non-zero, got {} x {}",
            settings.window.width, settings.window.height
        )));
    }
    if settings.elaborate_command.trim().is_empty() {
        return Err(ConfigError::Validation(
            "elaborate_command must not be empty".to_string(),
        ));
    }
    Ok(())
}
