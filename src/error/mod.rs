//! Error types for everything around the conversion core
//!
//! The conversion core itself is infallible. These errors come from reading
//! input sources, loading preset files and validating CLI configuration.

use anyhow::Error;
use std::path::PathBuf;

/// Main error type for operations surrounding a conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Failed to read {}: {message}", path_label(.path))]
    Read {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: u64, limit: u64 },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Invalid preset file {}: {message}", .path.display())]
    PresetFile { path: PathBuf, message: String },

    #[error("Unknown preset '{name}'")]
    UnknownPreset { name: String },

    #[error(transparent)]
    Other(#[from] Error),
}

fn path_label(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "input".to_string(),
    }
}

impl ConversionError {
    pub fn read(message: String, path: Option<PathBuf>) -> Self {
        Self::Read { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn preset_file(path: PathBuf, message: String) -> Self {
        Self::PresetFile { path, message }
    }

    pub fn unknown_preset(name: &str) -> Self {
        Self::UnknownPreset {
            name: name.to_string(),
        }
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { message, path } => match path {
                Some(path) => format!("Could not read '{}': {}", path.display(), message),
                None => format!("Could not read input: {}", message),
            },
            Self::InputTooLarge { size, limit } => {
                format!("Input too large: {} bytes (limit: {} bytes)", size, limit)
            }
            Self::UnknownPreset { name } => {
                format!("Unknown preset '{}'", name)
            }
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
            _ => self.to_string(),
        }
    }

    /// Short hint shown under the error message, if one applies
    pub fn tip(&self) -> Option<&'static str> {
        match self {
            Self::InputTooLarge { .. } => Some("Use --max-input-size to raise the input limit"),
            Self::UnknownPreset { .. } => Some("Run 'casewrap presets' to list available presets"),
            Self::PresetFile { .. } => {
                Some("Preset files are TOML with one [[preset]] table per entry")
            }
            _ => None,
        }
    }
}

/// Result type for operations surrounding a conversion
pub type ConversionResult<T> = Result<T, ConversionError>;
