//! Input sources for conversion

pub mod directory;
pub mod filter;

use crate::error::{ConversionError, ConversionResult};
use std::io::Read;
use std::path::PathBuf;

/// Where input text comes from
#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    /// Literal text given on the command line
    String(String),
    /// Single text file
    File(PathBuf),
    /// Directory containing text files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl TextSource {
    /// Classify a CLI input argument: an existing file or directory wins,
    /// anything else is treated as literal text.
    pub fn from_arg(input: &str) -> Self {
        let path = PathBuf::from(input);
        if path.is_file() {
            TextSource::File(path)
        } else if path.is_dir() {
            TextSource::Directory(path)
        } else {
            tracing::debug!("input is not an existing path, treating it as text");
            TextSource::String(input.to_string())
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            TextSource::String(_) => "string input".to_string(),
            TextSource::File(path) => format!("file: {}", path.display()),
            TextSource::Directory(path) => format!("directory: {}", path.display()),
            TextSource::Stdin => "standard input".to_string(),
        }
    }

    /// Get the size of the source in bytes (if known before reading)
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            TextSource::String(s) => Some(s.len() as u64),
            TextSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            TextSource::Directory(_) => None,
            TextSource::Stdin => None,
        }
    }

    /// Read the whole source as text. Content is returned verbatim.
    pub fn read_content(&self) -> ConversionResult<String> {
        match self {
            TextSource::String(content) => Ok(content.clone()),
            TextSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| ConversionError::read(e.to_string(), Some(path.clone()))),
            TextSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| ConversionError::read(e.to_string(), None))?;
                Ok(buffer)
            }
            TextSource::Directory(path) => Err(ConversionError::read(
                "cannot read a directory as text".to_string(),
                Some(path.clone()),
            )),
        }
    }
}
