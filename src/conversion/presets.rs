//! Named bundles of style and decoration templates
//!
//! Built-in presets are static data. A TOML preset file can add more or
//! override a built-in with the same name:
//!
//! ```toml
//! [[preset]]
//! name = "rustField"
//! label = "Rust struct field"
//! style = "snake"
//! prefix = "pub "
//! suffix = ": String,"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::conversion::config::{CaseStyle, ConversionConfig, FormatOptions};
use crate::conversion::ConversionResult;
use crate::error::ConversionError;

/// A named preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: String,
    pub label: String,
    pub style: CaseStyle,
    pub options: FormatOptions,
}

impl Preset {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        style: CaseStyle,
        options: FormatOptions,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            style,
            options,
        }
    }

    /// Build the conversion configuration this preset describes
    pub fn to_config(&self) -> ConversionConfig {
        ConversionConfig::new()
            .with_style(self.style)
            .with_options(self.options.clone())
    }
}

/// The presets shipped with the tool
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new(
            "csvBindPositionJava",
            "@CsvBindPosition for Java",
            CaseStyle::Camel,
            FormatOptions::new(
                "private String ",
                ";",
                "\n@CsvBindPosition(position = {INDEX})",
            ),
        ),
        Preset::new(
            "columnJava",
            "@Column for Java",
            CaseStyle::Camel,
            FormatOptions::new(
                "private String ",
                ";",
                "\n@Column(name = \"{ORIGINAL_VALUE}\")",
            ),
        ),
        Preset::new(
            "jsonPropertyJava",
            "@JsonProperty for Java",
            CaseStyle::Camel,
            FormatOptions::new(
                "private String ",
                ";",
                "\n@JsonProperty(\"{CONVERTED_VALUE}\")",
            ),
        ),
    ]
}

/// Look up a built-in preset by name
pub fn find_preset(name: &str) -> Option<Preset> {
    builtin_presets().into_iter().find(|preset| preset.name == name)
}

/// One `[[preset]]` entry of a preset file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetEntry {
    name: String,
    label: Option<String>,
    style: Option<String>,
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
    #[serde(default)]
    prepend: String,
}

impl From<PresetEntry> for Preset {
    fn from(entry: PresetEntry) -> Self {
        let label = entry.label.unwrap_or_else(|| entry.name.clone());
        Preset {
            style: CaseStyle::parse_lenient(entry.style.as_deref()),
            name: entry.name,
            label,
            options: FormatOptions::new(entry.prefix, entry.suffix, entry.prepend),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetFile {
    #[serde(default)]
    preset: Vec<PresetEntry>,
}

/// Built-in presets merged with user-defined ones
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }
}

impl PresetRegistry {
    /// Registry holding only the built-in presets
    pub fn new() -> Self {
        Self::default()
    }

    /// Load built-ins plus the presets defined in a TOML file
    pub fn with_file(path: &Path) -> ConversionResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConversionError::preset_file(path.to_path_buf(), e.to_string()))?;

        let mut registry = Self::new();
        let added = registry.merge_toml(&content)
            .map_err(|message| ConversionError::preset_file(path.to_path_buf(), message))?;
        tracing::info!(path = %path.display(), presets = added, "loaded preset file");

        Ok(registry)
    }

    /// Merge presets from TOML text, returning how many entries were read.
    /// Entries replace existing presets with the same name.
    pub fn merge_toml(&mut self, content: &str) -> Result<usize, String> {
        let file: PresetFile = toml::from_str(content).map_err(|e| e.to_string())?;
        let count = file.preset.len();
        if file.preset.iter().any(|entry| entry.name.trim().is_empty()) {
            return Err("preset name must not be empty".to_string());
        }

        for entry in file.preset {
            self.insert(entry.into());
        }

        Ok(count)
    }

    /// Add a preset, replacing any existing preset with the same name
    pub fn insert(&mut self, preset: Preset) {
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => {
                tracing::debug!(name = %preset.name, "overriding preset");
                *existing = preset;
            }
            None => self.presets.push(preset),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Look up a preset, failing with [`ConversionError::UnknownPreset`]
    pub fn resolve(&self, name: &str) -> ConversionResult<&Preset> {
        self.get(name)
            .ok_or_else(|| ConversionError::unknown_preset(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
