//! Configuration options for line conversion

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target casing applied to the content of every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// Leave the line untouched
    #[default]
    None,
    /// camelCase
    Camel,
    /// SNAKE_CASE (upper-cased)
    Snake,
    /// kebab-case
    Kebab,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 4] = [
        CaseStyle::None,
        CaseStyle::Camel,
        CaseStyle::Snake,
        CaseStyle::Kebab,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::None => "none",
            CaseStyle::Camel => "camel",
            CaseStyle::Snake => "snake",
            CaseStyle::Kebab => "kebab",
        }
    }

    /// Human-readable label, written in the style itself
    pub fn label(&self) -> &'static str {
        match self {
            CaseStyle::None => "None",
            CaseStyle::Camel => "camelCase",
            CaseStyle::Snake => "SNAKE_CASE",
            CaseStyle::Kebab => "kebab-case",
        }
    }

    /// Resolve a style name, falling back to [`CaseStyle::None`] when the
    /// value is absent or unrecognized.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(CaseStyle::None),
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "snake" | "snake_case" => Ok(CaseStyle::Snake),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            other => Err(format!(
                "Invalid style '{}'. Use 'none', 'camel', 'snake', or 'kebab'",
                other
            )),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoration templates wrapped around every converted line.
///
/// Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Text placed before the converted line
    pub prefix: String,
    /// Text placed after the converted line
    pub suffix: String,
    /// Block emitted on its own line(s) above the line
    pub prepend: String,
}

impl FormatOptions {
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        prepend: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            prepend: prepend.into(),
        }
    }

    /// Iterate over the decoration fields with their names
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("prefix", self.prefix.as_str()),
            ("suffix", self.suffix.as_str()),
            ("prepend", self.prepend.as_str()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty() && self.prepend.is_empty()
    }
}

/// Conversion configuration options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Casing applied to each line
    pub style: CaseStyle,
    /// Prefix, suffix and prepend templates
    pub options: FormatOptions,
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the case style
    pub fn with_style(mut self, style: CaseStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace all decoration templates at once
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the prefix template
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = prefix.into();
        self
    }

    /// Set the suffix template
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.options.suffix = suffix.into();
        self
    }

    /// Set the prepend template
    pub fn with_prepend(mut self, prepend: impl Into<String>) -> Self {
        self.options.prepend = prepend.into();
        self
    }
}
