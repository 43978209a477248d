//! casewrap
//!
//! Restyles the casing of every non-blank line of a text block (camelCase,
//! SNAKE_CASE, kebab-case or unchanged) and wraps each line in prefix, suffix
//! and prepend templates. Templates may contain the placeholders `{INDEX}`,
//! `{ORIGINAL_VALUE}` and `{CONVERTED_VALUE}`, filled in per line.
//!
//! ```
//! use casewrap::{convert, CaseStyle, FormatOptions};
//!
//! let options = FormatOptions::new("private String ", ";", "// {INDEX}");
//! assert_eq!(
//!     convert("first name\n\nlast name", CaseStyle::Camel, &options),
//!     "// 0\nprivate String firstName;\n// 1\nprivate String lastName;"
//! );
//! ```

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod source;
pub mod validation;

// Re-export commonly used types
pub use conversion::{
    convert, CaseStyle, ConversionConfig, ConversionEngine, ConvertedText, FormatOptions,
    LineCounts, Preset, PresetRegistry,
};
pub use error::{ConversionError, ConversionResult};
pub use formatter::{substitute, transform};
pub use source::TextSource;

/// Convert text using a style name and optional templates.
///
/// Unknown or missing style names fall back to leaving lines unchanged, and
/// missing templates are treated as empty.
pub fn convert_with(
    text: &str,
    style: Option<&str>,
    prefix: Option<&str>,
    suffix: Option<&str>,
    prepend: Option<&str>,
) -> String {
    let options = FormatOptions::new(
        prefix.unwrap_or_default(),
        suffix.unwrap_or_default(),
        prepend.unwrap_or_default(),
    );
    convert(text, CaseStyle::parse_lenient(style), &options)
}
