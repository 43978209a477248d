//! Core conversion engine for line restyling

use std::time::Instant;

use crate::conversion::config::{CaseStyle, ConversionConfig, FormatOptions};
use crate::conversion::limits;
use crate::conversion::stats::{ConversionMetadata, LineCounts};
use crate::conversion::ConversionResult;
use crate::formatter::LineFormatter;
use crate::source::TextSource;

/// Convert every non-blank line of `text` and join the rendered segments.
///
/// Blank and whitespace-only lines are dropped before indices are assigned,
/// so `{INDEX}` always runs `0..N` over the surviving lines. The result has
/// no trailing newline and is empty when no line survives.
pub fn convert(text: &str, style: CaseStyle, options: &FormatOptions) -> String {
    let formatter = LineFormatter::new(style, options);
    let mut rendered = String::with_capacity(text.len());

    for (index, line) in surviving_lines(text).enumerate() {
        if index > 0 {
            rendered.push('\n');
        }
        formatter.render_into(&mut rendered, index, line);
    }

    rendered
}

/// Lines of `text` that contain something other than whitespace, in order
pub fn surviving_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.trim().is_empty())
}

/// Converted output together with metadata about the run
#[derive(Debug, Clone)]
pub struct ConvertedText {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl ConvertedText {
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Main conversion engine
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert a block of text
    pub fn convert(&self, text: &str) -> ConvertedText {
        let start_time = Instant::now();

        let content = convert(text, self.config.style, &self.config.options);

        let metadata = ConversionMetadata {
            lines: LineCounts::of(text),
            input_size: text.len() as u64,
            output_size: content.len() as u64,
            processing_time: start_time.elapsed(),
        };
        tracing::debug!(
            style = %self.config.style,
            total_lines = metadata.lines.total,
            converted_lines = metadata.lines.non_empty,
            "converted text"
        );

        ConvertedText::new(content, metadata)
    }

    /// Read a source, refusing files larger than `max_input_size`, and convert it
    pub fn convert_from_source(
        &self,
        source: &TextSource,
        max_input_size: u64,
    ) -> ConversionResult<ConvertedText> {
        limits::check_source_size_before_read(source, max_input_size)?;

        let text = source.read_content()?;
        tracing::trace!(source = %source.description(), bytes = text.len(), "read source");

        Ok(self.convert(&text))
    }
}
