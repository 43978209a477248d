//! Line counts and conversion statistics

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Number of lines in a block of input text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    /// All `\n`-separated lines, blank ones included
    pub total: usize,
    /// Lines containing something other than whitespace
    pub non_empty: usize,
}

impl LineCounts {
    /// Count the lines of `text`. Empty text still counts as one line.
    pub fn of(text: &str) -> Self {
        let mut counts = Self::default();
        for line in text.split('\n') {
            counts.total += 1;
            if !line.trim().is_empty() {
                counts.non_empty += 1;
            }
        }
        counts
    }

    /// Lines that were dropped because they were blank
    pub fn blank(&self) -> usize {
        self.total.saturating_sub(self.non_empty)
    }
}

impl fmt::Display for LineCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Non-empty lines: {}, Total lines: {}",
            self.non_empty, self.total
        )
    }
}

/// Metadata about a single conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionMetadata {
    pub lines: LineCounts,
    pub input_size: u64,
    pub output_size: u64,
    pub processing_time: Duration,
}

/// Statistics aggregated over one or more conversions
#[derive(Debug, Clone, Default)]
pub struct ConversionStatistics {
    /// Number of sources converted
    pub source_count: usize,
    /// Input lines seen, blank lines included
    pub total_lines: usize,
    /// Lines that produced an output segment
    pub converted_lines: usize,
    /// Input size in bytes
    pub input_size_bytes: u64,
    /// Output size in bytes
    pub output_size_bytes: u64,
    /// Processing time in microseconds
    pub processing_time_us: u64,
}

impl ConversionStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a single conversion
    pub fn for_conversion(metadata: &ConversionMetadata) -> Self {
        Self {
            source_count: 1,
            total_lines: metadata.lines.total,
            converted_lines: metadata.lines.non_empty,
            input_size_bytes: metadata.input_size,
            output_size_bytes: metadata.output_size,
            processing_time_us: metadata.processing_time.as_micros() as u64,
        }
    }

    /// Combine statistics from multiple operations
    pub fn combine(&mut self, other: &Self) {
        self.source_count += other.source_count;
        self.total_lines += other.total_lines;
        self.converted_lines += other.converted_lines;
        self.input_size_bytes += other.input_size_bytes;
        self.output_size_bytes += other.output_size_bytes;
        self.processing_time_us += other.processing_time_us;
    }

    /// Lines dropped as blank across all sources
    pub fn skipped_lines(&self) -> usize {
        self.total_lines.saturating_sub(self.converted_lines)
    }

    /// Human-readable multi-line summary
    pub fn summary(&self) -> String {
        format!(
            "Conversion Statistics:\n\
             Sources: {}\n\
             Lines converted: {} (skipped {} blank of {})\n\
             Input size: {} bytes\n\
             Output size: {} bytes\n\
             Processing time: {}µs",
            self.source_count,
            self.converted_lines,
            self.skipped_lines(),
            self.total_lines,
            self.input_size_bytes,
            self.output_size_bytes,
            self.processing_time_us,
        )
    }
}
