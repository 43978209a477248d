//! Line conversion module
//!
//! This module contains the conversion engine, its configuration, presets
//! and statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod limits;
pub mod presets;
pub mod stats;

pub use batch::{convert_batch_sources, BatchReport};
pub use config::{CaseStyle, ConversionConfig, FormatOptions};

pub use engine::{convert, ConversionEngine, ConvertedText};
pub use presets::{builtin_presets, find_preset, Preset, PresetRegistry};
pub use stats::{ConversionMetadata, ConversionStatistics, LineCounts};

/// Result type for operations surrounding a conversion
pub use crate::error::ConversionResult;
