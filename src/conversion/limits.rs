use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::source::TextSource;

/// Default ceiling for a single input source (10MB)
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 10 * 1024 * 1024;

/// Check the source size before attempting to read it.
/// Sources of unknown size (stdin) are let through.
pub fn check_source_size_before_read(source: &TextSource, limit: u64) -> ConversionResult<()> {
    if let Some(size) = source.estimated_size() {
        if size > limit {
            return Err(ConversionError::InputTooLarge { size, limit });
        }
    }

    Ok(())
}

/// Parse a size string (e.g., "512KB", "10MB", "1GB", "2048")
pub fn parse_size(limit: &str) -> ConversionResult<u64> {
    let limit_str = limit.trim().to_uppercase();
    let invalid = || ConversionError::configuration(format!("Invalid input size limit: {}", limit_str));

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        (size, 1.0)
    } else {
        // Assume bytes
        (limit_str.as_str(), 1.0)
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }

    Ok((value * multiplier) as u64)
}
