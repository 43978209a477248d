use crate::conversion::engine::{ConversionEngine, ConvertedText};
use crate::conversion::stats::ConversionStatistics;
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::ConversionError;
use crate::source::TextSource;

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Statistics over the sources that were converted and handled
    pub statistics: ConversionStatistics,
    /// Sources skipped under continue-on-error, with the reason
    pub skipped: Vec<(TextSource, ConversionError)>,
}

/// Batch convert multiple TextSource inputs, passing each result to `handle`.
/// Optionally continue on errors, including errors returned by `handle`.
pub fn convert_batch_sources<F>(
    sources: Vec<TextSource>,
    config: &ConversionConfig,
    max_input_size: u64,
    continue_on_error: bool,
    mut handle: F,
) -> ConversionResult<BatchReport>
where
    F: FnMut(&TextSource, &ConvertedText) -> ConversionResult<()>,
{
    let engine = ConversionEngine::new(config.clone());
    let mut report = BatchReport::default();

    for src in sources {
        let result = engine
            .convert_from_source(&src, max_input_size)
            .and_then(|converted| {
                handle(&src, &converted)?;
                Ok(converted)
            });

        match result {
            Ok(converted) => report
                .statistics
                .combine(&ConversionStatistics::for_conversion(&converted.metadata)),
            Err(e) => {
                if continue_on_error {
                    tracing::warn!(source = %src.description(), "skipping source: {}", e.user_message());
                    report.skipped.push((src, e));
                } else {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}
