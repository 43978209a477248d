use clap::Parser;
use std::path::{Path, PathBuf};

use anyhow::Result;

use casewrap::cli::logging::init_logging;
use casewrap::cli::path_mapping::map_input_to_output;
use casewrap::cli::{handle_error, Args, CliConfig, CliResult, CliUtils, Commands};
use casewrap::conversion::{
    convert_batch_sources, ConversionEngine, ConversionStatistics, ConvertedText, LineCounts,
    PresetRegistry,
};
use casewrap::error::ConversionError;
use casewrap::source::directory::find_text_files;
use casewrap::source::TextSource;
use casewrap::validation::lint_options;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet)?;

    let outcome = CliConfig::from_args(args).and_then(|config| run(&config));
    if let Err(error) = outcome {
        handle_error(&error);
        std::process::exit(1);
    }

    Ok(())
}

fn run(config: &CliConfig) -> CliResult<()> {
    match &config.args.command {
        Some(Commands::Presets { json }) => list_presets(&config.presets, *json),
        Some(Commands::Count { input, json }) => count_lines(config, input.as_deref(), *json),
        None => handle_conversion(config),
    }
}

fn handle_conversion(config: &CliConfig) -> CliResult<()> {
    check_templates(config)?;

    match config.input_source()? {
        TextSource::Directory(dir) => convert_directory(&dir, config),
        source => convert_source(&source, config),
    }
}

/// Report template lint issues; with --check they abort the run
fn check_templates(config: &CliConfig) -> CliResult<()> {
    let report = lint_options(&config.conversion_config.options);
    for issue in &report.issues {
        tracing::warn!("{}", issue);
    }

    if config.is_strict_check() && !report.is_clean() {
        return Err(ConversionError::configuration(format!(
            "template check failed with {} issue(s)",
            report.len()
        )));
    }

    Ok(())
}

fn convert_source(source: &TextSource, config: &CliConfig) -> CliResult<()> {
    let engine = ConversionEngine::new(config.conversion_config.clone());
    let converted = engine.convert_from_source(source, config.max_input_size)?;

    if let Some(output_path) = &config.args.output {
        write_output(output_path, &converted)?;
        CliUtils::show_success(
            &format!("Converted to: {}", config.output_description()),
            config.is_quiet(),
        );
    } else if !converted.is_empty() {
        println!("{}", converted.content);
    }

    if config.want_stats() {
        output_statistics(&ConversionStatistics::for_conversion(&converted.metadata), config.is_quiet());
    }

    Ok(())
}

fn write_output(output_path: &Path, converted: &ConvertedText) -> CliResult<()> {
    let io_error = |e: std::io::Error| {
        ConversionError::other(anyhow::anyhow!(
            "Failed to write {}: {}",
            output_path.display(),
            e
        ))
    };

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(output_path, &converted.content).map_err(io_error)?;

    Ok(())
}

fn convert_directory(input_dir: &PathBuf, config: &CliConfig) -> CliResult<()> {
    let output_dir = config.args.output.as_ref().ok_or_else(|| {
        ConversionError::configuration(
            "Output directory required for directory conversion".to_string(),
        )
    })?;

    let files = find_text_files(input_dir, &config.args.input_extension, config.args.recursive)
        .map_err(|e| ConversionError::read(e.to_string(), Some(input_dir.clone())))?;

    if files.is_empty() {
        CliUtils::show_warning(
            &format!(
                "No .{} files found in {}",
                config.args.input_extension,
                input_dir.display()
            ),
            config.is_quiet(),
        );
        return Ok(());
    }
    tracing::info!(count = files.len(), dir = %input_dir.display(), "converting directory");

    let progress = CliUtils::create_progress_bar(files.len() as u64, config.is_quiet());
    let sources = files.into_iter().map(TextSource::File).collect();

    let report = convert_batch_sources(
        sources,
        &config.conversion_config,
        config.max_input_size,
        config.continue_on_error(),
        |source, converted| {
            progress.inc(1);
            let TextSource::File(file) = source else {
                return Ok(());
            };

            let output_file =
                map_input_to_output(input_dir, file, output_dir, &config.args.extension);
            write_output(&output_file, converted)?;
            progress.suspend(|| {
                CliUtils::show_success(
                    &format!(
                        "{} -> {}",
                        relative_path(input_dir, file).display(),
                        output_file.display()
                    ),
                    config.is_quiet(),
                )
            });
            Ok(())
        },
    );
    progress.finish_and_clear();
    let report = report?;

    for (source, error) in &report.skipped {
        let name = match source {
            TextSource::File(file) => relative_path(input_dir, file).display().to_string(),
            other => other.description(),
        };
        CliUtils::show_warning(
            &format!("Skipping {}: {}", name, error.user_message()),
            false,
        );
    }

    if config.want_stats() {
        output_statistics(&report.statistics, config.is_quiet());
    }

    Ok(())
}

fn relative_path<'a>(base: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

fn list_presets(presets: &PresetRegistry, json: bool) -> CliResult<()> {
    if json {
        let all: Vec<_> = presets.iter().collect();
        let rendered = serde_json::to_string_pretty(&all)
            .map_err(|e| ConversionError::other(e.into()))?;
        println!("{}", rendered);
        return Ok(());
    }

    for preset in presets.iter() {
        println!(
            "{:<24} {} ({})",
            preset.name,
            preset.label,
            preset.style.label()
        );
    }

    Ok(())
}

fn count_lines(config: &CliConfig, input: Option<&str>, json: bool) -> CliResult<()> {
    let source = match input {
        _ if config.args.stdin => TextSource::Stdin,
        Some(input) => TextSource::from_arg(input),
        None => config.input_source()?,
    };

    casewrap::conversion::limits::check_source_size_before_read(&source, config.max_input_size)?;
    let text = source.read_content()?;
    let counts = LineCounts::of(&text);
    if json {
        let rendered =
            serde_json::to_string(&counts).map_err(|e| ConversionError::other(e.into()))?;
        println!("{}", rendered);
    } else {
        println!("{}", counts);
    }

    Ok(())
}

fn output_statistics(statistics: &ConversionStatistics, quiet: bool) {
    if quiet {
        return;
    }
    eprintln!("\n{}", statistics.summary());
}
