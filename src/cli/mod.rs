//! Command-line interface module

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::conversion::limits::{parse_size, DEFAULT_MAX_INPUT_SIZE};
use crate::conversion::{CaseStyle, ConversionConfig, ConversionResult, PresetRegistry};
use crate::error::ConversionError;
use crate::source::TextSource;

pub mod logging;
pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "casewrap")]
#[command(about = "Restyle the casing of text lines and wrap them in templated decorations")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input text, file, or directory
    #[arg()]
    pub input: Option<String>,

    /// Output file path, or output directory for directory input (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read text from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Case style applied to each line (default: none)
    #[arg(short, long, value_enum)]
    pub style: Option<Style>,

    /// Text placed before each converted line
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Text placed after each converted line
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Block emitted on its own line above each converted line
    #[arg(long, allow_hyphen_values = true)]
    pub prepend: Option<String>,

    /// Start from a named preset; explicit flags override its fields
    #[arg(short, long)]
    pub preset: Option<String>,

    /// TOML file with additional presets
    #[arg(long)]
    pub presets_file: Option<PathBuf>,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Extension of the files picked up from an input directory
    #[arg(long, default_value = "txt")]
    pub input_extension: String,

    /// Extension given to files written to the output directory
    #[arg(long, default_value = "out")]
    pub extension: String,

    /// Largest input accepted per source (e.g., 512KB, default: 10MB)
    #[arg(long)]
    pub max_input_size: Option<String>,

    /// Print conversion statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Fail when the templates contain suspicious placeholders
    #[arg(long)]
    pub check: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Subcommands for advanced operations
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List available presets
    Presets {
        /// Print presets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count total and non-empty lines without converting
    Count {
        /// Input text or file
        input: Option<String>,

        /// Print counts as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Case styles for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    None,
    #[value(alias = "camelcase")]
    Camel,
    #[value(alias = "snake_case")]
    Snake,
    #[value(alias = "kebab-case")]
    Kebab,
}

impl From<Style> for CaseStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::None => CaseStyle::None,
            Style::Camel => CaseStyle::Camel,
            Style::Snake => CaseStyle::Snake,
            Style::Kebab => CaseStyle::Kebab,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub presets: PresetRegistry,
    pub conversion_config: ConversionConfig,
    pub max_input_size: u64,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let presets = match &args.presets_file {
            Some(path) => PresetRegistry::with_file(path)?,
            None => PresetRegistry::new(),
        };
        let conversion_config = Self::create_conversion_config(&args, &presets)?;
        let max_input_size = match &args.max_input_size {
            Some(limit) => parse_size(limit)?,
            None => DEFAULT_MAX_INPUT_SIZE,
        };

        Ok(Self {
            args,
            presets,
            conversion_config,
            max_input_size,
        })
    }

    /// Flags win over the selected preset, which wins over the defaults
    fn create_conversion_config(
        args: &Args,
        presets: &PresetRegistry,
    ) -> ConversionResult<ConversionConfig> {
        let mut config = match &args.preset {
            Some(name) => presets.resolve(name)?.to_config(),
            None => ConversionConfig::default(),
        };

        if let Some(style) = args.style {
            config = config.with_style(style.into());
        }
        if let Some(prefix) = &args.prefix {
            config = config.with_prefix(prefix.as_str());
        }
        if let Some(suffix) = &args.suffix {
            config = config.with_suffix(suffix.as_str());
        }
        if let Some(prepend) = &args.prepend {
            config = config.with_prepend(prepend.as_str());
        }

        Ok(config)
    }

    /// Resolve where the text to convert comes from
    pub fn input_source(&self) -> ConversionResult<TextSource> {
        if self.args.stdin {
            Ok(TextSource::Stdin)
        } else if let Some(input) = &self.args.input {
            Ok(TextSource::from_arg(input))
        } else {
            Err(ConversionError::configuration(
                "No input provided. Use --stdin or provide an input".to_string(),
            ))
        }
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if template lint issues should abort the run
    pub fn is_strict_check(&self) -> bool {
        self.args.check
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64, quiet: bool) -> indicatif::ProgressBar {
        if quiet {
            return indicatif::ProgressBar::hidden();
        }

        let pb = indicatif::ProgressBar::new(total);
        if let Ok(style) = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", console::style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", console::style("✗").red(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", console::style("⚠").yellow(), message);
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    if let Some(tip) = error.tip() {
        eprintln!("\nTip: {}", tip);
    }

    // Show usage hint
    eprintln!("\nTry 'casewrap --help' for usage information.");
}

/// Command execution result
pub type CliResult<T> = Result<T, ConversionError>;
