//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

use crate::conversion::{BatchOptions, ConversionConfig, MissingFieldPolicy};
use crate::error::{ConvertError, ConvertResult};

pub mod path_mapping;

/// Main CLI arguments
///
/// The defaults reproduce the fixed layout of the original pipeline:
/// with no arguments, `csvconv` reads `./files` and writes `./outputs`.
#[derive(Parser, Debug, Clone)]
#[command(name = "csvconv")]
#[command(about = "Convert a folder of CSV files into JSON row-object arrays")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input directory containing .csv files
    #[arg(default_value = "files")]
    pub input: PathBuf,

    /// Output directory for .json files (must already exist)
    #[arg(short, long, default_value = "outputs")]
    pub output: PathBuf,

    /// Recursively process subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// Spaces per indentation level (0-8, default: 2)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Disable pretty-printing
    #[arg(long)]
    pub plain: bool,

    /// Pad short rows with null instead of omitting the missing keys
    #[arg(long)]
    pub pad_missing: bool,

    /// Output run statistics as JSON after the summary
    #[arg(long)]
    pub stats: bool,

    /// Print a line per converted file
    #[arg(long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConvertResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConvertResult<ConversionConfig> {
        let missing_fields = if args.pad_missing {
            MissingFieldPolicy::PadNull
        } else {
            MissingFieldPolicy::Omit
        };

        let config = ConversionConfig {
            indent_size: args.indent.unwrap_or(2),
            pretty: !args.plain,
            missing_fields,
        };

        config
            .validate()
            .map_err(ConvertError::configuration)?;

        Ok(config)
    }

    /// Batch options derived from the run-level flags
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            recursive: self.args.recursive,
            quiet: self.args.quiet,
            verbose: self.args.verbose,
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConvertError) {
    CliUtils::show_error(&error.user_message());

    if matches!(error, ConvertError::ListDirectory { .. }) {
        eprintln!("\nTip: the input directory must exist and be readable");
    } else if matches!(error, ConvertError::Write { .. }) {
        eprintln!("\nTip: the output directory is not created automatically");
    }

    eprintln!("\nTry 'csvconv --help' for usage information.");
}
