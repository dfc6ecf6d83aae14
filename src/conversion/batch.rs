//! Batch orchestration: one sequential pass over the input directory.
//!
//! Each CSV is fully converted and written before the next begins. A
//! failing file is logged and skipped; only a directory listing failure
//! aborts the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::path_mapping::map_input_to_output;
use crate::cli::CliUtils;
use crate::conversion::config::ConversionConfig;
use crate::conversion::engine::convert_source;
use crate::conversion::stats::RunStats;
use crate::error::{ConvertError, ConvertResult};
use crate::parser::directory::find_csv_files;
use crate::parser::CsvSource;

/// Knobs for a batch run that are not per-file conversion settings.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Descend into subdirectories (default: one level only)
    pub recursive: bool,
    /// Suppress progress output
    pub quiet: bool,
    /// Print a line per converted file
    pub verbose: bool,
}

/// Report returned to the caller after a completed run.
#[derive(Debug)]
pub struct BatchReport {
    pub stats: RunStats,
    /// Files that failed, with the error that stopped each one
    pub failures: Vec<(PathBuf, ConvertError)>,
}

/// Sequential driver for directory conversion.
pub struct BatchRunner {
    config: ConversionConfig,
    options: BatchOptions,
}

impl BatchRunner {
    pub fn new(config: ConversionConfig, options: BatchOptions) -> Self {
        Self { config, options }
    }

    /// Convert every CSV file in `input_dir` into `output_dir`.
    ///
    /// Timing is captured here and returned in the report; there is no
    /// module-level clock state.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> ConvertResult<BatchReport> {
        let started = Instant::now();

        let csv_files = find_csv_files(input_dir, self.options.recursive)
            .map_err(|e| ConvertError::list_directory(input_dir.to_path_buf(), e))?;

        if self.options.verbose && !self.options.quiet {
            println!("Found {} CSV file(s) in {}", csv_files.len(), input_dir.display());
        }

        let mut stats = RunStats::new(csv_files.len());
        let mut failures = Vec::new();

        let progress = (!self.options.quiet && csv_files.len() > 1)
            .then(|| CliUtils::create_progress_bar(csv_files.len() as u64));

        for csv_file in &csv_files {
            let output_file = map_input_to_output(input_dir, csv_file, output_dir, "json");

            match self.convert_one(csv_file, &output_file) {
                Ok(bytes_written) => {
                    stats.record_success(input_size(csv_file), bytes_written);
                    if self.options.verbose && !self.options.quiet {
                        CliUtils::show_success(
                            &format!(
                                "{} -> {}",
                                display_name(csv_file),
                                output_file.display()
                            ),
                            false,
                        );
                    }
                }
                Err(error) => {
                    stats.record_failure();
                    CliUtils::show_error(&format!(
                        "Failed to convert {}",
                        display_name(csv_file)
                    ));
                    eprintln!("  {}", error);
                    failures.push((csv_file.clone(), error));
                }
            }

            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        stats.finish(started.elapsed());
        Ok(BatchReport { stats, failures })
    }

    /// Parse then write one file. Nothing is written if parsing fails,
    /// so a failed conversion leaves no new output artifact.
    fn convert_one(&self, input: &Path, output: &Path) -> ConvertResult<u64> {
        let source = CsvSource::from_file(input.to_path_buf());
        let data = convert_source(&source, &self.config)?;
        write_output(output, &data.content)?;
        Ok(data.metadata.output_size)
    }
}

/// Write the serialized text, truncating silently if the file exists.
///
/// The output directory is expected to exist already; it is never
/// created here, and there is no temp-file or atomic-rename step.
pub fn write_output(path: &Path, content: &str) -> ConvertResult<()> {
    std::fs::write(path, content).map_err(|e| ConvertError::write(path.to_path_buf(), e))
}

fn input_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
