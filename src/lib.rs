//! CSV folder to JSON converter
//!
//! A Rust CLI tool that converts every `.csv` file in a directory into
//! a pretty-printed JSON array of row-objects, one output file per
//! input, keyed by the header line.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    convert_source, BatchOptions, BatchReport, BatchRunner, ConversionConfig, JsonData,
    MissingFieldPolicy, RunStats,
};
pub use error::{ConvertError, ConvertResult};
pub use parser::{CsvSource, LineSplitter, NaiveCommaSplitter};

/// Convert CSV text to a JSON array with default configuration
pub fn convert_csv(csv: &str) -> Result<String, ConvertError> {
    let config = ConversionConfig::default();
    convert_csv_with_config(csv, &config)
}

/// Convert CSV text to a JSON array with custom configuration
pub fn convert_csv_with_config(
    csv: &str,
    config: &ConversionConfig,
) -> Result<String, ConvertError> {
    let source = CsvSource::from_string(csv.to_string());
    let result = convert_source(&source, config)?;
    Ok(result.content)
}
