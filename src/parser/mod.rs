//! CSV source handling and line splitting

pub mod directory;
pub mod fields;
pub mod filter;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::PathBuf;

use crate::error::{ConvertError, ConvertResult};

/// Source for a single CSV conversion.
#[derive(Debug, Clone)]
pub enum CsvSource {
    /// CSV file on disk
    File(PathBuf),
    /// Raw CSV text (tests, library use)
    String(String),
}

impl CsvSource {
    /// Create from file path
    pub fn from_file(path: PathBuf) -> Self {
        Self::File(path)
    }

    /// Create from raw CSV text
    pub fn from_string(content: String) -> Self {
        Self::String(content)
    }

    /// Open the source for line-oriented streaming.
    pub fn open(&self) -> ConvertResult<Box<dyn BufRead>> {
        match self {
            CsvSource::File(path) => {
                let file = File::open(path)
                    .map_err(|e| ConvertError::read(path.clone(), e))?;
                Ok(Box::new(BufReader::new(file)))
            }
            CsvSource::String(content) => Ok(Box::new(Cursor::new(content.clone()))),
        }
    }

    /// Path used when attaching error context to stream failures.
    pub fn label(&self) -> PathBuf {
        match self {
            CsvSource::File(path) => path.clone(),
            CsvSource::String(_) => PathBuf::from("<string>"),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CsvSource::File(path) => format!("file: {}", path.display()),
            CsvSource::String(_) => "string input".to_string(),
        }
    }
}

/// Replaceable strategy for splitting one CSV line into fields.
///
/// The default implementation is deliberately naive; a proper dialect
/// parser (quoting, escaping, embedded delimiters) can be substituted
/// without touching the rest of the pipeline.
pub trait LineSplitter {
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str>;
}

/// Naive comma split with no trimming, quoting, or escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveCommaSplitter;

impl LineSplitter for NaiveCommaSplitter {
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        line.split(',').collect()
    }
}
