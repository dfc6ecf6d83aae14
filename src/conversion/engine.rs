//! Core CSV to JSON conversion logic.
//!
//! The engine streams a CSV source line by line: the first line is the
//! header line, every later line is split by the line-splitting
//! strategy and zipped positionally against the headers into an
//! ordered row-object. The collected rows serialize as one JSON array.

use std::io::BufRead;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::conversion::config::{ConversionConfig, MissingFieldPolicy};
use crate::error::{ConvertError, ConvertResult};
use crate::parser::fields::parse_field;
use crate::parser::{CsvSource, LineSplitter, NaiveCommaSplitter};

/// Result of one conversion
#[derive(Debug, Clone)]
pub struct JsonData {
    /// Serialized JSON array of row-objects
    pub content: String,
    /// Conversion metadata
    pub metadata: ConversionMetadata,
}

/// Metadata about a completed conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionMetadata {
    /// Number of headers on the first line (0 for an empty input)
    pub header_count: usize,
    /// Number of data rows converted
    pub row_count: usize,
    /// Size of the serialized output in bytes
    pub output_size: u64,
}

/// Convert a CSV source using the default naive comma splitter.
pub fn convert_source(source: &CsvSource, config: &ConversionConfig) -> ConvertResult<JsonData> {
    convert_with_splitter(source, &NaiveCommaSplitter, config)
}

/// Convert a CSV source with an explicit line-splitting strategy.
pub fn convert_with_splitter<S: LineSplitter>(
    source: &CsvSource,
    splitter: &S,
    config: &ConversionConfig,
) -> ConvertResult<JsonData> {
    let reader = source.open()?;
    let label = source.label();

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Map<String, Value>> = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| ConvertError::read(label.clone(), e))?;
        match &headers {
            None => {
                headers = Some(
                    splitter
                        .split(&line)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                );
            }
            Some(header_list) => {
                let columns = splitter.split(&line);
                rows.push(build_row(header_list, &columns, config.missing_fields));
            }
        }
    }

    let content = serialize_rows(&rows, config)?;
    let metadata = ConversionMetadata {
        header_count: headers.map_or(0, |h| h.len()),
        row_count: rows.len(),
        output_size: content.len() as u64,
    };

    Ok(JsonData { content, metadata })
}

/// Zip one data line against the headers into an ordered row-object.
///
/// Columns beyond the header count are dropped; duplicate headers
/// overwrite the earlier value in place.
fn build_row(
    headers: &[String],
    columns: &[&str],
    policy: MissingFieldPolicy,
) -> Map<String, Value> {
    let mut row = Map::new();

    for (index, header) in headers.iter().enumerate() {
        match columns.get(index) {
            Some(raw) => {
                row.insert(header.clone(), parse_field(raw).into_value());
            }
            None => {
                if policy == MissingFieldPolicy::PadNull {
                    row.insert(header.clone(), Value::Null);
                }
            }
        }
    }

    row
}

/// Serialize the row collection as a JSON array.
fn serialize_rows(rows: &[Map<String, Value>], config: &ConversionConfig) -> ConvertResult<String> {
    if !config.pretty {
        return serde_json::to_string(rows).map_err(|e| ConvertError::serialize(e.to_string()));
    }

    let indent = " ".repeat(config.indent_size as usize);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    rows.serialize(&mut serializer)
        .map_err(|e| ConvertError::serialize(e.to_string()))?;

    String::from_utf8(buffer).map_err(|e| ConvertError::serialize(e.to_string()))
}
