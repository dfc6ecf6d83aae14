//! CSV to JSON conversion module
//!
//! This module contains the core conversion logic, configuration,
//! batch orchestration, and run statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod stats;

pub use batch::{BatchOptions, BatchReport, BatchRunner};
pub use config::{ConversionConfig, MissingFieldPolicy};
pub use engine::{convert_source, convert_with_splitter, JsonData};
pub use stats::RunStats;
