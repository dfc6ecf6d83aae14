//! Run statistics for batch conversion

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters for one batch run, collected by the orchestrator and
/// rendered into the completion summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// CSV files selected by the filter
    pub files_found: usize,
    /// Files converted and written successfully
    pub converted: usize,
    /// Files that failed to read, convert, or write
    pub failed: usize,
    /// Input bytes read across all successful conversions
    pub bytes_read: u64,
    /// Output bytes written across all successful conversions
    pub bytes_written: u64,
    /// Wall-clock duration in milliseconds, rounded to three decimals
    pub elapsed_ms: f64,
    /// Timestamp of when the statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl RunStats {
    /// Create empty statistics for a run over `files_found` candidates.
    pub fn new(files_found: usize) -> Self {
        Self {
            files_found,
            converted: 0,
            failed: 0,
            bytes_read: 0,
            bytes_written: 0,
            elapsed_ms: 0.0,
            collected_at: chrono::Utc::now(),
        }
    }

    pub fn record_success(&mut self, bytes_read: u64, bytes_written: u64) {
        self.converted += 1;
        self.bytes_read += bytes_read;
        self.bytes_written += bytes_written;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Close out the run with its measured wall-clock duration.
    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed_ms = round_millis(elapsed);
        self.collected_at = chrono::Utc::now();
    }

    /// One-line completion summary: `Converted <n> file(s) in <t>ms.`
    pub fn summary_line(&self) -> String {
        let noun = if self.converted == 1 { "file" } else { "files" };
        format!("Converted {} {} in {}ms.", self.converted, noun, self.elapsed_ms)
    }
}

/// Millisecond duration rounded to three decimal places.
fn round_millis(elapsed: Duration) -> f64 {
    let millis = elapsed.as_secs_f64() * 1000.0;
    (millis * 1000.0).round() / 1000.0
}
