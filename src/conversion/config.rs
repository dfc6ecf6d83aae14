//! Conversion configuration

/// Policy for data lines whose field count differs from the header line.
///
/// The original behavior was ambiguous; both policies here drop columns
/// beyond the header count, and they differ only in how short rows are
/// completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Headers with no column are left out of the row-object entirely.
    #[default]
    Omit,
    /// Headers with no column map to JSON `null`.
    PadNull,
}

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Spaces per indentation level in pretty output (0-8)
    pub indent_size: u8,
    /// Pretty-print output (compact when false)
    pub pretty: bool,
    /// How to complete rows shorter than the header line
    pub missing_fields: MissingFieldPolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            pretty: true,
            missing_fields: MissingFieldPolicy::Omit,
        }
    }
}

impl ConversionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_size(mut self, indent_size: u8) -> Self {
        self.indent_size = indent_size;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_missing_fields(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_fields = policy;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err(format!(
                "Indent size must be between 0 and 8, got {}",
                self.indent_size
            ));
        }
        Ok(())
    }
}
