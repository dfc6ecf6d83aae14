//! Best-effort field literal parsing.
//!
//! Each raw CSV field is tried as one strict JSON literal; anything
//! that does not parse stays a plain string. The fallback is an
//! expected case, never an error.

use serde_json::Value;

/// Outcome of parsing a single raw field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The field text parsed as a strict JSON literal
    /// (`123` -> number, `true` -> bool, `null` -> null, `"x"` -> string).
    Literal(Value),
    /// The field text is kept verbatim (e.g. `hello`).
    Raw(String),
}

impl FieldValue {
    /// Collapse into the JSON value stored in the row-object.
    pub fn into_value(self) -> Value {
        match self {
            FieldValue::Literal(value) => value,
            FieldValue::Raw(text) => Value::String(text),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, FieldValue::Literal(_))
    }
}

/// Parse one raw field into either a JSON literal or the raw string.
pub fn parse_field(raw: &str) -> FieldValue {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => FieldValue::Literal(value),
        Err(_) => FieldValue::Raw(raw.to_string()),
    }
}
