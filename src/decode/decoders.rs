//! Page decoder implementations

use crate::error::{Error, Result};
use crate::pagination::Page;
use serde_json::Value;

/// Default location of the record array in a page body
pub const DEFAULT_RECORDS_PATH: &str = "results";

/// Default location of the next-page reference in a page body
pub const DEFAULT_NEXT_PATH: &str = "links.next";

/// Trait for decoding page response bodies
pub trait PageDecoder: Send + Sync {
    /// Decode a raw body into records and the next-page reference
    fn decode(&self, body: &[u8]) -> Result<Page<Value>>;
}

// ============================================================================
// JSON Page Decoder
// ============================================================================

/// JSON decoder reading records and the next link by path
#[derive(Debug, Clone)]
pub struct JsonPageDecoder {
    /// Path to the record array; `None` means the body itself is the array
    records_path: Option<String>,
    /// Path to the next-page reference
    next_path: String,
}

impl Default for JsonPageDecoder {
    fn default() -> Self {
        Self {
            records_path: Some(DEFAULT_RECORDS_PATH.to_string()),
            next_path: DEFAULT_NEXT_PATH.to_string(),
        }
    }
}

impl JsonPageDecoder {
    /// Create a decoder with the default `results` / `links.next` layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with custom paths
    pub fn with_paths(records_path: impl Into<String>, next_path: impl Into<String>) -> Self {
        let records_path = records_path.into();
        Self {
            records_path: (!records_path.is_empty()).then_some(records_path),
            next_path: next_path.into(),
        }
    }

    /// Records path in use
    pub fn records_path(&self) -> Option<&str> {
        self.records_path.as_deref()
    }

    /// Next link path in use
    pub fn next_path(&self) -> &str {
        &self.next_path
    }

    fn extract_records(&self, value: &Value) -> Result<Vec<Value>> {
        let target = match &self.records_path {
            Some(path) => match extract_simple_path(value, path) {
                Some(v) => v,
                // Missing records field: treat as an empty page
                None => return Ok(Vec::new()),
            },
            None => value,
        };

        match target {
            Value::Array(arr) => Ok(arr.clone()),
            Value::Null => Ok(Vec::new()),
            other => Err(Error::decode(format!(
                "Expected an array of records at '{}', found {}",
                self.records_path.as_deref().unwrap_or("$"),
                json_type_name(other)
            ))),
        }
    }

    fn extract_next(&self, value: &Value) -> Result<Option<String>> {
        match extract_simple_path(value, &self.next_path) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(Error::decode(format!(
                "Expected a string next link at '{}', found {}",
                self.next_path,
                json_type_name(other)
            ))),
        }
    }
}

impl PageDecoder for JsonPageDecoder {
    fn decode(&self, body: &[u8]) -> Result<Page<Value>> {
        let value: Value = serde_json::from_slice(body).map_err(|e| Error::Decode {
            message: format!("Failed to parse JSON: {e}"),
        })?;

        let records = self.extract_records(&value)?;
        let next = self.extract_next(&value)?;

        Ok(Page::new(records, next))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Walk a dot-notation path (optionally prefixed with `$.`)
fn extract_simple_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            Value::Object(map) => current = map.get(part)?,
            _ => return None,
        }
    }

    Some(current)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
