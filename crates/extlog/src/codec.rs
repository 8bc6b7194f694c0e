//! JSON encoding of [`LogEntry`].
//!
//! Entries are written as one flat object with the keys below and string
//! values only:
//!
//! ```text
//! {"WorkflowStep":"Base/Extended/Extra","ExtensionID":"ext_id",
//!  "Message":"test_message","Status":"InProgress","Level":"Info"}
//! ```

use serde_json::{json, Error as JsonError, Value};
use thiserror::Error;

use crate::entry::LogEntry;

pub const KEY_WORKFLOW_STEP: &str = "WorkflowStep";
pub const KEY_EXTENSION_ID: &str = "ExtensionID";
pub const KEY_MESSAGE: &str = "Message";
pub const KEY_STATUS: &str = "Status";
pub const KEY_LEVEL: &str = "Level";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("malformed JSON at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("invalid log entry: {0}")]
    Shape(String),
}

impl From<JsonError> for ParseError {
    fn from(err: JsonError) -> Self {
        if err.is_data() {
            ParseError::Shape(err.to_string())
        } else {
            ParseError::Syntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            }
        }
    }
}

pub fn encode(entry: &LogEntry) -> String {
    json!({
        KEY_WORKFLOW_STEP: entry.workflow_step,
        KEY_EXTENSION_ID: entry.extension_id,
        KEY_MESSAGE: entry.message,
        KEY_STATUS: entry.status.as_str(),
        KEY_LEVEL: entry.level.as_str(),
    })
    .to_string()
}

/// Parse one entry. The text must be a JSON object; all five keys are
/// required and extra keys are ignored.
pub fn decode(text: &str) -> Result<LogEntry, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(ParseError::Shape(format!(
            "expected a JSON object, found {}",
            kind_of(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
