//! Unified Error Model
use thiserror::Error;

use crate::codec::ParseError;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("PARSE/{0}")]
    Parse(#[from] ParseError),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("VALUE/unknown {kind} `{value}`")]
    InvalidValue { kind: &'static str, value: String },

    #[error("SINK/{0}")]
    Sink(#[from] std::io::Error),
}

impl LogError {
    pub(crate) fn invalid(kind: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            kind,
            value: value.to_string(),
        }
    }
}
