//! Log entry record and its status/severity enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Execution state of a workflow step at the moment of logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Status {
    #[default]
    InProgress,
    Success,
    Failed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "InProgress",
            Status::Success => "Success",
            Status::Failed => "Failed",
        }
    }
}

impl FromStr for Status {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "inprogress" => Ok(Status::InProgress),
            "success" => Ok(Status::Success),
            "failed" | "failure" => Ok(Status::Failed),
            _ => Err(LogError::invalid("status", s)),
        }
    }
}

/// Log severity, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warn => "Warn",
            Level::Error => "Error",
        }
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(LogError::invalid("level", s)),
        }
    }
}

/// Lowercases and drops `_`/`-` so `InProgress`, `in_progress` and
/// `in-progress` all compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! text_conversions {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$ty> for &'static str {
            fn from(value: $ty) -> Self {
                value.as_str()
            }
        }

        impl TryFrom<String> for $ty {
            type Error = LogError;

            fn try_from(value: String) -> Result<Self, LogError> {
                value.parse()
            }
        }
    };
}

text_conversions!(Status);
text_conversions!(Level);

/// A single structured log record emitted by an extension.
///
/// Entries are produced by [`LogBuilder::build`](crate::LogBuilder::build)
/// or [`decode`](crate::decode) and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "WorkflowStep")]
    pub(crate) workflow_step: String,

    #[serde(rename = "ExtensionID")]
    pub(crate) extension_id: String,

    #[serde(rename = "Message")]
    pub(crate) message: String,

    #[serde(rename = "Status")]
    pub(crate) status: Status,

    #[serde(rename = "Level")]
    pub(crate) level: Level,
}

impl LogEntry {
    /// Separator-joined workflow path, e.g. `Base/Extended/Extra`.
    pub fn workflow_step(&self) -> &str {
        &self.workflow_step
    }

    pub fn extension_id(&self) -> &str {
        &self.extension_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Encode as a flat JSON object. See [`crate::codec`].
    pub fn to_json(&self) -> String {
        crate::codec::encode(self)
    }

    /// Parse an entry previously produced by [`LogEntry::to_json`].
    pub fn from_json(text: &str) -> Result<Self, crate::codec::ParseError> {
        crate::codec::decode(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_variants() {
        assert_eq!("InProgress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("SUCCESS".parse::<Status>().unwrap(), Status::Success);
        assert_eq!("failure".parse::<Status>().unwrap(), Status::Failed);
    }

    #[test]
    fn test_status_parse_unknown() {
        let err = "paused".parse::<Status>().unwrap_err();
        assert!(matches!(
            err,
            LogError::InvalidValue { kind: "status", ref value } if value == "paused"
        ));
    }

    #[test]
    fn test_level_parse_and_display() {
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" debug ".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!(Level::Error.to_string(), "Error");
        assert!("fatal".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Level::default(), Level::Info);
        assert_eq!(Status::default(), Status::InProgress);
    }

    #[test]
    fn test_enum_serde_uses_canonical_names() {
        assert_eq!(serde_json::to_string(&Status::InProgress).unwrap(), "\"InProgress\"");
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"Warn\"");
        let status: Status = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, Status::Failed);
    }

    #[test]
    fn test_level_try_from_string() {
        assert_eq!(Level::try_from("error".to_string()).unwrap(), Level::Error);
        assert_eq!(Status::try_from("Success".to_string()).unwrap(), Status::Success);

        let err = Level::try_from("verbose".to_string()).unwrap_err();
        assert!(matches!(err, LogError::InvalidValue { kind: "level", .. }));

        let level: Level = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(level, Level::Error);
    }
}
