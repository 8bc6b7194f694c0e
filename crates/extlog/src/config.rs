//! Logging configuration
//!
//! Supplies the default level/status seeded into root builders and the
//! output target used by [`Logging::sink`](crate::Logging::sink).

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::entry::{Level, Status};
use crate::error::LogError;

/// Path to a YAML/JSON config file.
pub const ENV_CONFIG: &str = "EXTLOG_CONFIG";
/// Overrides `default_level`.
pub const ENV_LEVEL: &str = "EXTLOG_LEVEL";
/// Overrides `default_status`.
pub const ENV_STATUS: &str = "EXTLOG_STATUS";

/// Where encoded entries are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    /// Forward entries as `tracing` events.
    Tracing,
}

impl FromStr for OutputTarget {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdout" => Ok(OutputTarget::Stdout),
            "stderr" => Ok(OutputTarget::Stderr),
            "tracing" => Ok(OutputTarget::Tracing),
            _ => Err(LogError::invalid("output", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level given to entries whose builder never set one
    pub default_level: Level,

    /// Status given to entries whose builder never set one
    pub default_status: Status,

    /// Entries below this level are dropped by `Logging::emit`
    pub min_level: Level,

    pub output: OutputTarget,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::Info,
            default_status: Status::InProgress,
            min_level: Level::Debug,
            output: OutputTarget::Stdout,
        }
    }
}

impl LoggingConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, LogError> {
        serde_yaml::from_str(yaml).map_err(|e| LogError::Config(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, LogError> {
        serde_json::from_str(json).map_err(|e| LogError::Config(e.to_string()))
    }

    /// Load from a file: JSON when the extension is `.json`, YAML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LogError::Config(format!("failed to read {}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Apply optional textual overrides for the default level and status.
    pub fn with_overrides(
        mut self,
        level: Option<&str>,
        status: Option<&str>,
    ) -> Result<Self, LogError> {
        if let Some(level) = level {
            self.default_level = level.parse()?;
        }
        if let Some(status) = status {
            self.default_status = status.parse()?;
        }
        Ok(self)
    }

    /// Build from the process environment (`EXTLOG_CONFIG`, `EXTLOG_LEVEL`,
    /// `EXTLOG_STATUS`).
    pub fn from_env() -> Result<Self, LogError> {
        let base = match std::env::var(ENV_CONFIG) {
            Ok(path) if !path.trim().is_empty() => Self::load(path)?,
            _ => Self::default(),
        };
        let level = std::env::var(ENV_LEVEL).ok();
        let status = std::env::var(ENV_STATUS).ok();
        base.with_overrides(level.as_deref(), status.as_deref())
    }
}
