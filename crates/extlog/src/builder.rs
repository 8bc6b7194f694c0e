//! Fluent builder that accumulates workflow context for a log entry.

use crate::entry::{Level, LogEntry, Status};

/// Separator used to join workflow step names into a path.
pub const STEP_SEPARATOR: &str = "/";

/// Accumulates workflow steps, status and level for a [`LogEntry`].
///
/// Every derivation method borrows the receiver and returns a new builder,
/// so one base builder can branch into independent step trees:
///
/// ```
/// use extlog::LogBuilder;
///
/// let base = LogBuilder::new().add_workflow_steps(["Base"]);
/// let build = base.add_workflow_steps(["Build"]);
/// let deploy = base.add_workflow_steps(["Deploy"]);
///
/// assert_eq!(base.workflow_step(), "Base");
/// assert_eq!(build.workflow_step(), "Base/Build");
/// assert_eq!(deploy.workflow_step(), "Base/Deploy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogBuilder {
    steps: Vec<String>,
    status: Status,
    level: Level,
}

impl LogBuilder {
    /// Empty path, default status and level.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_defaults(status: Status, level: Level) -> Self {
        Self {
            steps: Vec::new(),
            status,
            level,
        }
    }

    /// Derive a builder with `names` appended to the step path, in order.
    ///
    /// Names are kept verbatim, empty ones included.
    pub fn add_workflow_steps<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.steps.extend(names.into_iter().map(Into::into));
        next
    }

    pub fn set_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn set_level(&self, level: Level) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn workflow_step(&self) -> String {
        self.steps.join(STEP_SEPARATOR)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Finalize into a [`LogEntry`].
    pub fn build(self, extension_id: impl Into<String>, message: impl Into<String>) -> LogEntry {
        LogEntry {
            workflow_step: self.steps.join(STEP_SEPARATOR),
            extension_id: extension_id.into(),
            message: message.into(),
            status: self.status,
            level: self.level,
        }
    }
}
