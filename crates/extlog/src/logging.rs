//! Logging handle and process-wide initialization.
//!
//! [`Logging::new`] is the explicit factory: it owns a [`LoggingConfig`] and
//! hands out root builders seeded from it. [`init`] / [`init_with`] install
//! one such handle for the whole process; [`builder`] reads it, falling back
//! to [`LoggingConfig::default`] when nothing was initialized.

use once_cell::sync::OnceCell;
use std::io::{self, Write};

use crate::builder::LogBuilder;
use crate::config::{LoggingConfig, OutputTarget};
use crate::entry::LogEntry;
use crate::error::LogError;
use crate::sink::{LogSink, TracingSink, WriterSink};

static GLOBAL: OnceCell<Logging> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Logging {
    config: LoggingConfig,
}

impl Logging {
    pub fn new(config: LoggingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Root builder carrying the configured default status and level.
    pub fn builder(&self) -> LogBuilder {
        LogBuilder::with_defaults(self.config.default_status, self.config.default_level)
    }

    /// Sink for the configured output target.
    pub fn sink(&self) -> Box<dyn LogSink> {
        self.sink_with(io::stdout())
    }

    /// Like [`Logging::sink`], with `stdout` standing in for the process
    /// stdout when the target is [`OutputTarget::Stdout`].
    pub fn sink_with<'a, W: Write + 'a>(&self, stdout: W) -> Box<dyn LogSink + 'a> {
        match self.config.output {
            OutputTarget::Stdout => Box::new(WriterSink::new(stdout)),
            OutputTarget::Stderr => Box::new(WriterSink::stderr()),
            OutputTarget::Tracing => Box::new(TracingSink),
        }
    }

    /// Write `entry` to `sink` unless it is below `min_level`.
    ///
    /// Returns `true` when the entry was written.
    pub fn emit(&self, sink: &mut dyn LogSink, entry: &LogEntry) -> Result<bool, LogError> {
        if entry.level() < self.config.min_level {
            return Ok(false);
        }
        sink.emit(entry)?;
        Ok(true)
    }
}

/// Initialize the process-wide handle from the environment.
///
/// Idempotent: once a handle is installed, later calls return it unchanged.
pub fn init() -> Result<&'static Logging, LogError> {
    GLOBAL.get_or_try_init(|| {
        let config = LoggingConfig::from_env()?;
        tracing::debug!(?config, "extlog initialized from environment");
        Ok(Logging::new(config))
    })
}

/// Initialize the process-wide handle with an explicit config.
pub fn init_with(config: LoggingConfig) -> &'static Logging {
    let mut installed = false;
    let logging = GLOBAL.get_or_init(|| {
        installed = true;
        Logging::new(config.clone())
    });

    if installed {
        tracing::debug!(config = ?logging.config, "extlog initialized");
    } else if logging.config != config {
        tracing::warn!(
            ignored = ?config,
            active = ?logging.config,
            "extlog already initialized; keeping active config"
        );
    }
    logging
}

/// The process-wide handle, if [`init`] or [`init_with`] ran.
pub fn global() -> Option<&'static Logging> {
    GLOBAL.get()
}

/// Root builder from the process-wide handle, or from the default config
/// when the process was never initialized.
pub fn builder() -> LogBuilder {
    match GLOBAL.get() {
        Some(logging) => logging.builder(),
        None => Logging::default().builder(),
    }
}
