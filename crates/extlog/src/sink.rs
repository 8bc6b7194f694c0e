//! Output sinks for built log entries.

use std::io::{self, Write};

use crate::codec::encode;
use crate::entry::{Level, LogEntry};
use crate::error::LogError;

/// Destination for built entries.
pub trait LogSink {
    fn emit(&mut self, entry: &LogEntry) -> Result<(), LogError>;
}

/// Writes each entry as one JSON line.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> LogSink for WriterSink<W> {
    fn emit(&mut self, entry: &LogEntry) -> Result<(), LogError> {
        writeln!(self.writer, "{}", encode(entry))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Forwards entries to the active `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&mut self, entry: &LogEntry) -> Result<(), LogError> {
        let step = entry.workflow_step();
        let extension_id = entry.extension_id();
        let status = entry.status().as_str();
        let message = entry.message();

        match entry.level() {
            Level::Debug => {
                tracing::debug!(workflow_step = step, extension_id, status, "{}", message)
            }
            Level::Info => {
                tracing::info!(workflow_step = step, extension_id, status, "{}", message)
            }
            Level::Warn => {
                tracing::warn!(workflow_step = step, extension_id, status, "{}", message)
            }
            Level::Error => {
                tracing::error!(workflow_step = step, extension_id, status, "{}", message)
            }
        }
        Ok(())
    }
}
