//! extlog CLI: emit and inspect workflow log entries.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use extlog::{decode, Level, LogEntry, Logging, LoggingConfig, OutputTarget, Status};
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "extlog", version, about = "Structured workflow logs for CLI extensions")]
pub struct Cli {
    /// Enable debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one entry and write it to the configured output
    Emit {
        /// Workflow step, repeatable; joined in the order given
        #[arg(short, long = "step", value_name = "NAME")]
        steps: Vec<String>,

        #[arg(long)]
        status: Option<Status>,

        #[arg(long)]
        level: Option<Level>,

        /// YAML or JSON config file (defaults to EXTLOG_CONFIG)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        #[arg(long)]
        output: Option<OutputTarget>,

        extension_id: String,

        message: String,
    },
    /// Decode JSON-lines entries and print a summary per entry
    Decode {
        /// Entries to decode; read from stdin when omitted
        #[arg(value_name = "JSON")]
        input: Option<String>,
    },
}

pub fn run(cli: Cli, input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Command::Emit {
            steps,
            status,
            level,
            config,
            output,
            extension_id,
            message,
        } => {
            let mut config = match config {
                Some(path) => LoggingConfig::load(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => LoggingConfig::from_env().context("loading config from environment")?,
            };
            if let Some(output) = output {
                config.output = output;
            }
            let logging = Logging::new(config);

            let mut builder = logging.builder().add_workflow_steps(steps);
            if let Some(status) = status {
                builder = builder.set_status(status);
            }
            if let Some(level) = level {
                builder = builder.set_level(level);
            }
            let entry = builder.build(extension_id, message);

            let mut sink = logging.sink_with(out);
            let written = logging
                .emit(sink.as_mut(), &entry)
                .context("writing log entry")?;
            if !written {
                tracing::debug!(level = %entry.level(), "entry below min_level, dropped");
            }
            Ok(())
        }
        Command::Decode { input: text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    input.read_to_string(&mut buf).context("reading stdin")?;
                    buf
                }
            };

            for (index, line) in text.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let entry =
                    decode(line).with_context(|| format!("line {}: invalid entry", index + 1))?;
                writeln!(out, "{}", summary(&entry))?;
            }
            Ok(())
        }
    }
}

/// One-line human summary: `LEVEL [step] ext_id: message (status)`.
pub fn summary(entry: &LogEntry) -> String {
    format!(
        "{:<5} [{}] {}: {} ({})",
        entry.level().as_str().to_uppercase(),
        entry.workflow_step(),
        entry.extension_id(),
        entry.message(),
        entry.status()
    )
}
