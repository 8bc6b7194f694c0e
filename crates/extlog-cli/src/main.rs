//! Binary entrypoint for the extlog CLI.
use clap::Parser;
use extlog_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let max_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .try_init();

    run(cli, &mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}
