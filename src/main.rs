//! solid-demo CLI
//!
//! Usage: solid-demo [--formatter <pdf|plain|html>] [--json] [--config <PATH>] [-v...]
//!
//! With no arguments it prints:
//!   PDF: Report Data
//!   Sending to network printer: Network printing...
//!   Scanning document...
//!   Faxing document...

use anyhow::{Context, Result};
use clap::Parser;

use solid_demo::config::Config;
use solid_demo::presentation::{create_demo, create_sink, logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for warning in &warnings {
                tracing::warn!("{}", warning);
            }
            config
        }
        None => Config::default(),
    };
    let config = config.with_overrides(cli.formatter, cli.json);
    tracing::debug!(
        formatter = %config.formatter,
        output = ?config.output.format,
        "resolved config"
    );

    let sink = create_sink(config.output.format);
    let summary = create_demo(&config)
        .run(&*sink)
        .context("failed to write demo output")?;
    tracing::debug!(
        lines_written = summary.lines_written,
        formatter = %config.formatter,
        "demo output flushed"
    );

    Ok(())
}
