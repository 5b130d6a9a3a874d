//! CLI Argument Parsing
//!
//! Every flag is optional. With none, the binary prints the four demo lines.

use std::path::PathBuf;

use crate::domain::value_objects::FormatterKind;
use clap::Parser;

/// solid-demo - the five SOLID principles, one line at a time
#[derive(Parser, Debug)]
#[command(name = "solid-demo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Formatter injected into the report printer
    #[arg(long, value_enum)]
    pub formatter: Option<FormatterKind>,

    /// Emit each line as an NDJSON event
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv), written to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
