use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cjforge",
    about = "Inspect and normalize Chemical JSON (CJSON) files",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress summaries and warnings (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v warnings, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read a CJSON file and print a structure summary
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Read a CJSON file and rewrite it in canonical form
    #[command(visible_alias = "f")]
    Format(FormatArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// Input file (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Args)]
pub struct FormatArgs {
    /// Input file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub indent: usize,

    /// Write single-line JSON
    #[arg(long, conflicts_with = "indent")]
    pub compact: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
