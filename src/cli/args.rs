use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the rbz binary.
#[derive(Parser, Debug)]
#[command(
    name = "rbz",
    version,
    about = "Checks override modifiers and type-member declarations in a program snapshot"
)]
pub struct CliArgs {
    /// JSON program snapshot to check.
    pub snapshot: PathBuf,

    /// Path to rbz.json or a directory containing it. Defaults to the
    /// snapshot's directory.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// How diagnostics are written.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Colorize text output. Defaults to whether stderr is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,

    /// Worker threads for per-class checks.
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Check classes one at a time on the calling thread.
    #[arg(long)]
    pub sequential: bool,

    /// Require concrete classes to re-declare `:in`/`:out` type members too.
    #[arg(long = "redeclare-varianced-members")]
    pub redeclare_varianced_members: bool,

    /// Do not report superclass/mixin names that match no declaration.
    #[arg(long = "allow-unresolved")]
    pub allow_unresolved: bool,

    /// Log checker progress to stderr; repeat for more detail.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
