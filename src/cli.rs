use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable summary line per workout
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Compute distance, average speed and calories from raw workout sensor packages"
)]
pub struct Cli {
    /// JSON file with sensor packages, or `-` for stdin.
    ///
    /// Each item is `["RUN", [15000, 1, 75]]` or `{"code": "RUN", "fields": [...]}`.
    /// Without it the built-in sample packages are processed.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log failed packages and continue with the rest instead of stopping.
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
