use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "diag-sarif",
    version,
    about = "Convert compiler diagnostics into a SARIF 2.1.0 report"
)]
pub struct Cli {
    /// Diagnostics JSON file; reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Directory that artifact URIs are made relative to (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Pretty-print the SARIF document (`--pretty=false` overrides config)
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub pretty: Option<bool>,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Use FILE instead of diag-sarif.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
