mod cli;

use clap::Parser;
use diag_sarif::config;
use diag_sarif::input;
use diag_sarif::report::{self, ConvertOptions};
use diag_sarif::SarifError;
use std::io::Write;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(cli: &cli::Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("diag_sarif={}", cli.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32, SarifError> {
    let cli = cli::Cli::parse();
    init_tracing(&cli);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?.unwrap_or_default();

    let mut options = ConvertOptions::new(
        cli.root
            .clone()
            .or_else(|| loaded.root().cloned())
            .unwrap_or_else(|| cwd.clone()),
    );
    options.pretty = cli.pretty.unwrap_or(loaded.pretty());
    options.placeholder_tool = loaded.placeholder_tool().to_string();
    options.validate()?;

    let diagnostics = input::read_diagnostics(cli.input.as_deref())?;
    let rendered = report::to_sarif(&diagnostics, &options)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote SARIF report");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }

    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
