mod cli;
mod convert;
mod error;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use error::ConvertError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries only the converted value
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            return Ok(match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            });
        }
    };
    debug!(?cli, "parsed arguments");

    match run(&cli) {
        Ok(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            debug!(%err, "conversion failed");
            eprintln!("{err}");
            Ok(ExitCode::from(1))
        }
    }
}

fn run(cli: &Cli) -> Result<String, ConvertError> {
    let code = cli.code.as_deref().ok_or(ConvertError::MissingArgument)?;
    if cli.json {
        convert::render_json(code, cli.mode())
    } else {
        convert::convert(code, cli.mode() == convert::OutputMode::Floating)
    }
}
