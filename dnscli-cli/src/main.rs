//! `dnscli` entry point
//!
//! Parses the command line, resolves the configuration, builds one API client
//! and runs a single command against it.

mod cli;
mod commands;
mod config;
mod error;
mod output;

#[cfg(test)]
mod test_utils;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use dnscli_pdns::PdnsClient;
use log::LevelFilter;

use cli::Cli;
use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.global)?;
    init_logging(config.debug);
    log::debug!("using PowerDNS API at {}", config.base_url);

    let client = PdnsClient::new(&config.client_config())?;

    let mut stdout = std::io::stdout().lock();
    commands::dispatch(cli.command, &client, config.output_type, &mut stdout).await?;
    stdout.flush()?;
    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the level picked here.
fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
