//! Travel journal CLI
//!
//! Replays scripted editing sessions against the journal editor.

#![allow(clippy::print_stdout)]

mod session;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use domain::CountryId;
use infrastructure::{AppConfig, init_logging};
use tracing::info;

use crate::session::Session;

/// Travel journal CLI
#[derive(Parser)]
#[command(name = "journal-cli")]
#[command(author, version, about = "Travel journal editor CLI", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "JOURNAL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an editing session and print the outcome as JSON
    ///
    /// Example: journal-cli replay ./session.json --country PH
    Replay {
        /// Session file with an optional seed record and a list of actions
        session: PathBuf,

        /// Country context (overrides the one in the session file)
        #[arg(long)]
        country: Option<String>,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::load().context("failed to load config")?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.logging.filter = filter.to_string();
    }
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Replay {
            session: path,
            country,
        } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read session {}", path.display()))?;
            let parsed: Session = serde_json::from_str(&raw)
                .with_context(|| format!("invalid session file {}", path.display()))?;

            let country = country
                .or_else(|| parsed.country.clone())
                .context("no country given; pass --country or set it in the session")?;
            let country = CountryId::new(country)?;

            info!(
                session = %path.display(),
                country = %country,
                actions = parsed.actions.len(),
                "Replaying session"
            );
            let report = session::replay(parsed, country, config.editor_settings()).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(log_filter_from_verbosity(0), None);
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(7), Some("trace"));
    }

    #[test]
    fn replay_parses_country_and_config() {
        let cli = Cli::try_parse_from([
            "journal-cli",
            "-vv",
            "replay",
            "session.json",
            "--country",
            "jp",
            "--config",
            "journal.toml",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("journal.toml")));
        let Commands::Replay { session, country } = cli.command;
        assert_eq!(session, PathBuf::from("session.json"));
        assert_eq!(country.as_deref(), Some("jp"));
    }

    #[test]
    fn replay_requires_session_path() {
        assert!(Cli::try_parse_from(["journal-cli", "replay"]).is_err());
    }
}
