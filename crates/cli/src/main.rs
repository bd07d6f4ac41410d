// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! bg - Boarding gate simulation CLI

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod completions;
mod error;
mod output;

use anyhow::Result;
use bg_core::{ConfigError, Discovery, SimulationConfig};
use clap::{Parser, Subcommand};
use commands::auto::{self, AutoArgs};
use commands::prompt::Prompter;
use commands::{manual, menu, Session};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use crate::completions::CompletionsArgs;
use crate::error::BgError;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "bg",
    version,
    about = "Boarding gates - concurrent group boarding simulation"
)]
struct Cli {
    /// Number of gates in the pool
    #[arg(long, global = true)]
    gates: Option<u32>,

    /// TOML file with simulation settings; flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Longest wait between scans for a free gate (e.g. 100ms)
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    poll_interval: Option<Duration>,

    /// Give up on a group after this many empty scans
    #[arg(long, global = true)]
    max_attempts: Option<u32>,

    /// How a group turns a free-looking gate into a held one
    #[arg(long, global = true)]
    discovery: Option<Discovery>,

    /// Shortest passenger boarding time
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    min_delay: Option<Duration>,

    /// Longest passenger boarding time
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    max_delay: Option<Duration>,

    /// Event stream format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Hide per-event lines; summaries and prompts are still shown
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Board a fixed schedule of groups concurrently
    Auto(AutoArgs),
    /// Enter group sizes by hand and board them one at a time
    Manual,
    /// Interactive menu (default)
    Menu,
    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Cli {
    /// File settings (or defaults) with command-line overrides applied
    fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(gates) = self.gates {
            config.gates = gates;
        }
        if let Some(interval) = self.poll_interval {
            config.search.poll_interval = interval;
        }
        if let Some(attempts) = self.max_attempts {
            config.search.max_attempts = Some(attempts);
        }
        if let Some(discovery) = self.discovery {
            config.search.discovery = discovery;
        }
        if let Some(min) = self.min_delay {
            config.pacing.min_delay = min;
        }
        if let Some(max) = self.max_delay {
            config.pacing.max_delay = max;
        }

        config.validate()?;
        Ok(config)
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the event stream; diagnostics go to stderr
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Prompts share stdout with text events but move aside for JSON
fn prompt_output(format: OutputFormat) -> Box<dyn Write> {
    match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions(args)) = &cli.command {
        completions::generate_completions::<Cli>(args.shell, &mut io::stdout());
        return Ok(());
    }

    let session = Session {
        config: cli.simulation_config()?,
        format: cli.format,
        quiet: cli.quiet,
    };
    let stdin = io::stdin();

    match cli.command {
        Some(Commands::Auto(args)) => auto::run(&session, args).await,
        Some(Commands::Manual) => {
            let mut prompter = Prompter::new(stdin.lock(), prompt_output(session.format));
            manual::run(&session, &mut prompter).await.map(|_| ())
        }
        Some(Commands::Menu) | None => {
            let mut prompter = Prompter::new(stdin.lock(), prompt_output(session.format));
            menu::run(&session, &mut prompter).await
        }
        Some(Commands::Completions(_)) => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", BgError::describe(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["bg"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "bg",
            "auto",
            "--sizes",
            "2,3",
            "--gates",
            "5",
            "--poll-interval",
            "20ms",
            "--discovery",
            "claim",
            "--min-delay",
            "1ms",
            "--max-delay",
            "2ms",
        ])
        .unwrap();

        let config = cli.simulation_config().unwrap();
        assert_eq!(config.gates, 5);
        assert_eq!(config.search.poll_interval, Duration::from_millis(20));
        assert_eq!(config.search.discovery, Discovery::Claim);
        assert_eq!(config.pacing.max_delay, Duration::from_millis(2));
        match cli.command {
            Some(Commands::Auto(args)) => assert_eq!(args.sizes, vec![2, 3]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let cli = Cli::try_parse_from(["bg", "--min-delay", "5ms", "--max-delay", "1ms"]).unwrap();
        assert!(matches!(
            cli.simulation_config(),
            Err(ConfigError::InvalidDelayRange { .. })
        ));

        let cli = Cli::try_parse_from(["bg", "--gates", "0"]).unwrap();
        assert!(matches!(cli.simulation_config(), Err(ConfigError::NoGates)));
    }

    #[test]
    fn unknown_discovery_mode_fails_to_parse() {
        assert!(Cli::try_parse_from(["bg", "--discovery", "grab"]).is_err());
    }
}
