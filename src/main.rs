//! Noughts - console tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{Console, GameConfig, Session, analyze, side_to_move};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            human,
            once,
            no_key,
        } => {
            let mut config = GameConfig::load(cli.config.as_deref())
                .context("Failed to load configuration")?
                .with_human(human);
            if once {
                config = config.with_ask_replay(false);
            }
            if no_key {
                config = config.with_show_key(false);
            }
            run_play(config)
        }
        Command::Analyze { board, player } => {
            let player = player.unwrap_or_else(|| side_to_move(&board));
            println!("{}\n", board);
            println!("{}", analyze(&board, player));
            Ok(())
        }
    }
}

/// Runs interactive games on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    info!(?config, "Starting console session");
    let mut console = Console::stdio();
    let summary = Session::new(config).run(&mut console)?;
    info!(
        games = summary.games(),
        human_wins = summary.human_wins(),
        ai_wins = summary.ai_wins(),
        ties = summary.ties(),
        "Goodbye"
    );
    Ok(())
}
