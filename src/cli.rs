//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::{Board, Symbol};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a perfect-play opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play games at the console
    Play {
        /// Play as x or o without being asked
        #[arg(long)]
        human: Option<Symbol>,

        /// Stop after one game instead of offering a rematch
        #[arg(long)]
        once: bool,

        /// Do not print the 1-9 numbering key
        #[arg(long)]
        no_key: bool,
    },

    /// Show the best move for a position
    Analyze {
        /// Nine cells row by row using x, o and _ (e.g. "xo_ _x_ __o")
        board: Board,

        /// Side to move; inferred from the mark counts when omitted
        #[arg(short, long)]
        player: Option<Symbol>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            human: None,
            once: false,
            no_key: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from(["noughts", "play", "--human", "o", "--once"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                human: Some(Symbol::O),
                once: true,
                no_key: false,
            })
        );
    }

    #[test]
    fn test_analyze_parses_board() {
        let cli = Cli::try_parse_from(["noughts", "analyze", "xx_oo____", "-p", "x"]).unwrap();
        match cli.command {
            Some(Command::Analyze { board, player }) => {
                assert_eq!(board.empty_count(), 5);
                assert_eq!(player, Some(Symbol::X));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_board_rejected() {
        assert!(Cli::try_parse_from(["noughts", "analyze", "xyz"]).is_err());
        assert!(Cli::try_parse_from(["noughts", "play", "--human", "q"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["noughts", "play", "--config", "my.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }
}
