//! Noughts - console tic-tac-toe against a perfect-play opponent.
//!
//! The board and search live in [`noughts_core`]; this crate is the console
//! game around them.
//!
//! # Architecture
//!
//! - **Orchestrator**: one game, X first, strict alternation
//! - **Seats**: the console human and the minimax AI
//! - **Session**: replay loop and the win/loss tally
//! - **Config**: optional TOML file plus CLI overrides
//!
//! # Example
//!
//! ```
//! use noughts::{Console, GameConfig, Session};
//! use std::io::Cursor;
//!
//! // Human plays o, never moves, and input ends: the session just stops.
//! let config = GameConfig::default().with_human(Some(noughts::Symbol::O));
//! let mut console = Console::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new());
//! let summary = Session::new(config).run(&mut console).unwrap();
//! assert_eq!(*summary.games(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
pub mod cli;
mod config;
mod console;
mod orchestrator;
mod players;
mod session;

pub use analyze::{Analysis, analyze, side_to_move};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use console::{Console, ConsoleError, Terminal, ask_until};
pub use orchestrator::{GameOutcome, Orchestrator};
pub use players::{ConsoleHuman, MinimaxAi, Seat, SeatKind};
pub use session::{Session, SessionSummary};

pub use noughts_core::{Board, Cell, Outcome, Position, Symbol};
