//! Human player typing moves at the console.

use super::{Seat, SeatKind};
use crate::console::{Terminal, ask_until};
use anyhow::Result;
use noughts_core::{Board, Position, Symbol};
use tracing::{debug, instrument};

/// Human player reading 1-based move numbers from the terminal.
#[derive(Debug, Clone)]
pub struct ConsoleHuman {
    name: String,
}

impl ConsoleHuman {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Seat for ConsoleHuman {
    #[instrument(skip(self, board, term), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, _mark: Symbol, term: &mut dyn Terminal) -> Result<usize> {
        let position = ask_until(
            term,
            "\nEnter your move: ",
            "Please enter a valid position.",
            |answer| Position::parse_input(answer).filter(|pos| board.empty_at(pos.to_index())),
        )?;
        debug!(%position, "Human chose position");
        Ok(position.to_index())
    }

    fn kind(&self) -> SeatKind {
        SeatKind::Human
    }

    fn name(&self) -> &str {
        &self.name
    }
}
