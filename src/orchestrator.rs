//! Game orchestration between two seats.

use crate::console::Terminal;
use crate::players::{Seat, SeatKind};
use anyhow::{Result, bail};
use noughts_core::{Board, Symbol};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The given symbol completed a line.
    Won(Symbol),
    /// The board filled up with no line completed.
    Draw,
}

impl GameOutcome {
    /// The winning symbol, if any.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameOutcome::Won(symbol) => Some(symbol),
            GameOutcome::Draw => None,
        }
    }
}

/// Runs one game: X moves first, then strict alternation until someone
/// completes a line or the board is full.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Seat>,
    player_o: Box<dyn Seat>,
    history: Vec<usize>,
}

impl Orchestrator {
    /// Creates an orchestrator with a fresh board.
    pub fn new(player_x: Box<dyn Seat>, player_o: Box<dyn Seat>) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            history: Vec::new(),
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Runs the game loop to completion.
    ///
    /// # Errors
    ///
    /// Fails if a seat fails to produce a move or produces an illegal one.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<GameOutcome> {
        info!("Starting game");
        let mut current = Symbol::X;

        loop {
            let seat = match current {
                Symbol::X => &mut self.player_x,
                Symbol::O => &mut self.player_o,
            };

            debug!(player = %seat.name(), mark = %current, "Waiting for move");
            let pos = seat.choose_move(&self.board, current, term)?;
            if !self.board.empty_at(pos) {
                bail!("{} chose unavailable cell {}", seat.name(), pos);
            }
            self.board.replace(pos, current)?;
            self.history.push(pos);

            if seat.kind() == SeatKind::Computer {
                term.say(&format!(
                    "The AI has moved at position {}.\n\nCurrent board:",
                    pos + 1
                ))?;
                term.say(&self.board.to_string())?;
            }

            if self.board.has_winner(current) {
                info!(winner = %current, moves = self.history.len(), "Game won");
                return Ok(GameOutcome::Won(current));
            }
            if self.board.full() {
                info!("Game drawn");
                return Ok(GameOutcome::Draw);
            }

            current = current.opposite();
        }
    }
}
