//! Computer player backed by the perfect-play search.

use super::{Seat, SeatKind};
use crate::console::Terminal;
use anyhow::{Context, Result};
use noughts_core::{Board, Symbol};
use tracing::{debug, instrument};

/// Computer player that always picks an optimal move.
#[derive(Debug, Clone)]
pub struct MinimaxAi {
    name: String,
}

impl MinimaxAi {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Seat for MinimaxAi {
    #[instrument(skip(self, board, _term), fields(ai = %self.name))]
    fn choose_move(&mut self, board: &Board, mark: Symbol, _term: &mut dyn Terminal) -> Result<usize> {
        let pos = board
            .best_move_for(mark)
            .context("No moves left for the AI")?;
        debug!(position = pos, "AI chose position");
        Ok(pos)
    }

    fn kind(&self) -> SeatKind {
        SeatKind::Computer
    }

    fn name(&self) -> &str {
        &self.name
    }
}
