//! Seat trait and implementations.

mod human;
mod minimax_ai;

pub use human::ConsoleHuman;
pub use minimax_ai::MinimaxAi;

use crate::console::Terminal;
use anyhow::Result;
use noughts_core::{Board, Symbol};

/// Who is sitting in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatKind {
    /// A person typing at the console.
    Human,
    /// The built-in search.
    Computer,
}

/// A participant that can choose moves.
pub trait Seat {
    /// Chooses the cell (0-8) to play for `mark` on `board`.
    ///
    /// The board is never terminal when this is called, and the returned
    /// cell must be empty.
    fn choose_move(&mut self, board: &Board, mark: Symbol, term: &mut dyn Terminal) -> Result<usize>;

    /// Whether this seat is a person or the computer.
    fn kind(&self) -> SeatKind;

    /// Display name.
    fn name(&self) -> &str;
}
