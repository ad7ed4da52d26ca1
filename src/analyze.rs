//! One-shot position analysis for the `analyze` command.

use noughts_core::{Board, CELL_COUNT, Outcome, Position, Symbol};
use tracing::instrument;

/// Side to move when both players have alternated from an empty board.
pub fn side_to_move(board: &Board) -> Symbol {
    let taken = CELL_COUNT - board.empty_count();
    if taken % 2 == 0 { Symbol::X } else { Symbol::O }
}

/// What the search says about a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// Someone already completed a line.
    AlreadyWon(Symbol),
    /// The board is full with no line.
    AlreadyDrawn,
    /// The game is open; `best_move` secures `outcome` for `player`.
    Open {
        /// Side to move.
        player: Symbol,
        /// Recommended square.
        best_move: Position,
        /// Guaranteed result for `player`.
        outcome: Outcome,
    },
}

/// Searches `board` for `player`.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, player: Symbol) -> Analysis {
    let evaluation = board.evaluate(player);
    match (evaluation.best_move.and_then(Position::from_index), board.winner()) {
        (Some(best_move), _) => Analysis::Open {
            player,
            best_move,
            outcome: evaluation.outcome,
        },
        (None, Some(winner)) => Analysis::AlreadyWon(winner),
        (None, None) => Analysis::AlreadyDrawn,
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Analysis::AlreadyWon(winner) => write!(f, "The game is over: {} has won.", winner),
            Analysis::AlreadyDrawn => write!(f, "The game is over: it is a tie."),
            Analysis::Open {
                player,
                best_move,
                outcome,
            } => write!(
                f,
                "Best move for {}: {} ({})\nGuaranteed outcome: {}",
                player,
                best_move.number(),
                best_move,
                outcome
            ),
        }
    }
}
