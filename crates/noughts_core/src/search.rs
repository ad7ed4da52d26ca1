//! Perfect-play minimax search.
//!
//! The search is exhaustive: with at most nine empty cells the whole game
//! tree is small enough that no pruning or caching is needed. Scores are
//! always from the perspective of the side to move, so each level negates
//! the child's score.

use crate::types::{Board, CELL_COUNT, Cell, Symbol};
use tracing::{debug, instrument};

/// Value of a position under optimal play, from the mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[repr(i8)]
pub enum Outcome {
    /// The opponent can force a win.
    #[display("loss")]
    Loss = -1,
    /// Best play by both sides ends in a tie.
    #[display("draw")]
    Draw = 0,
    /// The mover can force a win.
    #[display("win")]
    Win = 1,
}

impl Outcome {
    /// Numeric score: -1, 0 or 1.
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl std::ops::Neg for Outcome {
    type Output = Outcome;

    fn neg(self) -> Self::Output {
        match self {
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Loss,
        }
    }
}

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Guaranteed outcome for the mover.
    pub outcome: Outcome,
    /// First cell (ascending) that achieves `outcome`; `None` on a
    /// terminal board.
    pub best_move: Option<usize>,
}

impl Evaluation {
    fn terminal(outcome: Outcome) -> Self {
        Self {
            outcome,
            best_move: None,
        }
    }
}

impl Board {
    /// Returns an empty cell giving `player` the best guaranteed outcome.
    ///
    /// Ties between equally good cells go to the lowest index, so the
    /// answer is deterministic. Returns `None` when the board is already
    /// won or full.
    #[instrument(skip(self), fields(board = %self))]
    pub fn best_move_for(&self, player: Symbol) -> Option<usize> {
        let evaluation = self.evaluate(player);
        debug!(?evaluation, "Search complete");
        evaluation.best_move
    }

    /// Runs the full search for `player` and returns outcome and move.
    pub fn evaluate(&self, player: Symbol) -> Evaluation {
        let mut scratch = self.clone();
        let evaluation = scratch.minimax(player);
        debug_assert_eq!(&scratch, self, "search must restore the board");
        evaluation
    }

    fn minimax(&mut self, player: Symbol) -> Evaluation {
        let opponent = player.opposite();

        if self.has_winner(opponent) {
            return Evaluation::terminal(Outcome::Loss);
        }
        if self.has_winner(player) {
            return Evaluation::terminal(Outcome::Win);
        }
        if self.full() {
            return Evaluation::terminal(Outcome::Draw);
        }

        // Every opening draws; the center is as good as any.
        if self.empty_count() == CELL_COUNT {
            return Evaluation {
                outcome: Outcome::Draw,
                best_move: Some(4),
            };
        }

        let mut best = Evaluation::terminal(Outcome::Loss);
        for pos in 0..CELL_COUNT {
            if !self.empty_at(pos) {
                continue;
            }

            self.set(pos, Cell::Occupied(player));
            let outcome = -self.minimax(opponent).outcome;
            self.set(pos, Cell::Empty);

            if best.best_move.is_none() || outcome > best.outcome {
                best = Evaluation {
                    outcome,
                    best_move: Some(pos),
                };
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_ordering() {
        assert!(Outcome::Loss < Outcome::Draw);
        assert!(Outcome::Draw < Outcome::Win);
        assert_eq!(Outcome::Loss.value(), -1);
        assert_eq!(Outcome::Win.value(), 1);
    }

    #[test]
    fn test_outcome_negation() {
        assert_eq!(-Outcome::Win, Outcome::Loss);
        assert_eq!(-Outcome::Loss, Outcome::Win);
        assert_eq!(-Outcome::Draw, Outcome::Draw);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won: Board = "xxx oo_ ___".parse().unwrap();
        assert_eq!(won.best_move_for(Symbol::O), None);
        assert_eq!(won.evaluate(Symbol::O).outcome, Outcome::Loss);
        assert_eq!(won.evaluate(Symbol::X).outcome, Outcome::Win);

        let full: Board = "xox oxo oxo".parse().unwrap();
        assert_eq!(full.evaluate(Symbol::X), Evaluation::terminal(Outcome::Draw));
    }

    #[test]
    fn test_empty_board_shortcut() {
        let board = Board::new();
        let evaluation = board.evaluate(Symbol::X);
        assert_eq!(evaluation.outcome, Outcome::Draw);
        assert_eq!(evaluation.best_move, Some(4));
    }

    #[test]
    fn test_forced_loss_still_returns_a_move() {
        // x threatens both 2 and 3; o cannot block both.
        let board: Board = "xx_ _o_ x_o".parse().unwrap();
        let evaluation = board.evaluate(Symbol::O);
        assert_eq!(evaluation.outcome, Outcome::Loss);
        let pos = evaluation.best_move.unwrap();
        assert!(board.empty_at(pos));
    }
}
