//! Pure tic-tac-toe game logic.
//!
//! - [`Board`]: nine cells, mutation, win and fullness queries
//! - [`Board::best_move_for`]: exhaustive minimax, perfect play
//! - [`Position`]: the 1-9 numbering players use
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Symbol};
//!
//! let mut board = Board::new();
//! let pos = board.best_move_for(Symbol::X).unwrap();
//! assert_eq!(pos, 4);
//! board.replace(pos, Symbol::X).unwrap();
//! assert!(!board.has_winner(Symbol::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod search;
mod types;

pub use error::BoardError;
pub use position::Position;
pub use search::{Evaluation, Outcome};
pub use types::{Board, CELL_COUNT, Cell, Symbol};
