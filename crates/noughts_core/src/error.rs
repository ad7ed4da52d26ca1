//! Errors raised by board operations.

/// Error that can occur when addressing or parsing a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The index does not name one of the nine cells.
    #[display("Position {} is out of range (must be 0-8)", pos)]
    OutOfRange {
        /// The offending index.
        pos: usize,
    },

    /// Text could not be read as a board or symbol.
    #[display("Cannot parse: {}", reason)]
    Parse {
        /// What went wrong.
        reason: String,
    },
}

impl std::error::Error for BoardError {}
