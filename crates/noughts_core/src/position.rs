//! Named board positions.
//!
//! Players see the board numbered 1 to 9; the board itself is indexed 0 to 8.
//! [`Position`] bridges the two and gives every square a readable name.

use strum::IntoEnumIterator;
use tracing::instrument;

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Label shown to players.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position for a board index, if it is in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// The 1-based number players type for this square.
    pub fn number(self) -> usize {
        self.to_index() + 1
    }

    /// Position for a 1-based number, if it is in range.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// Parses what a player typed: a number from 1 to 9 or a label.
    ///
    /// Labels match case-insensitively and ignore `-` and spaces, so
    /// `"top left"`, `"TopLeft"` and `"top-left"` are all accepted.
    #[instrument]
    pub fn parse_input(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            return Self::from_number(number);
        }

        let wanted = normalize(input);
        if wanted.is_empty() {
            return None;
        }
        Self::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_for_every_square() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(Position::TopLeft.number(), 1);
        assert_eq!(Position::BottomRight.number(), 9);
        assert_eq!(Position::from_number(5), Some(Position::Center));
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(10), None);
    }

    #[test]
    fn test_parse_input_numbers() {
        assert_eq!(Position::parse_input(" 1 "), Some(Position::TopLeft));
        assert_eq!(Position::parse_input("9"), Some(Position::BottomRight));
        assert_eq!(Position::parse_input("0"), None);
        assert_eq!(Position::parse_input("-3"), None);
    }

    #[test]
    fn test_parse_input_rejects_trailing_garbage() {
        assert_eq!(Position::parse_input("5x"), None);
        assert_eq!(Position::parse_input("1 2"), None);
        assert_eq!(Position::parse_input("3."), None);
    }

    #[test]
    fn test_parse_input_labels() {
        assert_eq!(Position::parse_input("center"), Some(Position::Center));
        assert_eq!(Position::parse_input("Top center"), Some(Position::TopCenter));
        assert_eq!(Position::parse_input("bottom-right"), Some(Position::BottomRight));
        assert_eq!(Position::parse_input("middle"), None);
        assert_eq!(Position::parse_input(""), None);
    }
}
