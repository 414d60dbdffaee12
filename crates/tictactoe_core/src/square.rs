//! Player symbols and cell contents.

use serde::{Deserialize, Serialize};

/// Contents of a single board cell, doubling as a player symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
    /// Unclaimed cell.
    Empty,
}

impl Square {
    /// Returns the character used when rendering this square.
    pub fn symbol(self) -> char {
        match self {
            Square::X => 'X',
            Square::O => 'O',
            Square::Empty => ' ',
        }
    }

    /// Returns true for the two player symbols.
    pub fn is_player(self) -> bool {
        matches!(self, Square::X | Square::O)
    }

    /// Returns the opposing player. `Empty` has no opponent and maps to
    /// itself.
    pub fn opponent(self) -> Self {
        match self {
            Square::X => Square::O,
            Square::O => Square::X,
            Square::Empty => Square::Empty,
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
