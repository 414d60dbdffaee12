//! Immutable 3x3 board.

use crate::{Error, Square};
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order and addressed either by `(x, y)`
/// coordinates in `[0, 2]` or by the linear position `x + 3 * y` in
/// `[0, 8]`. Boards are immutable: every move produces a new board and
/// leaves the parent untouched, so the search tree and the game history can
/// hold snapshots freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the square at `(x, y)`, or `None` outside the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Square> {
        if x > 2 || y > 2 {
            return None;
        }
        Some(self.squares[x + 3 * y])
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Plays `player` at `(x, y)`, returning the resulting board.
    ///
    /// The parent board is unchanged. Checks run in a fixed order: the
    /// symbol must be a player, the coordinates must be on the board, and
    /// the target cell must be empty.
    pub fn play(&self, player: Square, x: usize, y: usize) -> Result<Self, Error> {
        if !player.is_player() {
            return Err(Error::InvalidPlayer(player));
        }
        if x > 2 || y > 2 {
            return Err(Error::OutOfRange { x, y });
        }
        let position = x + 3 * y;
        if self.squares[position] != Square::Empty {
            return Err(Error::OccupiedCell { x, y });
        }
        let mut squares = self.squares;
        squares[position] = player;
        Ok(Self { squares })
    }

    /// Plays `player` at the linear position `x + 3 * y`.
    ///
    /// Positions past 8 decompose to an off-board row and are rejected as
    /// out of range.
    pub fn play_position(&self, player: Square, position: usize) -> Result<Self, Error> {
        self.play(player, position % 3, position / 3)
    }

    /// Linear positions of the empty cells, ascending. Empty when the board
    /// is full.
    pub fn available_positions(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(position, _)| position)
            .collect()
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| *square != Square::Empty)
    }

    /// Returns the symbol holding a completed line, or `Empty` if none.
    ///
    /// At most one player can have a completed line in a legally played
    /// game, so the scan order is not observable.
    pub fn winner(&self) -> Square {
        const LINES: [[usize; 3]; 8] = [
            // Diagonals, then row i and column i for each i.
            [0, 4, 8],
            [2, 4, 6],
            [0, 1, 2],
            [0, 3, 6],
            [3, 4, 5],
            [1, 4, 7],
            [6, 7, 8],
            [2, 5, 8],
        ];

        for [a, b, c] in LINES {
            let square = self.squares[a];
            if square != Square::Empty && square == self.squares[b] && square == self.squares[c] {
                return square;
            }
        }

        Square::Empty
    }

    /// Successor board for the search recursion. Callers have already
    /// validated `player` and `position` against this board.
    pub(crate) fn child(&self, player: Square, position: usize) -> Self {
        debug_assert!(player.is_player());
        debug_assert!(self.squares[position] == Square::Empty);
        let mut squares = self.squares;
        squares[position] = player;
        Self { squares }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..3 {
            if y > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "| {} |  {} |  {} |",
                self.squares[3 * y],
                self.squares[3 * y + 1],
                self.squares[3 * y + 2]
            )?;
        }
        Ok(())
    }
}
