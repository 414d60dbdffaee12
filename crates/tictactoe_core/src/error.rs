//! Error type shared by board, search, and service operations.

use crate::Square;

/// Error raised by a game operation.
///
/// All variants are recoverable caller mistakes; nothing here is retried or
/// treated as fatal. Board and search failures propagate unchanged through
/// [`GameService`](crate::GameService).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    /// A non-player symbol was passed to a move operation.
    #[display("{:?} is not a player symbol", _0)]
    InvalidPlayer(Square),

    /// The requested coordinates fall outside the 3x3 board.
    #[display("Coordinates ({x}, {y}) are outside the board")]
    OutOfRange {
        /// Column of the rejected move.
        x: usize,
        /// Row of the rejected move.
        y: usize,
    },

    /// The target cell already holds a player symbol.
    #[display("Cell ({x}, {y}) is already occupied")]
    OccupiedCell {
        /// Column of the rejected move.
        x: usize,
        /// Row of the rejected move.
        y: usize,
    },

    /// An engine move was requested with no positions left to play.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A random move was requested on a full board.
    #[display("No available positions.")]
    NoAvailablePositions,
}

impl std::error::Error for Error {}
