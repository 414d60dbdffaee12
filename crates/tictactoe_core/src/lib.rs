//! Tic-tac-toe with exhaustive minimax and alpha-beta pruned engines.
//!
//! The crate is layered leaves-first:
//!
//! - [`Square`]: cell contents, doubling as the player symbols.
//! - [`Board`]: immutable 3x3 grid; every move produces a new board.
//! - [`choose_move`]: picks a position for a symbol with a [`Strategy`].
//! - [`GameService`]: owns the authoritative [`GameState`] and the random
//!   number generator, and drives interactive play and engine-vs-engine
//!   simulation.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameService, Strategy};
//!
//! # fn main() -> Result<(), tictactoe_core::Error> {
//! let mut service = GameService::seeded(7);
//! service.play_at(4)?;
//! let rendered = service.play_search(Strategy::AlphaBeta)?;
//! println!("{rendered}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod game;
mod search;
mod square;

// Crate-level exports - board and squares
pub use board::Board;
pub use square::Square;

// Crate-level exports - search engines
pub use search::{DRAW, LOSE, Strategy, WIN, choose_move};

// Crate-level exports - game state and service
pub use error::Error;
pub use game::{GameService, GameState, SimulationReport};
