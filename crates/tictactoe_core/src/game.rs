//! Game state, the service that drives it, and engine-vs-engine simulation.

use crate::search::{self, Strategy};
use crate::{Board, Error, Square};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// States are values: [`play_at`](GameState::play_at) returns the successor
/// and leaves `self` untouched, so callers can keep or replay any state they
/// have seen. The history always starts with the empty board and ends with
/// the current board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Symbol that moves next.
    turn: Square,
    /// True once a winner exists or the board is full.
    over: bool,
    /// Every board reached so far, oldest first.
    history: Vec<Board>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            turn: Square::X,
            over: false,
            history: vec![Board::new()],
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.history
            .last()
            .expect("history always holds the starting board")
    }

    /// Returns the symbol that moves next.
    pub fn turn(&self) -> Square {
        self.turn
    }

    /// Returns true once the game has ended in a win or a draw.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Returns every board reached so far, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of moves applied since the start of the game.
    pub fn moves_played(&self) -> usize {
        self.history.len() - 1
    }

    /// Plays the side to move at the linear position (0-8) and returns the
    /// successor state.
    ///
    /// A finished game ignores the request: the attempt is logged and the
    /// unchanged state comes back. Board rejections (range, occupancy)
    /// propagate unchanged, leaving the turn with the same side.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play_at(&self, position: usize) -> Result<Self, Error> {
        if self.over {
            info!(position, "Game is over; ignoring move");
            return Ok(self.clone());
        }
        let board = self.board().play_position(self.turn, position)?;
        let winner = board.winner();
        let over = winner.is_player() || board.is_full();
        if winner.is_player() {
            info!(winner = %winner, "Player won the game");
        } else if over {
            info!("Game ended in a draw");
        } else {
            debug!(position, player = %self.turn, "Move applied");
        }
        let mut history = self.history.clone();
        history.push(board);
        let next = Self {
            turn: self.turn.opponent(),
            over,
            history,
        };
        debug_assert_eq!(next.history.len(), self.history.len() + 1);
        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a game from the outside: owns the authoritative [`GameState`] and
/// the random number generator behind shuffles and random moves.
///
/// The generator is injected at construction so tests and simulations can
/// replay runs with [`seeded`](GameService::seeded).
#[derive(Debug)]
pub struct GameService {
    state: GameState,
    rng: StdRng,
}

impl GameService {
    /// Creates a service with a fresh game and an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a service whose random choices replay deterministically.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a service around an explicit generator.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            state: GameState::new(),
            rng,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays the side to move at `position` and renders the result.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, position: usize) -> Result<String, Error> {
        self.state = self.state.play_at(position)?;
        Ok(self.render())
    }

    /// Plays a uniformly random available position for the side to move.
    ///
    /// Fails with [`Error::NoAvailablePositions`] on a full board. Like the
    /// other move operations, a finished game with empty cells left makes
    /// this a no-op via [`GameState::play_at`].
    #[instrument(skip(self))]
    pub fn play_random(&mut self) -> Result<String, Error> {
        let positions = self.state.board().available_positions();
        let position = positions
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoAvailablePositions)?;
        self.play_at(position)
    }

    /// Plays an engine move for the side to move and renders the result.
    ///
    /// A finished game is a logged no-op, matching
    /// [`GameState::play_at`].
    #[instrument(skip(self))]
    pub fn play_search(&mut self, strategy: Strategy) -> Result<String, Error> {
        if self.state.is_over() {
            info!(%strategy, "Game is over; ignoring engine move");
            return Ok(self.render());
        }
        let position = search::choose_move(
            self.state.board(),
            self.state.turn(),
            strategy,
            &mut self.rng,
        )?;
        self.play_at(position)
    }

    /// Abandons the current game, starts a new one, and renders the empty
    /// board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> String {
        info!("Starting a new game");
        self.state = GameState::new();
        self.render()
    }

    /// Renders the current board.
    pub fn render(&self) -> String {
        self.state.board().to_string()
    }

    /// Plays `games` complete engine-vs-engine games and tallies the
    /// outcomes. X moves by exhaustive minimax, O by alpha-beta.
    ///
    /// The current game is discarded; the service is left on the final
    /// simulated board.
    #[instrument(skip(self))]
    pub fn simulate(&mut self, games: u32) -> Result<SimulationReport, Error> {
        let mut report = SimulationReport::default();
        for game in 0..games {
            self.reset();
            while !self.state.is_over() {
                let strategy = match self.state.turn() {
                    Square::X => Strategy::Minimax,
                    _ => Strategy::AlphaBeta,
                };
                self.play_search(strategy)?;
            }
            let winner = self.state.board().winner();
            report.record(winner);
            debug!(game, winner = %winner, "Simulated game finished");
        }
        info!(games, %report, "Simulation complete");
        Ok(report)
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome tally for a batch of simulated games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl SimulationReport {
    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games that ended with no winner.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    fn record(&mut self, winner: Square) {
        match winner {
            Square::X => self.x_wins += 1,
            Square::O => self.o_wins += 1,
            Square::Empty => self.draws += 1,
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X Wins : {} | O Wins : {} | Draws : {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
