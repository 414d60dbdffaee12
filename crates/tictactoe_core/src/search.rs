//! Move selection by exhaustive minimax or alpha-beta pruned minimax.

use crate::{Board, Error, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Value of a line of play that ends in a win for the searching player.
pub const WIN: i32 = 10;
/// Value of a line of play that ends in a loss for the searching player.
pub const LOSE: i32 = -10;
/// Value of a line of play that fills the board with no winner.
pub const DRAW: i32 = 0;

/// Search algorithm used to pick a move.
///
/// Both variants assign every position the same value; `AlphaBeta` skips
/// subtrees that cannot change the outcome and visits strictly fewer nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Strategy {
    /// Exhaustive minimax over the full game tree.
    #[display("minimax")]
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[display("alpha-beta")]
    AlphaBeta,
}

/// Picks the best available position for `symbol` on `board`.
///
/// Candidates are shuffled with `rng` before evaluation and ties go to the
/// first maximal value encountered, so the choice among equally good moves
/// varies from run to run unless the caller seeds the generator.
///
/// Fails with [`Error::GameAlreadyOver`] when no position is left to play.
#[instrument(skip(rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    symbol: Square,
    strategy: Strategy,
    rng: &mut R,
) -> Result<usize, Error> {
    let mut positions = board.available_positions();
    if positions.is_empty() {
        return Err(Error::GameAlreadyOver);
    }
    positions.shuffle(rng);

    let mut best_position = positions[0];
    let mut best_value = i32::MIN;
    for position in positions {
        let next = board.play_position(symbol, position)?;
        let value = match strategy {
            Strategy::Minimax => minimax(&next, symbol, false),
            Strategy::AlphaBeta => alphabeta(&next, symbol, false, i32::MIN, i32::MAX),
        };
        if value > best_value {
            best_value = value;
            best_position = position;
        }
    }
    debug!(
        %strategy,
        position = best_position,
        value = best_value,
        "Engine picked a move"
    );
    Ok(best_position)
}

/// Score of a finished board from `player`'s point of view, or `None` while
/// play continues. Shared by both search variants so they cannot disagree
/// on terminal positions.
fn terminal_value(board: &Board, player: Square) -> Option<i32> {
    let winner = board.winner();
    if winner == player {
        return Some(WIN);
    }
    if winner == player.opponent() {
        return Some(LOSE);
    }
    if board.is_full() {
        return Some(DRAW);
    }
    None
}

/// Exhaustive minimax value of `board` for `player`. The mover at this node
/// is `player` when maximizing, the opponent otherwise.
fn minimax(board: &Board, player: Square, maximizing: bool) -> i32 {
    if let Some(value) = terminal_value(board, player) {
        return value;
    }
    let mover = if maximizing {
        player
    } else {
        player.opponent()
    };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for position in board.available_positions() {
        let value = minimax(&board.child(mover, position), player, !maximizing);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Minimax value of `board` for `player` with alpha-beta pruning. Sibling
/// scanning stops as soon as `alpha >= beta`, since the remaining children
/// cannot change the parent's choice.
fn alphabeta(board: &Board, player: Square, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    if let Some(value) = terminal_value(board, player) {
        return value;
    }
    if maximizing {
        let mut value = i32::MIN;
        let mut alpha = alpha;
        for position in board.available_positions() {
            let child = board.child(player, position);
            value = value.max(alphabeta(&child, player, false, alpha, beta));
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let opponent = player.opponent();
        let mut value = i32::MAX;
        let mut beta = beta;
        for position in board.available_positions() {
            let child = board.child(opponent, position);
            value = value.min(alphabeta(&child, player, true, alpha, beta));
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_from(moves: &[(Square, usize)]) -> Board {
        let mut board = Board::new();
        for (symbol, position) in moves {
            board = board.play_position(*symbol, *position).unwrap();
        }
        board
    }

    /// Plays up to `moves` random alternating moves, stopping early if the
    /// game ends.
    fn random_board(moves: usize, rng: &mut StdRng) -> (Board, Square) {
        let mut board = Board::new();
        let mut turn = Square::X;
        for _ in 0..moves {
            if board.winner() != Square::Empty || board.is_full() {
                break;
            }
            let positions = board.available_positions();
            let position = *positions.choose(rng).unwrap();
            board = board.play_position(turn, position).unwrap();
            turn = turn.opponent();
        }
        (board, turn)
    }

    #[test]
    fn test_terminal_value_win_lose_draw() {
        let won = board_from(&[(Square::X, 0), (Square::X, 1), (Square::X, 2)]);
        assert_eq!(terminal_value(&won, Square::X), Some(WIN));
        assert_eq!(terminal_value(&won, Square::O), Some(LOSE));

        let drawn = board_from(&[
            (Square::X, 0),
            (Square::O, 1),
            (Square::X, 2),
            (Square::X, 3),
            (Square::O, 4),
            (Square::O, 5),
            (Square::O, 6),
            (Square::X, 7),
            (Square::X, 8),
        ]);
        assert_eq!(terminal_value(&drawn, Square::X), Some(DRAW));
        assert_eq!(terminal_value(&drawn, Square::O), Some(DRAW));

        assert_eq!(terminal_value(&Board::new(), Square::X), None);
    }

    #[test]
    fn test_engine_takes_immediate_win() {
        // X holds 0 and 1; playing 2 completes the top row.
        let board = board_from(&[
            (Square::X, 0),
            (Square::O, 3),
            (Square::X, 1),
            (Square::O, 4),
        ]);
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            for seed in 0..5 {
                let mut rng = StdRng::seed_from_u64(seed);
                let position = choose_move(&board, Square::X, strategy, &mut rng).unwrap();
                assert_eq!(position, 2, "{strategy} with seed {seed}");
            }
        }
    }

    #[test]
    fn test_engine_blocks_immediate_loss() {
        // O holds 3 and 4; every X reply except 5 loses on the spot.
        let board = board_from(&[
            (Square::X, 0),
            (Square::O, 3),
            (Square::X, 8),
            (Square::O, 4),
        ]);
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            for seed in 0..5 {
                let mut rng = StdRng::seed_from_u64(seed);
                let position = choose_move(&board, Square::X, strategy, &mut rng).unwrap();
                assert_eq!(position, 5, "{strategy} with seed {seed}");
            }
        }
    }

    #[test]
    fn test_alphabeta_value_matches_minimax() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sampled = vec![(Board::new(), Square::X)];
        for depth in [2, 3, 4, 5, 6, 7] {
            for _ in 0..3 {
                sampled.push(random_board(depth, &mut rng));
            }
        }
        for (board, mover) in sampled {
            if board.winner() != Square::Empty || board.is_full() {
                continue;
            }
            for position in board.available_positions() {
                let child = board.child(mover, position);
                let full = minimax(&child, mover, false);
                let pruned = alphabeta(&child, mover, false, i32::MIN, i32::MAX);
                assert_eq!(full, pruned, "position {position} on:\n{board}");
            }
        }
    }

    #[test]
    fn test_top_level_values_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for depth in [1, 3, 5, 7] {
            let (board, mover) = random_board(depth, &mut rng);
            if board.winner() != Square::Empty || board.is_full() {
                continue;
            }
            for position in board.available_positions() {
                let child = board.child(mover, position);
                let value = minimax(&child, mover, false);
                assert!([LOSE, DRAW, WIN].contains(&value), "value {value}");
            }
        }
    }

    #[test]
    fn test_seeded_choice_is_reproducible() {
        let board = board_from(&[(Square::X, 4), (Square::O, 0)]);
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        assert_eq!(
            choose_move(&board, Square::X, Strategy::AlphaBeta, &mut first).unwrap(),
            choose_move(&board, Square::X, Strategy::AlphaBeta, &mut second).unwrap()
        );
    }

    #[test]
    fn test_full_board_is_already_over() {
        let full = board_from(&[
            (Square::X, 0),
            (Square::O, 1),
            (Square::X, 2),
            (Square::X, 3),
            (Square::O, 4),
            (Square::O, 5),
            (Square::O, 6),
            (Square::X, 7),
            (Square::X, 8),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_move(&full, Square::X, Strategy::Minimax, &mut rng),
            Err(Error::GameAlreadyOver)
        );
    }

    #[test]
    fn test_empty_symbol_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_move(&Board::new(), Square::Empty, Strategy::Minimax, &mut rng),
            Err(Error::InvalidPlayer(Square::Empty))
        );
    }
}
