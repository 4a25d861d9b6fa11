//! Reversi (Othello) move-search engine
//!
//! Given a position and the side to move, the engine picks a placement:
//! - Square boards of even size from 4x4 to 8x8
//! - Standard flipping along all eight lines
//! - A side without a legal move passes; the game ends when neither can move
//! - Positional evaluation from per-cell weight tables, switched by game phase
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Legal moves, flipping, pass and end-of-game detection
//! - [`eval`]: Weight tables, phase selection and the static evaluation
//! - [`search`]: Alpha-beta minimax with iterative deepening
//! - [`engine`]: Configured agent integrating all components
//! - [`config`]: TOML engine configuration
//!
//! # Quick Start
//!
//! ```
//! use reversi::{choose_best_move, play, Board, Player};
//!
//! let board = Board::new(8).unwrap();
//!
//! // Black moves first; give the search 50ms
//! let pos = choose_best_move(&board, Player::Black, 0.05).unwrap();
//! let board = play(&board, pos.x as usize, pos.y as usize, Player::Black).unwrap();
//! println!("{board}");
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (one `debug` per search iteration, one
//! `info` per chosen move) and never installs a subscriber itself.

use std::time::Duration;

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, ReversiError, Result};
pub use rules::{apply, has_any_legal_move, legal_moves, play, side_to_move, Move};

use eval::{Personality, PhaseTables};
use search::Searcher;

/// Pick a move for `player` within roughly `time_budget_seconds`.
///
/// Uses the default phased tables for the board's size and default search
/// options. Depth 1 always completes, so a budget of `0.0` still returns a
/// legal move.
///
/// # Errors
///
/// - `InvalidTimeBudget` for a negative or non-finite budget
/// - `NoLegalMove` when `player` has to pass
pub fn choose_best_move(board: &Board, player: Player, time_budget_seconds: f64) -> Result<Pos> {
    if !time_budget_seconds.is_finite() || time_budget_seconds < 0.0 {
        return Err(ReversiError::InvalidTimeBudget(time_budget_seconds));
    }
    let time_budget = Duration::try_from_secs_f64(time_budget_seconds)
        .map_err(|_| ReversiError::InvalidTimeBudget(time_budget_seconds))?;

    let tables = PhaseTables::for_personality(Personality::default(), board.size())?;
    let table = tables.select_table(board);
    let result = Searcher::new().choose_best_move(board, player, time_budget, table)?;
    Ok(result.best_move)
}
