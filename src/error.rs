//! Error types for the reversi engine

use thiserror::Error;

use crate::board::Player;

/// Errors raised by the board, rules and search layers.
///
/// All of these are caller mistakes or game-state conditions that the game
/// loop has to react to; none are retried inside the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReversiError {
    /// Coordinate outside `[0, size)`.
    #[error("coordinate ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    /// Root search requested for a player without any legal placement.
    #[error("{0:?} has no legal move")]
    NoLegalMove(Player),

    /// A move that the move generator would not produce for this board.
    #[error("({x}, {y}) is not a legal move for {player:?}")]
    IllegalMoveApplied { x: usize, y: usize, player: Player },

    /// Board sizes must be even and between 4 and 8.
    #[error("unsupported board size {0} (expected an even size in 4..=8)")]
    InvalidBoardSize(usize),

    #[error("invalid board text: {0}")]
    InvalidBoardText(String),

    #[error("time budget must be a finite, non-negative number of seconds (got {0})")]
    InvalidTimeBudget(f64),

    #[error("evaluation table is {table}x{table} but the board is {board}x{board}")]
    TableSizeMismatch { table: usize, board: usize },
}

/// Errors raised while loading or validating an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("at least one phase is required")]
    EmptyPhases,

    /// Only the last phase may omit its `below` bound.
    #[error("phase `{0}` has no upper bound but is not the last phase")]
    UnboundedPhase(String),

    /// The last phase must be unbounded so every disc count maps to a table.
    #[error("last phase `{0}` must not set `below`")]
    BoundedLastPhase(String),

    #[error("phase `{name}` bound {below} must be greater than the previous bound {previous}")]
    PhaseOrder { name: String, below: u32, previous: u32 },

    #[error("evaluation table must be square (row {row} has {len} cells, expected {expected})")]
    TableShape { row: usize, len: usize, expected: usize },

    #[error("evaluation table is {table}x{table} but the board is {board}x{board}")]
    TableSize { table: usize, board: usize },

    #[error("unsupported board size {0} (expected an even size in 4..=8)")]
    InvalidBoardSize(usize),

    /// A phase needs exactly one of `table` or `ring`.
    #[error("phase `{0}` must set exactly one of `table` or `ring`")]
    TableSource(String),

    #[error(transparent)]
    Engine(#[from] ReversiError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReversiError>;
