//! Main AI engine tying tables, options and search together
//!
//! The engine is the configured agent a game loop talks to. It owns the phase
//! tables and search options but never the board: every call gets the current
//! position and returns one placement.
//!
//! 1. **Phase selection**: pick the evaluation table from the root position
//! 2. **Placement**: with `max_depth == 0`, play the best-weighted legal cell
//! 3. **Alpha-Beta**: otherwise run the iterative-deepening search
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use reversi::{AIEngine, Board, Player};
//!
//! let mut engine = AIEngine::new(6).unwrap();
//! engine.set_time_budget(Duration::from_millis(50));
//!
//! let board = Board::new(6).unwrap();
//! let result = engine.choose_best_move_with_stats(&board, Player::Black).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::error::{ConfigError, Result};
use crate::eval::{evaluate, Personality, PhaseTables};
use crate::rules::play;
use crate::search::{best_placement, SearchOptions, SearchResult, Searcher};

/// Default wall-clock budget per move
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(1);

/// Which agent produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Greedy single-ply placement by table weight
    Placement,
    /// Iterative-deepening alpha-beta search
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Score from the mover's perspective
    pub score: i32,
    pub search_type: SearchType,
    /// Name of the phase whose table was used
    pub phase: String,
    /// Deepest completed search iteration (1 for placement)
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_alphabeta(result: SearchResult, phase: &str) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            phase: phase.to_owned(),
            depth: result.depth,
            time_ms: result.elapsed.as_millis() as u64,
            nodes: result.stats.nodes,
        }
    }

    #[inline]
    fn placement(pos: Pos, score: i32, phase: &str, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: pos,
            score,
            search_type: SearchType::Placement,
            phase: phase.to_owned(),
            depth: 1,
            time_ms,
            nodes,
        }
    }
}

/// Configured reversi agent.
///
/// # Configuration
///
/// - Phase tables (a built-in personality or a loaded config)
/// - Search options: depth cap, pass rule, retention policy
/// - Time budget per move
#[derive(Debug, Clone)]
pub struct AIEngine {
    tables: PhaseTables,
    searcher: Searcher,
    time_budget: Duration,
}

impl AIEngine {
    /// Engine with the default (phased) personality for `size`.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_personality(Personality::default(), size)
    }

    pub fn with_personality(personality: Personality, size: usize) -> Result<Self> {
        let tables = PhaseTables::for_personality(personality, size)?;
        Ok(Self::with_tables(tables, SearchOptions::default(), DEFAULT_TIME_BUDGET))
    }

    #[must_use]
    pub fn with_tables(tables: PhaseTables, options: SearchOptions, time_budget: Duration) -> Self {
        Self {
            tables,
            searcher: Searcher::with_options(options),
            time_budget,
        }
    }

    /// Build an engine from a parsed configuration.
    pub fn from_config(config: &EngineConfig) -> std::result::Result<Self, ConfigError> {
        let tables = config.phase_tables()?;
        debug!(
            size = tables.size(),
            phases = tables.phases().len(),
            budget_ms = config.time_budget_ms,
            "engine configured"
        );
        Ok(Self::with_tables(
            tables,
            config.search_options(),
            config.time_budget(),
        ))
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.tables.size()
    }

    pub fn tables(&self) -> &PhaseTables {
        &self.tables
    }

    pub fn options(&self) -> &SearchOptions {
        self.searcher.options()
    }

    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }

    pub fn set_time_budget(&mut self, time_budget: Duration) {
        self.time_budget = time_budget;
    }

    /// Cap the search depth; `Some(0)` switches to greedy placement.
    pub fn set_max_depth(&mut self, max_depth: Option<u8>) {
        let options = SearchOptions {
            max_depth,
            ..*self.searcher.options()
        };
        self.searcher.set_options(options);
    }

    /// Best move for `player` on `board`.
    ///
    /// Use [`Self::choose_best_move_with_stats`] for search statistics.
    pub fn choose_best_move(&mut self, board: &Board, player: Player) -> Result<Pos> {
        self.choose_best_move_with_stats(board, player)
            .map(|result| result.best_move)
    }

    /// Best move with the statistics of the search that found it.
    ///
    /// # Errors
    ///
    /// - `TableSizeMismatch` when the board is not the size the tables were built for
    /// - `NoLegalMove` when `player` has to pass
    #[instrument(skip(self, board), fields(size = board.size(), discs = board.total()))]
    pub fn choose_best_move_with_stats(
        &mut self,
        board: &Board,
        player: Player,
    ) -> Result<MoveResult> {
        self.tables.check_board(board)?;
        let phase = self.tables.select(board);

        if self.searcher.options().max_depth == Some(0) {
            let start = Instant::now();
            let pos = best_placement(board, player, &phase.table)?;
            let after = play(board, pos.x as usize, pos.y as usize, player)?;
            let score = evaluate(&after, player, &phase.table)?;
            return Ok(MoveResult::placement(
                pos,
                score,
                &phase.name,
                start.elapsed().as_millis() as u64,
                1,
            ));
        }

        let result = self
            .searcher
            .choose_best_move(board, player, self.time_budget, &phase.table)?;
        Ok(MoveResult::from_alphabeta(result, &phase.name))
    }
}
