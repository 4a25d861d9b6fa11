//! Alpha-Beta minimax with iterative deepening
//!
//! This module implements the core search algorithm for the reversi AI.
//!
//! # Features
//!
//! - Minimax with an explicit maximizing flag and alpha-beta cutoffs
//! - Iterative deepening bounded by wall-clock time, checked once per
//!   completed iteration
//! - Copy-per-branch: every child position is its own `Board` value
//! - Moves are searched in generator order; ties go to the first move found
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use reversi::board::{Board, Player};
//! use reversi::eval::EvaluationTable;
//! use reversi::search::{SearchOptions, Searcher};
//!
//! let board = Board::new(8).unwrap();
//! let table = EvaluationTable::classic(8).unwrap();
//! let mut searcher = Searcher::with_options(SearchOptions::default().with_max_depth(3));
//!
//! let result = searcher
//!     .choose_best_move(&board, Player::Black, Duration::from_millis(100), &table)
//!     .unwrap();
//! println!("Best move: {}", result.best_move);
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Player, Pos};
use crate::error::{ReversiError, Result};
use crate::eval::{heuristic, EvaluationTable};
use crate::rules::{apply_unchecked, has_any_legal_move, legal_moves, Move};

use super::options::{PassRule, Retention, SearchOptions};

/// Infinity score for alpha-beta bounds. Well beyond any table sum and safe
/// to negate.
pub const INF: i32 = 1_000_000_000;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root children included
    pub nodes: u64,
    /// Nodes scored by the static evaluator
    pub leaves: u64,
    /// Sibling loops stopped by `beta <= alpha`
    pub beta_cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Pos,
    /// Score of `best_move` from the mover's perspective
    pub score: i32,
    /// Deepest completed iteration
    pub depth: u8,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

/// Single-threaded alpha-beta searcher.
///
/// Holds only options and per-search statistics; positions and tables are
/// passed into every call.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    options: SearchOptions,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            stats: SearchStats::default(),
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    /// Statistics of the most recent search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Minimax value of `board` searched `depth` plies deep.
    ///
    /// Scores are always from `player`'s perspective; `maximizing` says whether
    /// `player` (true) or `opponent` (false) is to move at this node. The
    /// result equals plain minimax for any window that contains it.
    ///
    /// # Errors
    ///
    /// [`ReversiError::TableSizeMismatch`] when `table` does not fit `board`.
    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        player: Player,
        opponent: Player,
        table: &EvaluationTable,
    ) -> Result<i32> {
        check_table(board, table)?;
        Ok(self.alphabeta(board, depth, alpha, beta, maximizing, player, opponent, table))
    }

    #[allow(clippy::too_many_arguments)]
    fn alphabeta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        player: Player,
        opponent: Player,
        table: &EvaluationTable,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.leaf(board, player, table);
        }

        let mover = if maximizing { player } else { opponent };
        let moves = legal_moves(board, mover);

        if moves.is_empty() {
            // Neither side can move: game over
            if !has_any_legal_move(board, if maximizing { opponent } else { player }) {
                return self.leaf(board, player, table);
            }
            return match self.options.pass_rule {
                PassRule::Leaf => self.leaf(board, player, table),
                PassRule::Continue => {
                    self.alphabeta(board, depth, alpha, beta, !maximizing, player, opponent, table)
                }
            };
        }

        if maximizing {
            let mut value = -INF;
            for (i, mov) in moves.iter().enumerate() {
                let child = apply_unchecked(board, mov, mover);
                let score =
                    self.alphabeta(&child, depth - 1, alpha, beta, false, player, opponent, table);
                value = value.max(score);
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.record_cutoff(i);
                    break;
                }
            }
            value
        } else {
            let mut value = INF;
            for (i, mov) in moves.iter().enumerate() {
                let child = apply_unchecked(board, mov, mover);
                let score =
                    self.alphabeta(&child, depth - 1, alpha, beta, true, player, opponent, table);
                value = value.min(score);
                beta = beta.min(value);
                if beta <= alpha {
                    self.record_cutoff(i);
                    break;
                }
            }
            value
        }
    }

    /// Pick a move for `player` by iterative deepening.
    ///
    /// Depth 1 always runs to completion, so even a zero budget yields a legal
    /// move. The clock is read only between iterations: an iteration that has
    /// started always finishes, which can overrun the budget.
    ///
    /// # Errors
    ///
    /// [`ReversiError::NoLegalMove`] when `player` cannot move; the caller
    /// handles the pass.
    #[instrument(
        skip(self, board, table),
        fields(size = board.size(), budget_ms = time_budget.as_millis() as u64)
    )]
    pub fn choose_best_move(
        &mut self,
        board: &Board,
        player: Player,
        time_budget: Duration,
        table: &EvaluationTable,
    ) -> Result<SearchResult> {
        let start = Instant::now();
        self.stats = SearchStats::default();
        check_table(board, table)?;

        let moves = legal_moves(board, player);
        if moves.is_empty() {
            return Err(ReversiError::NoLegalMove(player));
        }

        let max_depth = self.options.max_depth.unwrap_or(u8::MAX).max(1);
        // Every ply that consumes depth fills a cell, so iterations past the
        // number of empty cells see the same tree.
        #[allow(clippy::cast_possible_truncation)]
        let horizon = board.empties().clamp(1, u32::from(u8::MAX)) as u8;

        let mut best: Option<(Pos, i32)> = None;
        let mut depth = 1u8;
        loop {
            let (iter_move, iter_score) = self.search_root(board, &moves, player, depth, table);

            best = match (self.options.retention, best) {
                (Retention::RunWide, Some((pos, score))) if iter_score <= score => {
                    Some((pos, score))
                }
                _ => Some((iter_move, iter_score)),
            };

            let elapsed = start.elapsed();
            debug!(
                depth,
                best = %iter_move,
                score = iter_score,
                nodes = self.stats.nodes,
                elapsed_ms = elapsed.as_millis() as u64,
                "iteration complete"
            );

            if elapsed >= time_budget || depth >= max_depth || depth >= horizon {
                break;
            }
            depth += 1;
        }

        let elapsed = start.elapsed();
        if !time_budget.is_zero() && elapsed > time_budget * 2 {
            warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                depth, "last iteration overran the time budget"
            );
        }

        // `best` is set by the first iteration, and there is at least one move
        let (best_move, score) = best.unwrap_or((moves[0].pos, -INF));
        info!(
            %best_move,
            score,
            depth,
            nodes = self.stats.nodes,
            first_move_rate = self.stats.first_move_rate(),
            "move chosen"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            elapsed,
            stats: self.stats.clone(),
        })
    }

    /// One full iteration: score every root move at `depth`.
    ///
    /// Returns the first move with the highest score. Each root move is scored
    /// with the opponent minimizing; the running best is passed down as alpha,
    /// which keeps the scores of moves that could improve on it exact.
    fn search_root(
        &mut self,
        board: &Board,
        moves: &[Move],
        player: Player,
        depth: u8,
        table: &EvaluationTable,
    ) -> (Pos, i32) {
        let opponent = player.opponent();
        let mut best_move = moves[0].pos;
        let mut best_score = -INF;

        for mov in moves {
            let child = apply_unchecked(board, mov, player);
            let score = self.alphabeta(
                &child,
                depth - 1,
                best_score,
                INF,
                false,
                player,
                opponent,
                table,
            );
            if score > best_score {
                best_score = score;
                best_move = mov.pos;
            }
        }

        (best_move, best_score)
    }

    /// Run a single iteration at `depth` outside the deepening loop.
    pub fn search_depth(
        &mut self,
        board: &Board,
        player: Player,
        depth: u8,
        table: &EvaluationTable,
    ) -> Result<(Pos, i32)> {
        check_table(board, table)?;
        let moves = legal_moves(board, player);
        if moves.is_empty() {
            return Err(ReversiError::NoLegalMove(player));
        }
        Ok(self.search_root(board, &moves, player, depth.max(1), table))
    }

    #[inline]
    fn leaf(&mut self, board: &Board, player: Player, table: &EvaluationTable) -> i32 {
        self.stats.leaves += 1;
        heuristic::score(board, player, table)
    }

    #[inline]
    fn record_cutoff(&mut self, move_index: usize) {
        self.stats.beta_cutoffs += 1;
        if move_index == 0 {
            self.stats.first_move_cutoffs += 1;
        }
    }
}

fn check_table(board: &Board, table: &EvaluationTable) -> Result<()> {
    if board.size() != table.size() {
        return Err(ReversiError::TableSizeMismatch {
            table: table.size(),
            board: board.size(),
        });
    }
    Ok(())
}
