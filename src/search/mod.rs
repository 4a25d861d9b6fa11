//! Search module for the reversi AI
//!
//! Contains:
//! - Alpha-Beta minimax with iterative deepening
//! - Search options (pass handling, move retention, depth cap)
//! - Greedy single-ply placement

pub mod alphabeta;
pub mod options;
pub mod placement;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use options::{PassRule, Retention, SearchOptions};
pub use placement::best_placement;
