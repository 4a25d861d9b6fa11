//! Evaluation module for reversi positions
//!
//! This module provides the positional evaluation used at the search's leaves:
//! - Weight tables, explicit or generated from a ring profile
//! - Phase selection by disc count
//! - The zero-sum table evaluation itself

pub mod heuristic;
pub mod phase;
pub mod table;

pub use heuristic::evaluate;
pub use phase::{select_table, Personality, Phase, PhaseTables, EARLY_BELOW, MID_BELOW};
pub use table::{EvaluationTable, RingWeights};
