//! Game rules for reversi
//!
//! This module implements the rule set:
//! - Flip detection along the eight compass lines
//! - Legal move generation
//! - Move application
//! - Pass and end-of-game detection

pub mod apply;
pub mod flips;
pub mod legal;
pub mod outcome;

// Re-exports for convenient access
pub use apply::{apply, play};
pub(crate) use apply::apply_unchecked;
pub use flips::{flips_any, flips_for, flips_in_direction};
pub use legal::{has_any_legal_move, is_legal, legal_moves, legal_positions, Move};
pub use outcome::{disc_difference, is_game_over, side_to_move, winner};
