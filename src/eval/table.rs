//! Positional weight tables
//!
//! Every cell carries a signed weight for owning it. Corners are worth the
//! most; the cells next to a corner are negative because taking them tends to
//! hand the corner to the opponent.

use serde::Deserialize;

use crate::board::{is_supported_size, Pos};
use crate::error::{ConfigError, ReversiError};

/// Weights per cell class, used to generate a table for any board size.
///
/// Cells are classified by their distance to the nearest edges:
/// - `corner`: the four corners
/// - `c_square`: edge cells orthogonally next to a corner
/// - `x_square`: the cell diagonally next to a corner
/// - `edge`: every other edge cell
/// - `inner_ring`: every other cell of the second ring
/// - `center`: everything further in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RingWeights {
    pub corner: i32,
    pub c_square: i32,
    pub x_square: i32,
    pub edge: i32,
    pub inner_ring: i32,
    pub center: i32,
}

impl RingWeights {
    /// Single all-game profile
    pub const CLASSIC: RingWeights = RingWeights {
        corner: 100,
        c_square: -20,
        x_square: -50,
        edge: 10,
        inner_ring: -2,
        center: 1,
    };

    /// Opening profile: corners dominate, everything else is mild.
    pub const EARLY: RingWeights = RingWeights {
        corner: 120,
        c_square: -20,
        x_square: -40,
        edge: 10,
        inner_ring: -5,
        center: 5,
    };

    pub const MID: RingWeights = RingWeights {
        corner: 100,
        c_square: -50,
        x_square: -80,
        edge: 20,
        inner_ring: -10,
        center: 15,
    };

    /// Endgame profile: squares near an open corner become very costly.
    pub const LATE: RingWeights = RingWeights {
        corner: 500,
        c_square: -200,
        x_square: -300,
        edge: 50,
        inner_ring: -50,
        center: 0,
    };

    fn weight_for(&self, x: usize, y: usize, size: usize) -> i32 {
        let dx = x.min(size - 1 - x);
        let dy = y.min(size - 1 - y);
        match (dx, dy) {
            (0, 0) => self.corner,
            (0, 1) | (1, 0) => self.c_square,
            (1, 1) => self.x_square,
            _ if dx.min(dy) == 0 => self.edge,
            _ if dx.min(dy) == 1 => self.inner_ring,
            _ => self.center,
        }
    }
}

/// Immutable N×N grid of cell weights, indexed like the board's bitboards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationTable {
    size: usize,
    weights: Vec<i32>,
}

impl EvaluationTable {
    /// Build a table from explicit rows, top row first.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, ConfigError> {
        let size = rows.len();
        if !is_supported_size(size) {
            return Err(ConfigError::InvalidBoardSize(size));
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(ConfigError::TableShape {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
        }
        Ok(Self {
            size,
            weights: rows.into_iter().flatten().collect(),
        })
    }

    /// Generate a table for `size` from a ring profile.
    pub fn generate(size: usize, ring: &RingWeights) -> Result<Self, ReversiError> {
        if !is_supported_size(size) {
            return Err(ReversiError::InvalidBoardSize(size));
        }
        let weights = (0..size * size)
            .map(|idx| ring.weight_for(idx % size, idx / size, size))
            .collect();
        Ok(Self { size, weights })
    }

    /// The classic single table for `size`
    pub fn classic(size: usize) -> Result<Self, ReversiError> {
        Self::generate(size, &RingWeights::CLASSIC)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn weight(&self, pos: Pos) -> i32 {
        self.weights[pos.to_index(self.size)]
    }

    /// Weight by row-major bit index
    #[inline]
    pub fn weight_at(&self, idx: usize) -> i32 {
        self.weights[idx]
    }

    pub fn rows(&self) -> Vec<Vec<i32>> {
        self.weights.chunks(self.size).map(<[i32]>::to_vec).collect()
    }
}
