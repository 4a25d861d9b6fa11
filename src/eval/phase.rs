//! Game-phase table selection
//!
//! The phase is a pure function of the number of discs on the board. Phases
//! are listed in ascending order; each one applies while the disc count is
//! below its bound, and the last one has no bound.

use serde::Deserialize;

use crate::board::Board;
use crate::error::{ConfigError, ReversiError};

use super::table::{EvaluationTable, RingWeights};

/// Disc count below which the early table applies
pub const EARLY_BELOW: u32 = 20;
/// Disc count below which the mid-game table applies
pub const MID_BELOW: u32 = 40;

/// Built-in table sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    /// One classic table for the whole game
    Positional,
    /// Early, mid and late tables switched by disc count
    #[default]
    Phased,
}

/// One game phase: its name, exclusive disc-count bound and table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub name: String,
    /// The phase applies while `board.total() < below`; `None` means always.
    pub below: Option<u32>,
    pub table: EvaluationTable,
}

impl Phase {
    pub fn new(name: impl Into<String>, below: Option<u32>, table: EvaluationTable) -> Self {
        Self {
            name: name.into(),
            below,
            table,
        }
    }

    #[inline]
    fn covers(&self, discs: u32) -> bool {
        self.below.map_or(true, |below| discs < below)
    }
}

/// Ordered, validated set of phases. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTables {
    phases: Vec<Phase>,
}

impl PhaseTables {
    /// Validate and wrap a list of phases.
    ///
    /// Requirements: at least one phase, bounds strictly increasing, only the
    /// last phase unbounded, and all tables the same size.
    pub fn new(phases: Vec<Phase>) -> Result<Self, ConfigError> {
        let (last, rest) = phases.split_last().ok_or(ConfigError::EmptyPhases)?;

        if last.below.is_some() {
            return Err(ConfigError::BoundedLastPhase(last.name.clone()));
        }

        let mut previous = 0u32;
        for phase in rest {
            let below = phase
                .below
                .ok_or_else(|| ConfigError::UnboundedPhase(phase.name.clone()))?;
            if below <= previous {
                return Err(ConfigError::PhaseOrder {
                    name: phase.name.clone(),
                    below,
                    previous,
                });
            }
            previous = below;
        }

        let size = last.table.size();
        if let Some(odd) = phases.iter().find(|p| p.table.size() != size) {
            return Err(ConfigError::TableSize {
                table: odd.table.size(),
                board: size,
            });
        }

        Ok(Self { phases })
    }

    /// A single table used for the whole game
    pub fn single(table: EvaluationTable) -> Self {
        Self {
            phases: vec![Phase::new("all", None, table)],
        }
    }

    /// Built-in table set for a board size.
    pub fn for_personality(personality: Personality, size: usize) -> Result<Self, ReversiError> {
        match personality {
            Personality::Positional => Ok(Self::single(EvaluationTable::classic(size)?)),
            Personality::Phased => Ok(Self {
                phases: vec![
                    Phase::new(
                        "early",
                        Some(EARLY_BELOW),
                        EvaluationTable::generate(size, &RingWeights::EARLY)?,
                    ),
                    Phase::new(
                        "mid",
                        Some(MID_BELOW),
                        EvaluationTable::generate(size, &RingWeights::MID)?,
                    ),
                    Phase::new(
                        "late",
                        None,
                        EvaluationTable::generate(size, &RingWeights::LATE)?,
                    ),
                ],
            }),
        }
    }

    /// Board size every table in this set is built for
    #[inline]
    pub fn size(&self) -> usize {
        self.phases[0].table.size()
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Reject boards these tables were not built for.
    pub fn check_board(&self, board: &Board) -> Result<(), ReversiError> {
        if board.size() != self.size() {
            return Err(ReversiError::TableSizeMismatch {
                table: self.size(),
                board: board.size(),
            });
        }
        Ok(())
    }

    /// Phase that applies to `board`.
    pub fn select(&self, board: &Board) -> &Phase {
        let discs = board.total();
        self.phases
            .iter()
            .find(|phase| phase.covers(discs))
            // validated: the last phase is unbounded
            .unwrap_or_else(|| &self.phases[self.phases.len() - 1])
    }

    /// Table that applies to `board`.
    #[inline]
    pub fn select_table(&self, board: &Board) -> &EvaluationTable {
        &self.select(board).table
    }
}

/// Pick the evaluation table for `board` from a phase set.
#[inline]
pub fn select_table<'a>(board: &Board, tables: &'a PhaseTables) -> &'a EvaluationTable {
    tables.select_table(board)
}
