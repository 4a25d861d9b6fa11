//! Engine configuration loaded from TOML.
//!
//! ```toml
//! board_size = 6
//! time_budget_ms = 500
//! max_depth = 6
//! pass_rule = "continue"
//!
//! [[phases]]
//! name = "opening"
//! below = 16
//! ring = { corner = 120, c_square = -20, x_square = -40, edge = 10, inner_ring = -5, center = 5 }
//!
//! [[phases]]
//! name = "rest"
//! ring = { corner = 500, c_square = -200, x_square = -300, edge = 50, inner_ring = -50, center = 0 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::board::is_supported_size;
use crate::error::ConfigError;
use crate::eval::{EvaluationTable, Personality, Phase, PhaseTables, RingWeights};
use crate::search::{PassRule, Retention, SearchOptions};

fn default_board_size() -> usize {
    8
}

fn default_time_budget_ms() -> u64 {
    1000
}

/// Top-level engine configuration.
///
/// Every field is optional in the file. When `phases` is empty the built-in
/// table set of `personality` is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default = "default_board_size")]
    pub board_size: usize,

    /// Wall-clock budget per move, in milliseconds.
    #[serde(default = "default_time_budget_ms")]
    pub time_budget_ms: u64,

    /// Depth cap for iterative deepening; `0` selects the greedy placement agent.
    #[serde(default)]
    pub max_depth: Option<u8>,

    #[serde(default)]
    pub pass_rule: PassRule,

    #[serde(default)]
    pub retention: Retention,

    #[serde(default)]
    pub personality: Personality,

    #[serde(default)]
    pub phases: Vec<PhaseConfig>,
}

/// One phase as written in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseConfig {
    pub name: String,
    #[serde(default)]
    pub below: Option<u32>,
    /// Explicit weights, top row first
    #[serde(default)]
    pub table: Option<Vec<Vec<i32>>>,
    /// Ring profile expanded to the board size
    #[serde(default)]
    pub ring: Option<RingWeights>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            time_budget_ms: default_time_budget_ms(),
            max_depth: None,
            pass_rule: PassRule::default(),
            retention: Retention::default(),
            personality: Personality::default(),
            phases: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        debug!(
            board_size = config.board_size,
            phases = config.phases.len(),
            "config parsed"
        );
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(board_size = config.board_size, "config loaded");
        Ok(config)
    }

    #[inline]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_depth: self.max_depth,
            pass_rule: self.pass_rule,
            retention: self.retention,
        }
    }

    /// Build and validate the phase tables for the configured board size.
    pub fn phase_tables(&self) -> Result<PhaseTables, ConfigError> {
        if !is_supported_size(self.board_size) {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }

        if self.phases.is_empty() {
            return Ok(PhaseTables::for_personality(self.personality, self.board_size)?);
        }

        let phases = self
            .phases
            .iter()
            .map(|phase| phase.build(self.board_size))
            .collect::<Result<Vec<_>, _>>()?;
        PhaseTables::new(phases)
    }
}

impl PhaseConfig {
    fn build(&self, size: usize) -> Result<Phase, ConfigError> {
        let table = match (&self.table, &self.ring) {
            (Some(rows), None) => EvaluationTable::from_rows(rows.clone())?,
            (None, Some(ring)) => EvaluationTable::generate(size, ring)?,
            _ => return Err(ConfigError::TableSource(self.name.clone())),
        };
        if table.size() != size {
            return Err(ConfigError::TableSize {
                table: table.size(),
                board: size,
            });
        }
        Ok(Phase::new(self.name.clone(), self.below, table))
    }
}
