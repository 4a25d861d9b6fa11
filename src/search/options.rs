//! Search tuning knobs

use serde::Deserialize;

/// What the search does at a node whose side to move has no legal move while
/// the other side still has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassRule {
    /// Score the node statically, as if it were a leaf.
    #[default]
    Leaf,
    /// Pass the turn and keep searching without consuming depth.
    Continue,
}

/// How iterative deepening picks the move it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Retention {
    /// One best score is kept across all iterations; a deeper iteration only
    /// replaces the move when it finds a strictly higher score.
    #[default]
    RunWide,
    /// The best move of the deepest completed iteration wins.
    LastIteration,
}

/// Options for [`super::Searcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Deepest iteration to run; `None` means only the clock and the number of
    /// empty cells limit the search. Values below 1 are treated as 1.
    pub max_depth: Option<u8>,
    pub pass_rule: PassRule,
    pub retention: Retention,
}

impl SearchOptions {
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_pass_rule(mut self, pass_rule: PassRule) -> Self {
        self.pass_rule = pass_rule;
        self
    }

    pub fn with_retention(mut self, retention: Retention) -> Self {
        self.retention = retention;
        self
    }
}
