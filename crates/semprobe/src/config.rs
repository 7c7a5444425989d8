//! Test configuration.
//!
//! Controls how long the host may spend reaching idle, which semantics tree
//! nodes are resolved against by default, and whether checks are logged.

use crate::result::SemprobeResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default idle timeout (5 seconds)
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 5000;

/// Default cap on recomposition passes per idle wait
pub const DEFAULT_MAX_RECOMPOSITIONS: usize = 100;

/// Configuration shared by a [`crate::Screen`], its host and its nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemprobeConfig {
    /// Upper bound on a single `wait_for_idle`
    pub idle_timeout_ms: u64,
    /// Upper bound on recomposition passes in a single `wait_for_idle`
    pub max_recompositions: usize,
    /// Resolve nodes against the unmerged tree unless a node overrides it
    pub use_unmerged_tree: bool,
    /// Emit a `tracing` event for every check and action
    pub log_checks: bool,
}

impl Default for SemprobeConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            max_recompositions: DEFAULT_MAX_RECOMPOSITIONS,
            use_unmerged_tree: false,
            log_checks: true,
        }
    }
}

impl SemprobeConfig {
    /// Create a config with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> SemprobeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SemprobeResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> SemprobeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the idle timeout
    #[must_use]
    pub const fn with_idle_timeout_ms(mut self, ms: u64) -> Self {
        self.idle_timeout_ms = ms;
        self
    }

    /// Set the recomposition cap
    #[must_use]
    pub const fn with_max_recompositions(mut self, passes: usize) -> Self {
        self.max_recompositions = passes;
        self
    }

    /// Resolve against the unmerged tree by default
    #[must_use]
    pub const fn with_unmerged_tree(mut self, unmerged: bool) -> Self {
        self.use_unmerged_tree = unmerged;
        self
    }

    /// Enable or disable check logging
    #[must_use]
    pub const fn with_log_checks(mut self, log: bool) -> Self {
        self.log_checks = log;
        self
    }

    /// Idle timeout as a [`Duration`]
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }
}
