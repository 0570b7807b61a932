//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default length bound on a recommendation list.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Ordering among candidates with equal scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Lower participant ID first. Deterministic regardless of store.
    #[default]
    IdAscending,
    /// Keep the order the store enumerated candidates in.
    Enumeration,
}

/// Tunables for one `Recommender`.
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of IDs returned by `recommend()`.
    pub max_results: usize,
    pub tie_break: TieBreak,
    /// Eligible pairs scoring below this are dropped. 0 keeps every
    /// eligible pair (the lowest eligible score is 3).
    pub min_score: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            tie_break: TieBreak::default(),
            min_score: 0,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::Config("max_results must be at least 1".into()));
        }
        Ok(())
    }
}
