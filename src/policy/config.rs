//! Policy configuration.
//!
//! Every threshold the policies use lives here with the values the bot has
//! always played with as defaults. Configuration is loaded from JSON; any
//! field left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How the queen policy treats an accepted queen request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueenRetry {
    /// Success is never recorded, so a queen is requested every frame while
    /// the other conditions hold. This is how the bot has always behaved: the
    /// success flag it wrote was never read back.
    #[default]
    AlwaysRetry,
    /// Each accepted request counts toward the one-queen-per-hatchery cap.
    StrictOnce,
}

/// Tunable thresholds and cross-policy switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Attack once the hydralisk count exceeds this.
    pub ranged_attack_threshold: usize,
    /// Attack once the zergling count exceeds this.
    pub melee_attack_threshold: usize,
    /// Minerals required before researching Metabolic Boost.
    pub upgrade_minerals: u32,
    /// Vespene required before researching Metabolic Boost.
    pub upgrade_vespene: u32,
    /// Request an overlord when supply left drops below this.
    pub supply_margin: i64,
    /// First distance from the home town hall tried for the Spawning Pool.
    pub pool_offset_start: u32,
    /// Number of consecutive distances tried per frame.
    pub pool_offset_count: u32,
    /// Expand once minerals exceed this.
    pub expansion_minerals: u32,
    pub queen_retry: QueenRetry,
    /// Submitting an expansion also marks the Spawning Pool as started, which
    /// stops further pool placement attempts. Whether that coupling is
    /// intended is undecided, so it can be switched off.
    pub expansion_halts_pool: bool,
    /// RNG seed for random choices (0 = use entropy).
    pub seed: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            ranged_attack_threshold: 10,
            melee_attack_threshold: 50,
            upgrade_minerals: 100,
            upgrade_vespene: 100,
            supply_margin: 2,
            pool_offset_start: 4,
            pool_offset_count: 11,
            expansion_minerals: 400,
            queen_retry: QueenRetry::AlwaysRetry,
            expansion_halts_pool: true,
            seed: 0,
        }
    }
}

impl PolicyConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PolicyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_offset_count == 0 {
            return Err(ConfigError::Invalid(
                "pool_offset_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Distances from the home town hall tried for the Spawning Pool, in order.
    pub fn pool_offsets(&self) -> impl Iterator<Item = f32> {
        let start = self.pool_offset_start;
        (start..start.saturating_add(self.pool_offset_count)).map(|d| d as f32)
    }
}
