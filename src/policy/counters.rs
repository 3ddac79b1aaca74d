//! Counters that persist across frames.
//!
//! These approximate host-observable facts ("an extractor was ordered") so
//! the policies do not repeat requests the snapshot has not caught up with
//! yet. They are never decremented and can drift from the real game, e.g. an
//! accepted extractor whose drone dies on the way still counts.

use serde::{Deserialize, Serialize};

/// Cross-frame policy state, threaded through the evaluator by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyCounters {
    /// Extractor builds the host accepted.
    pub extractors: u32,
    /// A Spawning Pool build was accepted, or an expansion claimed the flag.
    pub spawning_pool_started: bool,
    /// Queen requests the host accepted (only counted under strict-once).
    pub queens: u32,
    /// Metabolic Boost research was requested.
    pub metabolic_boost_started: bool,
}

/// A single monotonic change to [`PolicyCounters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterDelta {
    AddExtractor,
    MarkSpawningPoolStarted,
    AddQueen,
    MarkMetabolicBoostStarted,
}

impl PolicyCounters {
    /// Returns the counters with `delta` applied.
    #[must_use]
    pub fn apply(self, delta: CounterDelta) -> Self {
        let mut next = self;
        match delta {
            CounterDelta::AddExtractor => next.extractors = next.extractors.saturating_add(1),
            CounterDelta::MarkSpawningPoolStarted => next.spawning_pool_started = true,
            CounterDelta::AddQueen => next.queens = next.queens.saturating_add(1),
            CounterDelta::MarkMetabolicBoostStarted => next.metabolic_boost_started = true,
        }
        next
    }
}
