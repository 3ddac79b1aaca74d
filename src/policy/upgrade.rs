//! Metabolic Boost research.

use rand::rngs::SmallRng;

use super::{CounterDelta, Directive, Frame, PolicyConfig, PolicyCounters};
use crate::game::{Action, StructureType, Upgrade};

/// Researches Metabolic Boost at the first ready Spawning Pool, once. The
/// started flag is set when the request goes out, not when it is accepted.
pub fn metabolic_boost(
    frame: &Frame<'_>,
    counters: &PolicyCounters,
    config: &PolicyConfig,
    _rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    if counters.metabolic_boost_started
        || snap.vespene < config.upgrade_vespene
        || snap.minerals < config.upgrade_minerals
    {
        return Vec::new();
    }
    let Some(pool) = snap.first_ready(StructureType::SpawningPool) else {
        return Vec::new();
    };
    vec![Directive::single(Action::Research {
        source: pool.tag,
        upgrade: Upgrade::MetabolicBoost,
    })
    .on_submit(CounterDelta::MarkMetabolicBoostStarted)]
}
