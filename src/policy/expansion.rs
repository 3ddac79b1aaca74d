//! Expanding to new bases.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::{CounterDelta, Directive, Frame, PolicyConfig, PolicyCounters};
use crate::game::{Action, StructureType};

/// Builds a hatchery at a random scout location once minerals pile up.
///
/// When `expansion_halts_pool` is set, submitting the hatchery also marks
/// the Spawning Pool as started, so pool placement stops for good even if no
/// pool was ever built.
pub fn expand(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    config: &PolicyConfig,
    rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    if snap.minerals <= config.expansion_minerals {
        return Vec::new();
    }
    let workers = snap.workers();
    let Some(drone) = workers.choose(rng) else {
        return Vec::new();
    };
    let Some(&at) = snap.scout_locations().choose(rng) else {
        return Vec::new();
    };
    let action = Action::Build {
        builder: drone.tag,
        structure: StructureType::Hatchery,
        at,
    };
    let directive = Directive::placed(action, StructureType::Hatchery, at);
    if config.expansion_halts_pool {
        vec![directive.on_submit(CounterDelta::MarkSpawningPoolStarted)]
    } else {
        vec![directive]
    }
}
