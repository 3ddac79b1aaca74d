//! Early Spawning Pool and continuous zergling production.

use rand::rngs::SmallRng;

use super::{
    train_from_larva, Attempt, CounterDelta, Directive, Frame, PolicyConfig, PolicyCounters,
};
use crate::game::{Action, StructureType, UnitType};

/// Places the Spawning Pool as early as possible.
///
/// Candidate spots lie on the line from the home town hall toward the map
/// center at each configured offset. They are tried in order until the host
/// accepts one. Nothing is remembered between frames: if all of them fail,
/// next frame starts again from the first offset.
pub fn spawning_pool(
    frame: &Frame<'_>,
    counters: &PolicyCounters,
    config: &PolicyConfig,
    _rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    if counters.spawning_pool_started || !snap.can_afford(StructureType::SpawningPool.cost()) {
        return Vec::new();
    }
    let Some(home) = frame.home else {
        return Vec::new();
    };
    let workers = snap.workers();
    if workers.is_empty() {
        return Vec::new();
    }

    let mut attempts = Vec::new();
    for offset in config.pool_offsets() {
        let at = home.position.towards(snap.map_center, offset);
        let closest = workers
            .iter()
            .min_by(|a, b| a.position.distance(at).total_cmp(&b.position.distance(at)));
        if let Some(drone) = closest {
            attempts.push(Attempt {
                action: Action::Build {
                    builder: drone.tag,
                    structure: StructureType::SpawningPool,
                    at,
                },
                placement: Some((StructureType::SpawningPool, at)),
            });
        }
    }
    vec![Directive::first_accepted(attempts).on_accept(CounterDelta::MarkSpawningPoolStarted)]
}

/// Trains a pair of zerglings every frame once a Spawning Pool is ready.
pub fn zerglings(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    _config: &PolicyConfig,
    rng: &mut SmallRng,
) -> Vec<Directive> {
    if !frame.snapshot.ready_exists(StructureType::SpawningPool) {
        return Vec::new();
    }
    train_from_larva(frame.snapshot, UnitType::Zergling, rng)
        .into_iter()
        .collect()
}
