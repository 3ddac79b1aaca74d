//! Army attack trigger.
//!
//! Two independent triggers release the army: enough hydralisks, or enough
//! zerglings. Once either holds, every idle zergling and hydralisk is sent at
//! a single target for the frame. There is no grouping and no retreat; units
//! that go idle again are simply sent again on a later frame.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::{Directive, Frame, PolicyConfig, PolicyCounters};
use crate::game::{Action, Point, Snapshot, UnitType};

pub fn attack(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    config: &PolicyConfig,
    rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    if !triggered(snap, config) {
        return Vec::new();
    }
    let Some(target) = attack_target(snap, rng) else {
        return Vec::new();
    };
    snap.units
        .iter()
        .filter(|u| u.kind.is_force() && u.idle)
        .map(|u| Directive::single(Action::Attack { unit: u.tag, target }))
        .collect()
}

/// Whether either attack threshold is exceeded.
pub fn triggered(snap: &Snapshot, config: &PolicyConfig) -> bool {
    snap.unit_count(UnitType::Hydralisk) > config.ranged_attack_threshold
        || snap.unit_count(UnitType::Zergling) > config.melee_attack_threshold
}

/// A random known enemy structure, or the first enemy start location when no
/// structure is known.
pub fn attack_target(snap: &Snapshot, rng: &mut SmallRng) -> Option<Point> {
    snap.enemy_structures
        .choose(rng)
        .or_else(|| snap.enemy_start_locations.first())
        .copied()
}
