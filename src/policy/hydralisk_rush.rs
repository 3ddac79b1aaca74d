//! Lair, Hydralisk Den and continuous hydralisk production.
//!
//! A three-stage gate: a ready Spawning Pool unlocks the Lair, a ready Lair
//! unlocks the Den, a ready Den unlocks hydralisks. The structures are
//! requested once in the sense that a request is only made while neither an
//! existing nor a pending one is visible in the snapshot.

use rand::rngs::SmallRng;

use super::{train_from_larva, Directive, Frame, PolicyConfig, PolicyCounters};
use crate::game::{Action, StructureType, UnitType};

/// Morphs the first hatchery into a Lair once the pool is ready.
pub fn lair(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    _config: &PolicyConfig,
    _rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    if !snap.ready_exists(StructureType::SpawningPool)
        || snap.exists(StructureType::Lair)
        || snap.already_pending(StructureType::Lair)
        || !snap.can_afford(StructureType::Lair.cost())
    {
        return Vec::new();
    }
    let Some(hatchery) = snap.structures_of(StructureType::Hatchery).next() else {
        return Vec::new();
    };
    vec![Directive::single(Action::Morph {
        source: hatchery.tag,
        into: StructureType::Lair,
    })]
}

/// Builds a Hydralisk Den near the first town hall once the Lair is ready.
pub fn hydralisk_den(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    _config: &PolicyConfig,
    _rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    if !snap.ready_exists(StructureType::Lair)
        || snap.exists(StructureType::HydraliskDen)
        || snap.already_pending(StructureType::HydraliskDen)
        || !snap.can_afford(StructureType::HydraliskDen.cost())
    {
        return Vec::new();
    }
    let Some(townhall) = snap.townhalls().first().copied() else {
        return Vec::new();
    };
    vec![Directive::single(Action::BuildNear {
        structure: StructureType::HydraliskDen,
        near: townhall.position,
    })]
}

pub fn hydralisks(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    _config: &PolicyConfig,
    rng: &mut SmallRng,
) -> Vec<Directive> {
    if !frame.snapshot.ready_exists(StructureType::HydraliskDen) {
        return Vec::new();
    }
    train_from_larva(frame.snapshot, UnitType::Hydralisk, rng)
        .into_iter()
        .collect()
}
