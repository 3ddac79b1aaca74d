//! Worker production, worker balancing and gas extraction.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::{train_from_larva, CounterDelta, Directive, Frame, PolicyConfig, PolicyCounters};
use crate::game::{Action, Point, Snapshot, StructureType, UnitType};

/// Asks the host to rebalance workers. Requested every frame.
pub fn distribute(
    _frame: &Frame<'_>,
    _counters: &PolicyCounters,
    _config: &PolicyConfig,
    _rng: &mut SmallRng,
) -> Vec<Directive> {
    vec![Directive::single(Action::DistributeWorkers)]
}

/// Trains one drone while the home town hall is below its ideal harvester count.
pub fn train_drone(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    _config: &PolicyConfig,
    rng: &mut SmallRng,
) -> Vec<Directive> {
    let Some(home) = frame.home else {
        return Vec::new();
    };
    if home.assigned_harvesters >= home.ideal_harvesters {
        return Vec::new();
    }
    train_from_larva(frame.snapshot, UnitType::Drone, rng)
        .into_iter()
        .collect()
}

/// Orders the very first extractor. There is no affordability gate: the
/// host rejects it until the minerals are there and it is retried next frame.
pub fn first_extractor(
    frame: &Frame<'_>,
    counters: &PolicyCounters,
    _config: &PolicyConfig,
    rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    if counters.extractors != 0 || snap.townhalls().is_empty() {
        return Vec::new();
    }
    extractor_directive(snap, rng).into_iter().collect()
}

/// Adds extractors up to one per hatchery once a Lair is ready.
pub fn more_extractors(
    frame: &Frame<'_>,
    counters: &PolicyCounters,
    _config: &PolicyConfig,
    rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    let hatcheries = snap.structure_count(StructureType::Hatchery);
    if counters.extractors as usize >= hatcheries || !snap.ready_exists(StructureType::Lair) {
        return Vec::new();
    }
    if !snap.can_afford(StructureType::Extractor.cost()) {
        return Vec::new();
    }
    extractor_directive(snap, rng).into_iter().collect()
}

/// A random drone builds an extractor on the geyser closest to it.
fn extractor_directive(snap: &Snapshot, rng: &mut SmallRng) -> Option<Directive> {
    let drone = *snap.workers().choose(rng)?;
    let geyser = closest(&snap.vespene_geysers, drone.position)?;
    let action = Action::Build {
        builder: drone.tag,
        structure: StructureType::Extractor,
        at: geyser,
    };
    Some(Directive::single(action).on_accept(CounterDelta::AddExtractor))
}

fn closest(points: &[Point], to: Point) -> Option<Point> {
    points
        .iter()
        .copied()
        .min_by(|a, b| a.distance(to).total_cmp(&b.distance(to)))
}
