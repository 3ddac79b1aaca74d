//! Supply management.

use rand::rngs::SmallRng;

use super::{train_from_larva, Directive, Frame, PolicyConfig, PolicyCounters};
use crate::game::UnitType;

/// Trains one overlord whenever supply left drops below the margin.
pub fn overlord(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    config: &PolicyConfig,
    rng: &mut SmallRng,
) -> Vec<Directive> {
    if frame.snapshot.supply_left() >= config.supply_margin {
        return Vec::new();
    }
    train_from_larva(frame.snapshot, UnitType::Overlord, rng)
        .into_iter()
        .collect()
}
