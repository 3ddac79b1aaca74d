//! Overlord scouting.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::{Directive, Frame, PolicyConfig, PolicyCounters};
use crate::game::{Action, UnitType};

/// Sends every idle overlord to a random expansion location that is not an
/// enemy start location. Each overlord draws its own destination.
pub fn scout(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    _config: &PolicyConfig,
    rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    let locations = snap.scout_locations();
    if locations.is_empty() {
        return Vec::new();
    }
    let mut directives = Vec::new();
    for overlord in snap.idle_units_of(UnitType::Overlord) {
        if let Some(&to) = locations.choose(rng) {
            directives.push(Directive::single(Action::Move {
                unit: overlord.tag,
                to,
            }));
        }
    }
    directives
}
