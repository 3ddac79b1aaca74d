//! Queens: larva injection and queen production.

use rand::rngs::SmallRng;

use super::{CounterDelta, Directive, Frame, PolicyConfig, PolicyCounters, QueenRetry};
use crate::game::{AbilityId, Action, StructureType, UnitType};

/// Every idle queen that can inject does so on the home town hall.
pub fn inject_larva(
    frame: &Frame<'_>,
    _counters: &PolicyCounters,
    _config: &PolicyConfig,
    _rng: &mut SmallRng,
) -> Vec<Directive> {
    let Some(home) = frame.home else {
        return Vec::new();
    };
    frame
        .snapshot
        .idle_units_of(UnitType::Queen)
        .filter(|q| q.abilities.contains(&AbilityId::InjectLarva))
        .map(|q| {
            Directive::single(Action::Cast {
                caster: q.tag,
                ability: AbilityId::InjectLarva,
                target: home.tag,
            })
        })
        .collect()
}

/// Trains a queen at the home town hall while the queen count is below the
/// hatchery count. Only [`QueenRetry::StrictOnce`] records accepted queens;
/// otherwise the count never moves and a queen is requested every frame.
pub fn train_queen(
    frame: &Frame<'_>,
    counters: &PolicyCounters,
    config: &PolicyConfig,
    _rng: &mut SmallRng,
) -> Vec<Directive> {
    let snap = frame.snapshot;
    let Some(home) = frame.home else {
        return Vec::new();
    };
    if counters.queens as usize >= snap.structure_count(StructureType::Hatchery)
        || !snap.ready_exists(StructureType::SpawningPool)
        || !snap.can_afford(UnitType::Queen.cost())
    {
        return Vec::new();
    }
    let directive = Directive::single(Action::Train {
        source: home.tag,
        unit: UnitType::Queen,
    });
    match config.queen_retry {
        QueenRetry::AlwaysRetry => vec![directive],
        QueenRetry::StrictOnce => vec![directive.on_accept(CounterDelta::AddQueen)],
    }
}
