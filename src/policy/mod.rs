//! Decision policies.
//!
//! Each policy step is a plain function of the frame, the counters and the
//! configuration that returns directives for the evaluator to submit. Steps
//! never talk to the host themselves, which keeps them testable without one.
//! [`POLICY_ORDER`] fixes the sequence they run in every frame.

pub mod attack;
pub mod config;
pub mod counters;
pub mod expansion;
pub mod hydralisk_rush;
pub mod queens;
pub mod scouting;
pub mod supply;
pub mod upgrade;
pub mod workers;
pub mod zergling_rush;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::game::{Action, Point, Snapshot, Structure, StructureType, UnitType};

pub use config::{ConfigError, PolicyConfig, QueenRetry};
pub use counters::{CounterDelta, PolicyCounters};

/// Everything a policy may look at during one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub snapshot: &'a Snapshot,
    /// The town hall picked for this frame. `None` when no town hall is left.
    pub home: Option<&'a Structure>,
}

/// The policy a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Workers,
    Scouting,
    Attack,
    Upgrade,
    Supply,
    ZerglingRush,
    HydraliskRush,
    Expansion,
    Queens,
}

/// One candidate submission, optionally guarded by a placement query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attempt {
    pub action: Action,
    /// Ask the host whether this structure fits at this spot before submitting.
    pub placement: Option<(StructureType, Point)>,
}

/// A request produced by a policy.
///
/// Attempts are tried in order until the host accepts one. `on_submit` is
/// applied as soon as an attempt is actually submitted, whatever the answer;
/// `on_accept` only when the host accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub attempts: Vec<Attempt>,
    pub on_submit: Option<CounterDelta>,
    pub on_accept: Option<CounterDelta>,
}

impl Directive {
    /// A directive with a single unguarded attempt.
    pub fn single(action: Action) -> Self {
        Directive {
            attempts: vec![Attempt {
                action,
                placement: None,
            }],
            on_submit: None,
            on_accept: None,
        }
    }

    /// A directive with a single attempt submitted only if the structure fits.
    pub fn placed(action: Action, structure: StructureType, at: Point) -> Self {
        Directive {
            attempts: vec![Attempt {
                action,
                placement: Some((structure, at)),
            }],
            on_submit: None,
            on_accept: None,
        }
    }

    /// A directive trying each attempt until one is accepted.
    pub fn first_accepted(attempts: Vec<Attempt>) -> Self {
        Directive {
            attempts,
            on_submit: None,
            on_accept: None,
        }
    }

    #[must_use]
    pub fn on_submit(mut self, delta: CounterDelta) -> Self {
        self.on_submit = Some(delta);
        self
    }

    #[must_use]
    pub fn on_accept(mut self, delta: CounterDelta) -> Self {
        self.on_accept = Some(delta);
        self
    }

    /// The action of the first attempt.
    pub fn action(&self) -> Option<&Action> {
        self.attempts.first().map(|a| &a.action)
    }
}

/// Trains one `unit` from a random larva if a larva exists and the unit is
/// affordable.
pub(crate) fn train_from_larva(
    snapshot: &Snapshot,
    unit: UnitType,
    rng: &mut SmallRng,
) -> Option<Directive> {
    if !snapshot.can_afford(unit.cost()) {
        return None;
    }
    let larva = snapshot.larvae().choose(rng).map(|l| l.tag)?;
    Some(Directive::single(Action::Train {
        source: larva,
        unit,
    }))
}

/// Signature shared by all policy steps.
pub type PolicyFn =
    fn(&Frame<'_>, &PolicyCounters, &PolicyConfig, &mut SmallRng) -> Vec<Directive>;

/// A named step in the per-frame evaluation.
#[derive(Clone, Copy)]
pub struct PolicyStep {
    pub policy: PolicyKind,
    pub name: &'static str,
    pub run: PolicyFn,
}

/// The fixed order of evaluation. Counter changes made by a step are visible
/// to every later step of the same frame.
pub const POLICY_ORDER: &[PolicyStep] = &[
    PolicyStep {
        policy: PolicyKind::Workers,
        name: "distribute_workers",
        run: workers::distribute,
    },
    PolicyStep {
        policy: PolicyKind::Workers,
        name: "train_drone",
        run: workers::train_drone,
    },
    PolicyStep {
        policy: PolicyKind::Workers,
        name: "first_extractor",
        run: workers::first_extractor,
    },
    PolicyStep {
        policy: PolicyKind::Workers,
        name: "more_extractors",
        run: workers::more_extractors,
    },
    PolicyStep {
        policy: PolicyKind::Scouting,
        name: "scout",
        run: scouting::scout,
    },
    PolicyStep {
        policy: PolicyKind::Attack,
        name: "attack",
        run: attack::attack,
    },
    PolicyStep {
        policy: PolicyKind::Upgrade,
        name: "metabolic_boost",
        run: upgrade::metabolic_boost,
    },
    PolicyStep {
        policy: PolicyKind::Supply,
        name: "overlord",
        run: supply::overlord,
    },
    PolicyStep {
        policy: PolicyKind::ZerglingRush,
        name: "spawning_pool",
        run: zergling_rush::spawning_pool,
    },
    PolicyStep {
        policy: PolicyKind::ZerglingRush,
        name: "zerglings",
        run: zergling_rush::zerglings,
    },
    PolicyStep {
        policy: PolicyKind::HydraliskRush,
        name: "lair",
        run: hydralisk_rush::lair,
    },
    PolicyStep {
        policy: PolicyKind::HydraliskRush,
        name: "hydralisk_den",
        run: hydralisk_rush::hydralisk_den,
    },
    PolicyStep {
        policy: PolicyKind::HydraliskRush,
        name: "hydralisks",
        run: hydralisk_rush::hydralisks,
    },
    PolicyStep {
        policy: PolicyKind::Expansion,
        name: "expand",
        run: expansion::expand,
    },
    PolicyStep {
        policy: PolicyKind::Queens,
        name: "inject_larva",
        run: queens::inject_larva,
    },
    PolicyStep {
        policy: PolicyKind::Queens,
        name: "train_queen",
        run: queens::train_queen,
    },
];
