//! Agent state between frames.
//!
//! Holds the configuration, the policy counters and the random number
//! generator, and exposes the per-frame callback the host drives.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use crate::evaluator::{evaluate, FrameReport};
use crate::game::{Action, Point, Snapshot};
use crate::host::Host;
use crate::policy::{PolicyConfig, PolicyCounters, PolicyKind};

/// A Zerg agent driven once per simulation frame.
pub struct Agent {
    config: PolicyConfig,
    counters: PolicyCounters,
    rng: SmallRng,
    frames: u64,
}

impl Agent {
    /// Creates an agent with fresh counters. A zero seed draws from entropy.
    pub fn new(config: PolicyConfig) -> Self {
        let rng = if config.seed != 0 {
            SmallRng::seed_from_u64(config.seed)
        } else {
            SmallRng::from_entropy()
        };
        Agent {
            config,
            counters: PolicyCounters::default(),
            rng,
            frames: 0,
        }
    }

    pub fn counters(&self) -> PolicyCounters {
        self.counters
    }

    /// Frames evaluated since creation or the last `new_game`.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Resets the counters for a new game. The RNG keeps its state.
    pub fn new_game(&mut self) {
        self.counters = PolicyCounters::default();
        self.frames = 0;
    }

    /// The per-frame callback: evaluates every policy against `snapshot`,
    /// submits the requests to `host` and keeps the updated counters.
    pub fn on_step<H: Host>(&mut self, snapshot: &Snapshot, host: &mut H) -> FrameReport {
        let before = self.counters;
        let report = evaluate(snapshot, before, &self.config, &mut self.rng, host);
        log_milestones(snapshot.frame, before, &report);
        self.counters = report.counters;
        self.frames += 1;
        report
    }
}

fn log_milestones(frame: u64, before: PolicyCounters, report: &FrameReport) {
    let after = report.counters;
    if after.extractors > before.extractors {
        info!(frame, extractors = after.extractors, "extractor ordered");
    }
    if after.spawning_pool_started && !before.spawning_pool_started {
        info!(frame, "spawning pool marked started");
    }
    if after.metabolic_boost_started && !before.metabolic_boost_started {
        info!(frame, "metabolic boost requested");
    }
    if after.queens > before.queens {
        info!(frame, queens = after.queens, "queen ordered");
    }
    for at in expansions(report) {
        info!(frame, x = at.x, y = at.y, "expansion ordered");
    }
}

/// Where the host accepted an expansion hatchery this frame.
fn expansions(report: &FrameReport) -> impl Iterator<Item = Point> + '_ {
    report
        .outcomes
        .iter()
        .filter(|o| o.policy == PolicyKind::Expansion && o.accepted())
        .filter_map(|o| match o.action {
            Action::Build { at, .. } => Some(at),
            _ => None,
        })
}
