//! Per-frame policy evaluation.
//!
//! Runs every step of [`POLICY_ORDER`] against one snapshot, submits the
//! resulting directives to the host and threads the counters through. A
//! rejected request changes nothing beyond its `on_submit` delta; the policy
//! that produced it will simply ask again on a later frame.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::game::{Action, Snapshot};
use crate::host::{Host, Rejection};
use crate::policy::{
    Directive, Frame, PolicyConfig, PolicyCounters, PolicyKind, PolicyStep, POLICY_ORDER,
};

/// One submitted request and the host's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub policy: PolicyKind,
    pub action: Action,
    /// `None` when the host accepted the request.
    pub rejection: Option<Rejection>,
}

impl Outcome {
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Everything one frame produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Submissions in the order they were made.
    pub outcomes: Vec<Outcome>,
    /// Counters after the frame.
    pub counters: PolicyCounters,
}

impl FrameReport {
    /// Every action submitted, accepted or not.
    pub fn submitted(&self) -> impl Iterator<Item = &Action> {
        self.outcomes.iter().map(|o| &o.action)
    }
}

/// Evaluates all policies for one frame.
///
/// The home town hall is drawn at random among the owned town halls before
/// any policy runs. Steps run in fixed order; counters changed by a step are
/// visible to the steps after it.
pub fn evaluate<H: Host>(
    snapshot: &Snapshot,
    counters: PolicyCounters,
    config: &PolicyConfig,
    rng: &mut SmallRng,
    host: &mut H,
) -> FrameReport {
    let townhalls = snapshot.townhalls();
    let home = townhalls.choose(rng).copied();
    let frame = Frame { snapshot, home };

    let mut counters = counters;
    let mut outcomes = Vec::new();
    for step in POLICY_ORDER {
        let directives = (step.run)(&frame, &counters, config, rng);
        for directive in directives {
            counters = execute(step, directive, counters, host, &mut outcomes);
        }
    }

    trace!(
        frame = snapshot.frame,
        submitted = outcomes.len(),
        accepted = outcomes.iter().filter(|o| o.accepted()).count(),
        "frame evaluated"
    );
    FrameReport { outcomes, counters }
}

/// Submits the attempts of one directive until the host accepts one.
fn execute<H: Host>(
    step: &PolicyStep,
    directive: Directive,
    counters: PolicyCounters,
    host: &mut H,
    outcomes: &mut Vec<Outcome>,
) -> PolicyCounters {
    let policy = step.policy;
    let mut counters = counters;
    let mut submitted = false;
    for attempt in directive.attempts {
        if let Some((structure, at)) = attempt.placement {
            if !host.can_place(structure, at) {
                trace!(step = step.name, ?structure, x = at.x, y = at.y, "placement refused");
                continue;
            }
        }

        if !submitted {
            submitted = true;
            if let Some(delta) = directive.on_submit {
                counters = counters.apply(delta);
            }
        }

        let result = host.submit(&attempt.action);
        match &result {
            Ok(()) => trace!(step = step.name, action = ?attempt.action, "accepted"),
            Err(e) => debug!(step = step.name, action = ?attempt.action, "{}", e),
        }
        let accepted = result.is_ok();
        outcomes.push(Outcome {
            policy,
            action: attempt.action,
            rejection: result.err(),
        });
        if accepted {
            if let Some(delta) = directive.on_accept {
                counters = counters.apply(delta);
            }
            break;
        }
    }
    counters
}
