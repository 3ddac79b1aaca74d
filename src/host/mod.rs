//! The boundary to the host framework.
//!
//! The host owns the simulation and answers two questions during a frame:
//! whether a structure fits at a spot, and whether it accepts an action.
//! Both answers are synchronous.

pub mod replay;

use serde::{Deserialize, Serialize};

use crate::game::{Action, Point, StructureType};

pub use replay::ReplayHost;

/// The host declined an action request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("action rejected: {reason}")]
pub struct Rejection {
    pub reason: String,
}

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Rejection {
            reason: reason.into(),
        }
    }
}

/// Per-frame callback surface offered by the host framework.
pub trait Host {
    /// Whether `structure` could be placed at `at` right now.
    fn can_place(&mut self, structure: StructureType, at: Point) -> bool;

    /// Submits an action. `Ok(())` means accepted, not completed.
    fn submit(&mut self, action: &Action) -> Result<(), Rejection>;
}
