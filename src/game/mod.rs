//! Game-state types read from the host.
//!
//! Contains the per-frame snapshot, the unit and structure identifiers it
//! refers to, the cost table used for affordability checks, and the action
//! requests the agent sends back.

pub mod action;
pub mod cost;
pub mod point;
pub mod snapshot;
pub mod unit;

pub use action::Action;
pub use cost::Cost;
pub use point::Point;
pub use snapshot::{Snapshot, Structure, Unit};
pub use unit::{AbilityId, StructureType, Tag, UnitType, Upgrade};
