//! Action requests sent to the host.
//!
//! Every variant is fire-and-forget: the host answers only whether it accepted
//! the request, never whether the ordered thing eventually happened.

use serde::{Deserialize, Serialize};

use super::cost::Cost;
use super::point::Point;
use super::unit::{AbilityId, StructureType, Tag, UnitType, Upgrade};

/// A single command for the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Produce a unit from a larva or a town hall.
    Train { source: Tag, unit: UnitType },

    /// Build a structure at an exact spot. Extractors target a geyser position.
    Build {
        builder: Tag,
        structure: StructureType,
        at: Point,
    },

    /// Build a structure somewhere near a point; the host picks builder and spot.
    BuildNear { structure: StructureType, near: Point },

    /// Morph an existing structure into another (Hatchery into Lair).
    Morph { source: Tag, into: StructureType },

    Move { unit: Tag, to: Point },

    Attack { unit: Tag, target: Point },

    Research { source: Tag, upgrade: Upgrade },

    /// Use a unit-targeted ability.
    Cast {
        caster: Tag,
        ability: AbilityId,
        target: Tag,
    },

    /// Let the host rebalance workers across bases and extractors.
    DistributeWorkers,
}

impl Action {
    /// Resources the host will charge if it accepts the request.
    pub fn cost(&self) -> Cost {
        match self {
            Action::Train { unit, .. } => unit.cost(),
            Action::Build { structure, .. } | Action::BuildNear { structure, .. } => {
                structure.cost()
            }
            Action::Morph { into, .. } => into.cost(),
            Action::Research { upgrade, .. } => upgrade.cost(),
            Action::Move { .. }
            | Action::Attack { .. }
            | Action::Cast { .. }
            | Action::DistributeWorkers => Cost::new(0, 0, 0),
        }
    }

    /// The unit or structure that carries out the request, if named.
    pub fn actor(&self) -> Option<Tag> {
        match self {
            Action::Train { source, .. }
            | Action::Morph { source, .. }
            | Action::Research { source, .. } => Some(*source),
            Action::Build { builder, .. } => Some(*builder),
            Action::Move { unit, .. } | Action::Attack { unit, .. } => Some(*unit),
            Action::Cast { caster, .. } => Some(*caster),
            Action::BuildNear { .. } | Action::DistributeWorkers => None,
        }
    }
}
