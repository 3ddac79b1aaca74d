//! Unit, structure, ability and upgrade identifiers.
//!
//! Only the Zerg identifiers the policies reason about are modelled; the host
//! is expected to filter everything else out of the snapshot.

use serde::{Deserialize, Serialize};

/// Host-assigned identifier of a unit or structure.
pub type Tag = u64;

/// The type of an owned mobile unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Larva,
    Drone,
    Overlord,
    Zergling,
    Hydralisk,
    Queen,
}

impl UnitType {
    /// Whether the unit counts toward the attacking force.
    pub const fn is_force(self) -> bool {
        matches!(self, UnitType::Zergling | UnitType::Hydralisk)
    }

    /// Whether the unit hatches from a larva (as opposed to a town hall).
    pub const fn from_larva(self) -> bool {
        matches!(
            self,
            UnitType::Drone | UnitType::Overlord | UnitType::Zergling | UnitType::Hydralisk
        )
    }
}

/// The type of an owned structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    Hatchery,
    Lair,
    Hive,
    Extractor,
    SpawningPool,
    HydraliskDen,
}

impl StructureType {
    /// Whether this structure is a town hall (resource drop-off and queen source).
    pub const fn is_townhall(self) -> bool {
        matches!(
            self,
            StructureType::Hatchery | StructureType::Lair | StructureType::Hive
        )
    }
}

/// Abilities the host may report as available on a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityId {
    InjectLarva,
    Transfusion,
    BuildCreepTumor,
}

/// Researchable upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Upgrade {
    /// Zergling movement speed, researched at the Spawning Pool.
    MetabolicBoost,
}
