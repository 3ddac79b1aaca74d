//! Resource costs for units, structures and upgrades.

use serde::{Deserialize, Serialize};

use super::unit::{StructureType, UnitType, Upgrade};

/// The price of an action in both currencies plus supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cost {
    pub minerals: u32,
    pub vespene: u32,
    pub supply: u32,
}

impl Cost {
    pub const fn new(minerals: u32, vespene: u32, supply: u32) -> Self {
        Cost {
            minerals,
            vespene,
            supply,
        }
    }
}

impl UnitType {
    /// Cost of producing one unit of this type. Zerglings hatch in pairs and
    /// are priced per pair.
    pub const fn cost(self) -> Cost {
        match self {
            UnitType::Larva => Cost::new(0, 0, 0),
            UnitType::Drone => Cost::new(50, 0, 1),
            UnitType::Overlord => Cost::new(100, 0, 0),
            UnitType::Zergling => Cost::new(50, 0, 1),
            UnitType::Hydralisk => Cost::new(100, 50, 2),
            UnitType::Queen => Cost::new(150, 0, 2),
        }
    }
}

impl StructureType {
    /// Cost of building (or morphing into) this structure.
    pub const fn cost(self) -> Cost {
        match self {
            StructureType::Hatchery => Cost::new(300, 0, 0),
            StructureType::Lair => Cost::new(150, 100, 0),
            StructureType::Hive => Cost::new(200, 150, 0),
            StructureType::Extractor => Cost::new(25, 0, 0),
            StructureType::SpawningPool => Cost::new(200, 0, 0),
            StructureType::HydraliskDen => Cost::new(100, 100, 0),
        }
    }
}

impl Upgrade {
    pub const fn cost(self) -> Cost {
        match self {
            Upgrade::MetabolicBoost => Cost::new(100, 100, 0),
        }
    }
}
