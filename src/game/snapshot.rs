//! Per-frame game snapshot.
//!
//! The host builds one `Snapshot` before every policy evaluation and discards
//! it afterwards. Nothing in here is owned by the agent; the query helpers
//! mirror the questions the policies ask of the host's unit collections.

use serde::{Deserialize, Serialize};

use super::cost::Cost;
use super::point::Point;
use super::unit::{AbilityId, StructureType, Tag, UnitType};

/// An owned structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub tag: Tag,
    pub kind: StructureType,
    pub position: Point,
    /// Construction (or morph) finished.
    pub ready: bool,
    /// Workers currently mining for this town hall. Zero for other structures.
    #[serde(default)]
    pub assigned_harvesters: u32,
    /// Worker count the host considers saturated for this town hall.
    #[serde(default)]
    pub ideal_harvesters: u32,
}

/// An owned mobile unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub tag: Tag,
    pub kind: UnitType,
    pub position: Point,
    /// No order currently assigned.
    pub idle: bool,
    /// Abilities the host reports as castable right now.
    #[serde(default)]
    pub abilities: Vec<AbilityId>,
}

/// Read-only view of the game handed to the agent once per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Host game loop counter.
    #[serde(default)]
    pub frame: u64,
    pub minerals: u32,
    pub vespene: u32,
    pub supply_used: u32,
    pub supply_cap: u32,
    #[serde(default)]
    pub structures: Vec<Structure>,
    #[serde(default)]
    pub units: Vec<Unit>,
    /// Structure kinds already ordered but not yet present in `structures`.
    #[serde(default)]
    pub pending: Vec<StructureType>,
    #[serde(default)]
    pub enemy_structures: Vec<Point>,
    #[serde(default)]
    pub expansion_locations: Vec<Point>,
    #[serde(default)]
    pub enemy_start_locations: Vec<Point>,
    #[serde(default)]
    pub vespene_geysers: Vec<Point>,
    pub map_center: Point,
}

impl Snapshot {
    /// Creates an empty snapshot with no resources, units or map data.
    pub fn empty(frame: u64, map_center: Point) -> Self {
        Snapshot {
            frame,
            minerals: 0,
            vespene: 0,
            supply_used: 0,
            supply_cap: 0,
            structures: Vec::new(),
            units: Vec::new(),
            pending: Vec::new(),
            enemy_structures: Vec::new(),
            expansion_locations: Vec::new(),
            enemy_start_locations: Vec::new(),
            vespene_geysers: Vec::new(),
            map_center,
        }
    }

    fn next_tag(&self) -> Tag {
        let units = self.units.iter().map(|u| u.tag);
        let structures = self.structures.iter().map(|s| s.tag);
        units.chain(structures).max().map_or(1, |t| t + 1)
    }

    /// Adds a structure with a fresh tag and returns the tag.
    pub fn add_structure(&mut self, kind: StructureType, position: Point, ready: bool) -> Tag {
        let tag = self.next_tag();
        self.structures.push(Structure {
            tag,
            kind,
            position,
            ready,
            assigned_harvesters: 0,
            ideal_harvesters: 0,
        });
        tag
    }

    /// Adds a mobile unit with a fresh tag and returns the tag.
    pub fn add_unit(&mut self, kind: UnitType, position: Point, idle: bool) -> Tag {
        let tag = self.next_tag();
        self.units.push(Unit {
            tag,
            kind,
            position,
            idle,
            abilities: Vec::new(),
        });
        tag
    }

    /// Remaining supply. Negative when the cap dropped below usage.
    pub fn supply_left(&self) -> i64 {
        i64::from(self.supply_cap) - i64::from(self.supply_used)
    }

    /// Whether the current bank covers `cost`. Supply is only checked for
    /// costs that consume supply.
    pub fn can_afford(&self, cost: Cost) -> bool {
        self.minerals >= cost.minerals
            && self.vespene >= cost.vespene
            && (cost.supply == 0 || self.supply_left() >= i64::from(cost.supply))
    }

    pub fn units_of(&self, kind: UnitType) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.kind == kind)
    }

    pub fn idle_units_of(&self, kind: UnitType) -> impl Iterator<Item = &Unit> {
        self.units_of(kind).filter(|u| u.idle)
    }

    pub fn unit_count(&self, kind: UnitType) -> usize {
        self.units_of(kind).count()
    }

    pub fn larvae(&self) -> Vec<&Unit> {
        self.units_of(UnitType::Larva).collect()
    }

    pub fn workers(&self) -> Vec<&Unit> {
        self.units_of(UnitType::Drone).collect()
    }

    pub fn structures_of(&self, kind: StructureType) -> impl Iterator<Item = &Structure> {
        self.structures.iter().filter(move |s| s.kind == kind)
    }

    /// Town halls (Hatchery, Lair, Hive) in snapshot order.
    pub fn townhalls(&self) -> Vec<&Structure> {
        self.structures
            .iter()
            .filter(|s| s.kind.is_townhall())
            .collect()
    }

    pub fn structure_count(&self, kind: StructureType) -> usize {
        self.structures_of(kind).count()
    }

    /// At least one structure of this kind exists, finished or not.
    pub fn exists(&self, kind: StructureType) -> bool {
        self.structures_of(kind).next().is_some()
    }

    /// The first finished structure of this kind.
    pub fn first_ready(&self, kind: StructureType) -> Option<&Structure> {
        self.structures_of(kind).find(|s| s.ready)
    }

    pub fn ready_exists(&self, kind: StructureType) -> bool {
        self.first_ready(kind).is_some()
    }

    pub fn already_pending(&self, kind: StructureType) -> bool {
        self.pending.contains(&kind)
    }

    /// Expansion locations that are not a known enemy start location.
    pub fn scout_locations(&self) -> Vec<Point> {
        self.expansion_locations
            .iter()
            .copied()
            .filter(|p| !self.enemy_start_locations.contains(p))
            .collect()
    }

    pub fn unit(&self, tag: Tag) -> Option<&Unit> {
        self.units.iter().find(|u| u.tag == tag)
    }
}
