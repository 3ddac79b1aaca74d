//! A rule-checking host for replaying recorded snapshots.
//!
//! `ReplayHost` stands in for the game when no game is running: it validates
//! each request against the snapshot it was built from, charges accepted
//! requests against a running bank, and records what it accepted. Unlike the
//! policies it does reserve resources across the frame, so a later request
//! can be rejected because an earlier one spent the money.

use std::collections::HashSet;

use crate::game::{Action, Point, Snapshot, StructureType, Tag, UnitType};

use super::{Host, Rejection};

/// Default minimum distance between a new structure and existing ones.
pub const DEFAULT_CLEARANCE: f32 = 3.0;

/// Replays a single snapshot as if it were the live game.
#[derive(Debug, Clone)]
pub struct ReplayHost {
    minerals: u32,
    vespene: u32,
    supply_left: i64,
    units: Vec<(Tag, UnitType)>,
    structures: Vec<(Tag, StructureType, bool)>,
    occupied: Vec<Point>,
    geysers: Vec<Point>,
    blocked: Vec<Point>,
    clearance: f32,
    busy: HashSet<Tag>,
    accepted: Vec<Action>,
}

impl ReplayHost {
    /// Creates a host mirroring `snapshot`.
    pub fn new(snapshot: &Snapshot) -> Self {
        ReplayHost {
            minerals: snapshot.minerals,
            vespene: snapshot.vespene,
            supply_left: snapshot.supply_left(),
            units: snapshot.units.iter().map(|u| (u.tag, u.kind)).collect(),
            structures: snapshot
                .structures
                .iter()
                .map(|s| (s.tag, s.kind, s.ready))
                .collect(),
            occupied: snapshot.structures.iter().map(|s| s.position).collect(),
            geysers: snapshot.vespene_geysers.clone(),
            blocked: Vec::new(),
            clearance: DEFAULT_CLEARANCE,
            busy: HashSet::new(),
            accepted: Vec::new(),
        }
    }

    /// Sets the minimum distance kept from existing structures and blocked spots.
    pub fn with_clearance(mut self, clearance: f32) -> Self {
        self.clearance = clearance;
        self
    }

    /// Marks spots (terrain, enemy units) where nothing can be placed.
    pub fn with_blocked(mut self, blocked: Vec<Point>) -> Self {
        self.blocked = blocked;
        self
    }

    /// Requests accepted so far, in submission order.
    pub fn accepted(&self) -> &[Action] {
        &self.accepted
    }

    pub fn minerals(&self) -> u32 {
        self.minerals
    }

    fn unit_kind(&self, tag: Tag) -> Option<UnitType> {
        self.units.iter().find(|(t, _)| *t == tag).map(|(_, k)| *k)
    }

    fn structure_kind(&self, tag: Tag) -> Option<(StructureType, bool)> {
        self.structures
            .iter()
            .find(|(t, _, _)| *t == tag)
            .map(|(_, k, ready)| (*k, *ready))
    }

    fn is_clear(&self, at: Point) -> bool {
        self.occupied
            .iter()
            .chain(self.blocked.iter())
            .all(|p| p.distance(at) >= self.clearance)
    }

    /// Checks the actor named by `action` exists and can take the order.
    fn check_actor(&self, action: &Action) -> Result<(), Rejection> {
        match *action {
            Action::Train { source, unit } => {
                if unit.from_larva() {
                    match self.unit_kind(source) {
                        Some(UnitType::Larva) => Ok(()),
                        _ => Err(Rejection::new(format!("{source} is not a larva"))),
                    }
                } else {
                    match self.structure_kind(source) {
                        Some((kind, true)) if kind.is_townhall() => Ok(()),
                        _ => Err(Rejection::new(format!("{source} is not a ready town hall"))),
                    }
                }
            }
            Action::Build { builder, .. } => match self.unit_kind(builder) {
                Some(UnitType::Drone) => Ok(()),
                _ => Err(Rejection::new(format!("{builder} is not a drone"))),
            },
            Action::Morph { source, into } => match (self.structure_kind(source), into) {
                (Some((StructureType::Hatchery, true)), StructureType::Lair)
                | (Some((StructureType::Lair, true)), StructureType::Hive) => Ok(()),
                _ => Err(Rejection::new(format!("{source} cannot morph into {into:?}"))),
            },
            Action::Research { source, .. } => match self.structure_kind(source) {
                Some((StructureType::SpawningPool, true)) => Ok(()),
                _ => Err(Rejection::new(format!("{source} cannot research"))),
            },
            Action::Move { unit, .. } | Action::Attack { unit, .. } => {
                if self.unit_kind(unit).is_some() {
                    Ok(())
                } else {
                    Err(Rejection::new(format!("unknown unit {unit}")))
                }
            }
            Action::Cast { caster, target, .. } => {
                if self.unit_kind(caster) != Some(UnitType::Queen) {
                    return Err(Rejection::new(format!("{caster} is not a queen")));
                }
                match self.structure_kind(target) {
                    Some((kind, _)) if kind.is_townhall() => Ok(()),
                    _ => Err(Rejection::new(format!("{target} is not a town hall"))),
                }
            }
            Action::BuildNear { .. } => {
                if self.units.iter().any(|(_, k)| *k == UnitType::Drone) {
                    Ok(())
                } else {
                    Err(Rejection::new("no drone available"))
                }
            }
            Action::DistributeWorkers => Ok(()),
        }
    }
}

impl Host for ReplayHost {
    fn can_place(&mut self, structure: StructureType, at: Point) -> bool {
        if structure == StructureType::Extractor {
            return self.geysers.contains(&at) && !self.occupied.contains(&at);
        }
        self.is_clear(at)
    }

    fn submit(&mut self, action: &Action) -> Result<(), Rejection> {
        self.check_actor(action)?;

        // Production, construction and casting occupy the actor for the frame;
        // movement orders simply replace each other.
        let actor = action.actor();
        if let Some(tag) = actor {
            let is_order = matches!(action, Action::Move { .. } | Action::Attack { .. });
            if !is_order && self.busy.contains(&tag) {
                return Err(Rejection::new(format!("{tag} already has an order")));
            }
        }

        if let Action::Build { structure, at, .. } = *action {
            if !self.can_place(structure, at) {
                return Err(Rejection::new(format!("cannot place {structure:?} there")));
            }
        }

        let cost = action.cost();
        if self.minerals < cost.minerals {
            return Err(Rejection::new("not enough minerals"));
        }
        if self.vespene < cost.vespene {
            return Err(Rejection::new("not enough vespene"));
        }
        if cost.supply > 0 && self.supply_left < i64::from(cost.supply) {
            return Err(Rejection::new("not enough supply"));
        }

        self.minerals -= cost.minerals;
        self.vespene -= cost.vespene;
        self.supply_left -= i64::from(cost.supply);
        if let Action::Build { at, .. } = *action {
            self.occupied.push(at);
        }
        if let Some(tag) = actor {
            self.busy.insert(tag);
        }
        self.accepted.push(*action);
        Ok(())
    }
}
