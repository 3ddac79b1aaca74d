//! Behavioral properties of the full per-frame evaluation.
//!
//! Each test builds a snapshot, runs `evaluate` against a scripted host and
//! inspects what was submitted.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use broodmind::evaluator::{evaluate, FrameReport};
use broodmind::game::{AbilityId, Action, Point, Snapshot, StructureType, UnitType};
use broodmind::host::{Host, Rejection};
use broodmind::policy::{PolicyConfig, PolicyCounters, QueenRetry};

const HOME: Point = Point::new(20.0, 20.0);
const CENTER: Point = Point::new(64.0, 64.0);
const ENEMY_START: Point = Point::new(110.0, 110.0);

/// Accepts everything except the listed kinds of request.
#[derive(Default)]
struct ScriptedHost {
    reject_training: bool,
    reject_builds: bool,
    refuse_placement: bool,
}

impl Host for ScriptedHost {
    fn can_place(&mut self, _structure: StructureType, _at: Point) -> bool {
        !self.refuse_placement
    }

    fn submit(&mut self, action: &Action) -> Result<(), Rejection> {
        match action {
            Action::Train { .. } if self.reject_training => Err(Rejection::new("no larva")),
            Action::Build { .. } if self.reject_builds => Err(Rejection::new("builder busy")),
            _ => Ok(()),
        }
    }
}

/// One saturated, ready hatchery with larvae and drones; nothing else.
fn base() -> Snapshot {
    let mut snap = Snapshot::empty(500, CENTER);
    snap.minerals = 300;
    snap.vespene = 0;
    snap.supply_used = 20;
    snap.supply_cap = 30;
    snap.add_structure(StructureType::Hatchery, HOME, true);
    snap.structures[0].assigned_harvesters = 16;
    snap.structures[0].ideal_harvesters = 16;
    snap.add_unit(UnitType::Larva, Point::new(20.0, 18.0), true);
    snap.add_unit(UnitType::Larva, Point::new(21.0, 18.0), true);
    snap.add_unit(UnitType::Drone, Point::new(24.0, 20.0), false);
    snap.enemy_start_locations = vec![ENEMY_START];
    snap
}

fn run(
    snap: &Snapshot,
    counters: PolicyCounters,
    config: &PolicyConfig,
    host: &mut ScriptedHost,
) -> FrameReport {
    let mut rng = SmallRng::seed_from_u64(7);
    evaluate(snap, counters, config, &mut rng, host)
}

fn started() -> PolicyCounters {
    // Past the opening: pool placed, first extractor ordered.
    PolicyCounters {
        extractors: 1,
        spawning_pool_started: true,
        ..PolicyCounters::default()
    }
}

fn trained(report: &FrameReport, unit: UnitType) -> usize {
    report
        .submitted()
        .filter(|a| matches!(a, Action::Train { unit: u, .. } if *u == unit))
        .count()
}

fn attacks(report: &FrameReport) -> Vec<(u64, Point)> {
    report
        .submitted()
        .filter_map(|a| match *a {
            Action::Attack { unit, target } => Some((unit, target)),
            _ => None,
        })
        .collect()
}

fn with_army(zerglings: usize, hydralisks: usize) -> Snapshot {
    let mut snap = base();
    for i in 0..zerglings {
        snap.add_unit(UnitType::Zergling, Point::new(40.0, i as f32), true);
    }
    for i in 0..hydralisks {
        snap.add_unit(UnitType::Hydralisk, Point::new(42.0, i as f32), true);
    }
    snap
}

#[test]
fn exactly_one_drone_when_undersaturated() {
    let mut snap = base();
    snap.structures[0].assigned_harvesters = 8;
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    assert_eq!(trained(&report, UnitType::Drone), 1);
}

#[test]
fn extractor_counter_never_exceeds_bases() {
    let mut snap = base();
    snap.add_structure(StructureType::Lair, Point::new(80.0, 20.0), true);
    snap.add_structure(StructureType::Hatchery, Point::new(20.0, 80.0), true);
    snap.add_unit(UnitType::Drone, Point::new(22.0, 80.0), false);
    snap.vespene_geysers = vec![
        Point::new(26.0, 24.0),
        Point::new(26.0, 84.0),
        Point::new(84.0, 24.0),
    ];

    let mut counters = PolicyCounters::default();
    let config = PolicyConfig::default();
    for _ in 0..20 {
        let report = run(&snap, counters, &config, &mut ScriptedHost::default());
        counters = report.counters;
        assert!(counters.extractors as usize <= snap.townhalls().len());
    }
    assert_eq!(counters.extractors, 2);
}

#[test]
fn rejected_extractor_is_retried() {
    let mut snap = base();
    snap.vespene_geysers = vec![Point::new(26.0, 24.0)];
    let config = PolicyConfig::default();
    let host = &mut ScriptedHost {
        reject_builds: true,
        ..ScriptedHost::default()
    };
    let report = run(&snap, PolicyCounters::default(), &config, host);
    assert_eq!(report.counters.extractors, 0);

    let report = run(&snap, report.counters, &config, &mut ScriptedHost::default());
    assert_eq!(report.counters.extractors, 1);
}

#[test]
fn zerglings_alone_trigger_the_attack() {
    let snap = with_army(51, 0);
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    assert_eq!(attacks(&report).len(), 51);
}

#[test]
fn hydralisks_alone_trigger_the_attack() {
    let snap = with_army(49, 11);
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    let attacks = attacks(&report);
    assert_eq!(attacks.len(), 60);
    let mut units: Vec<u64> = attacks.iter().map(|(u, _)| *u).collect();
    units.sort_unstable();
    units.dedup();
    assert_eq!(units.len(), 60, "each idle unit is ordered once per frame");
}

#[test]
fn both_triggers_still_one_order_per_unit() {
    let snap = with_army(51, 11);
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    assert_eq!(attacks(&report).len(), 62);
}

#[test]
fn attack_falls_back_to_enemy_start() {
    let snap = with_army(51, 0);
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    assert!(attacks(&report).iter().all(|(_, target)| *target == ENEMY_START));
}

#[test]
fn attack_targets_one_known_structure_per_frame() {
    let mut snap = with_army(51, 0);
    snap.enemy_structures = vec![Point::new(100.0, 90.0), Point::new(90.0, 100.0)];
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    let attacks = attacks(&report);
    let target = attacks[0].1;
    assert!(snap.enemy_structures.contains(&target));
    assert!(attacks.iter().all(|(_, t)| *t == target));
}

#[test]
fn upgrade_requested_at_most_once() {
    let mut snap = base();
    snap.vespene = 200;
    snap.add_structure(StructureType::SpawningPool, Point::new(14.0, 26.0), true);
    let config = PolicyConfig::default();

    let mut counters = started();
    let mut research = 0;
    for _ in 0..5 {
        let host = &mut ScriptedHost::default();
        let report = run(&snap, counters, &config, host);
        research += report
            .submitted()
            .filter(|a| matches!(a, Action::Research { .. }))
            .count();
        counters = report.counters;
    }
    assert_eq!(research, 1);
    assert!(counters.metabolic_boost_started);
}

#[test]
fn supply_block_gets_one_overlord() {
    let mut snap = base();
    snap.supply_used = 29;
    snap.add_structure(StructureType::SpawningPool, Point::new(14.0, 26.0), true);
    let queen = snap.add_unit(UnitType::Queen, Point::new(21.0, 21.0), true);
    if let Some(q) = snap.units.iter_mut().find(|u| u.tag == queen) {
        q.abilities = vec![AbilityId::InjectLarva];
    }
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    assert_eq!(trained(&report, UnitType::Overlord), 1);
    // Steps before and after the supply step still submitted.
    assert_eq!(report.submitted().next(), Some(&Action::DistributeWorkers));
    assert_eq!(trained(&report, UnitType::Zergling), 1);
    assert!(report
        .submitted()
        .any(|a| matches!(a, Action::Cast { caster, .. } if *caster == queen)));
}

#[test]
fn failed_pool_placement_restarts_next_frame() {
    let snap = base();
    let config = PolicyConfig::default();
    let host = &mut ScriptedHost {
        refuse_placement: true,
        ..ScriptedHost::default()
    };
    let report = run(&snap, PolicyCounters::default(), &config, host);
    assert!(!report.counters.spawning_pool_started);
    assert!(!report
        .submitted()
        .any(|a| matches!(a, Action::Build { structure: StructureType::SpawningPool, .. })));

    let report = run(&snap, report.counters, &config, &mut ScriptedHost::default());
    assert!(report.counters.spawning_pool_started);
    let pool_at = report.submitted().find_map(|a| match *a {
        Action::Build {
            structure: StructureType::SpawningPool,
            at,
            ..
        } => Some(at),
        _ => None,
    });
    assert_eq!(pool_at, Some(HOME.towards(CENTER, 4.0)));
}

#[test]
fn expansion_marks_the_pool_started() {
    let mut snap = base();
    snap.minerals = 500;
    snap.expansion_locations = vec![Point::new(60.0, 20.0), ENEMY_START];
    let host = &mut ScriptedHost {
        reject_builds: true,
        ..ScriptedHost::default()
    };
    let report = run(&snap, PolicyCounters::default(), &PolicyConfig::default(), host);
    // Every build was rejected, yet the expansion still claimed the pool flag.
    assert!(report.counters.spawning_pool_started);

    let config = PolicyConfig {
        expansion_halts_pool: false,
        ..PolicyConfig::default()
    };
    let host = &mut ScriptedHost {
        reject_builds: true,
        ..ScriptedHost::default()
    };
    let report = run(&snap, PolicyCounters::default(), &config, host);
    assert!(!report.counters.spawning_pool_started);
}

#[test]
fn queens_repeat_unless_strict() {
    let mut snap = base();
    snap.add_structure(StructureType::SpawningPool, Point::new(14.0, 26.0), true);

    let mut counters = started();
    for _ in 0..3 {
        let report = run(&snap, counters, &PolicyConfig::default(), &mut ScriptedHost::default());
        assert_eq!(trained(&report, UnitType::Queen), 1);
        counters = report.counters;
    }
    assert_eq!(counters.queens, 0);

    let strict = PolicyConfig {
        queen_retry: QueenRetry::StrictOnce,
        ..PolicyConfig::default()
    };
    let mut counters = started();
    let mut queens = 0;
    for _ in 0..3 {
        let report = run(&snap, counters, &strict, &mut ScriptedHost::default());
        queens += trained(&report, UnitType::Queen);
        counters = report.counters;
    }
    assert_eq!(queens, 1);
    assert_eq!(counters.queens, 1);
}

#[test]
fn tech_path_unlocks_hydralisks() {
    let mut snap = base();
    snap.vespene = 300;
    snap.add_structure(StructureType::SpawningPool, Point::new(14.0, 26.0), true);
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    assert!(report
        .submitted()
        .any(|a| matches!(a, Action::Morph { into: StructureType::Lair, .. })));

    snap.structures[0].kind = StructureType::Lair;
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    assert!(report
        .submitted()
        .any(|a| matches!(a, Action::BuildNear { structure: StructureType::HydraliskDen, .. })));

    snap.add_structure(StructureType::HydraliskDen, Point::new(16.0, 14.0), true);
    let report = run(&snap, started(), &PolicyConfig::default(), &mut ScriptedHost::default());
    assert_eq!(trained(&report, UnitType::Hydralisk), 1);
}
