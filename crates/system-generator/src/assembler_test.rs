use sampling::Seed;
use units::Time;

use crate::assembler::{Stage, SystemAssembler, star_count_for_roll};
use crate::config::{GeneratorConfig, StarsConfig};
use crate::diagnostics::CollectingDiagnostics;
use crate::graph::SystemGraph;
use crate::naming::catalog_name;

// =============================================================================
// Star count table
// =============================================================================

#[test]
fn test_star_count_table_boundaries() {
    let config = StarsConfig::default();
    assert_eq!(star_count_for_roll(1, &config), 1);
    assert_eq!(star_count_for_roll(50, &config), 1);
    assert_eq!(star_count_for_roll(78, &config), 1);
    assert_eq!(star_count_for_roll(79, &config), 2);
    assert_eq!(star_count_for_roll(85, &config), 2);
    assert_eq!(star_count_for_roll(93, &config), 2);
    assert_eq!(star_count_for_roll(94, &config), 3);
    assert_eq!(star_count_for_roll(97, &config), 3);
    assert_eq!(star_count_for_roll(100, &config), 3);
    assert_eq!(star_count_for_roll(101, &config), 0);
    assert_eq!(star_count_for_roll(110, &config), 0);
    assert_eq!(star_count_for_roll(0, &config), 0);
}

// =============================================================================
// Stage order
// =============================================================================

fn stage_sequence(star_count: usize) -> Vec<Stage> {
    let mut stages = vec![Stage::StarCount];
    while let Some(&last) = stages.last() {
        if last == Stage::Done {
            break;
        }
        stages.push(last.next(star_count));
    }
    stages
}

#[test]
fn test_single_star_skips_multi_star_stages() {
    assert_eq!(
        stage_sequence(1),
        vec![
            Stage::StarCount,
            Stage::StellarBodies,
            Stage::MajorBodies,
            Stage::MinorBodies,
            Stage::ColorAssignment,
            Stage::NameAssignment,
            Stage::AgeAssignment,
            Stage::Done,
        ]
    );
}

#[test]
fn test_multi_star_runs_every_stage() {
    assert_eq!(
        stage_sequence(2),
        vec![
            Stage::StarCount,
            Stage::StellarBodies,
            Stage::PositionStars,
            Stage::MajorBodies,
            Stage::MinorBodies,
            Stage::EjectedBodyCheck,
            Stage::ColorAssignment,
            Stage::NameAssignment,
            Stage::AgeAssignment,
            Stage::Done,
        ]
    );
}

#[test]
fn test_done_is_terminal() {
    assert_eq!(Stage::Done.next(3), Stage::Done);
}

#[test]
fn test_stepping_reaches_done() {
    let mut assembler = SystemAssembler::new(Seed::new(8), GeneratorConfig::default());
    let mut diagnostics = CollectingDiagnostics::new();
    assert_eq!(assembler.stage(), Stage::StarCount);

    let mut steps = 0;
    while assembler.stage() != Stage::Done {
        assembler.step(&mut diagnostics);
        steps += 1;
    }
    assert!((8..=10).contains(&steps));
    assert!(assembler.graph().age > Time::zero());
}

// =============================================================================
// Naming and continuation
// =============================================================================

#[test]
fn test_default_name_is_catalog_name() {
    let seed = Seed::new(31337);
    let graph = SystemAssembler::new(seed, GeneratorConfig::default())
        .run(&mut CollectingDiagnostics::new());
    assert_eq!(graph.name, catalog_name(seed));
}

#[test]
fn test_given_name_prefixes_stars() {
    let graph = SystemAssembler::new(Seed::new(31337), GeneratorConfig::default())
        .with_name("Tau Ceti")
        .run(&mut CollectingDiagnostics::new());
    assert_eq!(graph.name, "Tau Ceti");
    for star in &graph.stars {
        assert!(star.base.name.starts_with("Tau Ceti "));
    }
}

#[test]
fn test_continuing_partial_graph_matches_full_run() {
    let config = GeneratorConfig::default();
    for value in 1..=20 {
        let seed = Seed::new(value);
        let full =
            SystemAssembler::new(seed, config.clone()).run(&mut CollectingDiagnostics::new());

        let mut partial = SystemAssembler::new(seed, config.clone());
        let mut diagnostics = CollectingDiagnostics::new();
        while partial.stage() != Stage::MajorBodies {
            partial.step(&mut diagnostics);
        }
        let resumed = SystemAssembler::continue_from(partial.graph().clone(), config.clone())
            .run(&mut CollectingDiagnostics::new());

        assert_eq!(full, resumed, "seed {value}");
    }
}

#[test]
fn test_continuation_keeps_existing_age() {
    let mut graph = SystemGraph::new(Seed::new(555), "Elder");
    graph.age = Time::from_gyr(3.0);
    let graph = SystemAssembler::continue_from(graph, GeneratorConfig::default())
        .run(&mut CollectingDiagnostics::new());

    assert_eq!(graph.age, Time::from_gyr(3.0));
    for star in &graph.stars {
        assert_eq!(star.base.age, Time::from_gyr(3.0));
    }
}

#[test]
fn test_finished_single_star_graph_is_stable_under_continuation() {
    let config = GeneratorConfig::default();
    for value in 1..=20 {
        let graph = SystemAssembler::new(Seed::new(value), config.clone())
            .run(&mut CollectingDiagnostics::new());
        if graph.binary.is_some() {
            continue;
        }
        let again = SystemAssembler::continue_from(graph.clone(), config.clone())
            .run(&mut CollectingDiagnostics::new());
        assert_eq!(graph, again, "seed {value}");
    }
}
