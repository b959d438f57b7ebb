use std::cell::RefCell;

use approx::assert_relative_eq;
use orbits::OrbitalElements;
use planetary::{BodyEnvironment, BodyKind, generate_body};
use sampling::Seed;
use stellar::{Color, ColorLookup, SpectralColorLookup, Star};
use units::{Length, Mass, Temperature};

use crate::coloring::{assign_colors, barycenter_color};
use crate::diagnostics::{CollectingDiagnostics, Diagnostic};
use crate::entity::{BaseEntity, BodyEntity, StarEntity};
use crate::graph::SystemGraph;

/// Red for hot stars, blue for cool ones
struct TwoTone;

impl ColorLookup for TwoTone {
    fn color_for(&self, temperature: Temperature) -> Color {
        if temperature.to_kelvin() > 6000.0 {
            Color::new(200, 0, 0)
        } else {
            Color::new(0, 0, 100)
        }
    }
}

/// Remembers every temperature it is asked about
#[derive(Default)]
struct RecordingLookup {
    temperatures: RefCell<Vec<f64>>,
}

impl ColorLookup for RecordingLookup {
    fn color_for(&self, temperature: Temperature) -> Color {
        self.temperatures.borrow_mut().push(temperature.to_kelvin());
        Color::white()
    }
}

fn star_entity(seed: u64, solar_masses: f64) -> StarEntity {
    let star = Star::from_mass(Mass::from_solar_masses(solar_masses));
    StarEntity {
        base: BaseEntity::new(Seed::new(seed), None, star.mass),
        star,
    }
}

fn body_entity(seed: u64, parent: Option<u64>, kind: BodyKind) -> BodyEntity {
    let environment = BodyEnvironment {
        base_luminosity: 1.0,
        luminosity: 1.0,
        distance: Length::from_au(1.0),
    };
    let body = generate_body(Seed::new(seed), kind, Mass::from_earth_masses(1.0), &environment);
    BodyEntity {
        base: BaseEntity::new(Seed::new(seed), parent.map(Seed::new), body.mass())
            .with_orbit(OrbitalElements::circular(Length::from_au(1.0))),
        body,
    }
}

fn color_of(graph: &SystemGraph, seed: u64) -> Option<Color> {
    graph.lookup(Seed::new(seed)).map(|e| e.base().orbit_color)
}

#[test]
fn test_star_color_from_lookup() {
    let mut graph = SystemGraph::new(Seed::new(1), "Test");
    graph.stars.push(star_entity(10, 1.0));
    let mut diagnostics = CollectingDiagnostics::new();
    assign_colors(&mut graph, &SpectralColorLookup, &mut diagnostics);

    let expected = SpectralColorLookup.color_for(graph.stars[0].star.temperature);
    assert_eq!(color_of(&graph, 10), Some(expected));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_bodies_inherit_star_color() {
    let mut graph = SystemGraph::new(Seed::new(1), "Test");
    // 2 sols is hot, 0.5 sols is cool
    graph.stars.push(star_entity(10, 2.0));
    graph.stars.push(star_entity(11, 0.5));
    graph.bodies.push(body_entity(20, Some(11), BodyKind::Planet));
    graph.bodies.push(body_entity(30, Some(20), BodyKind::Moon));
    let mut diagnostics = CollectingDiagnostics::new();
    assign_colors(&mut graph, &TwoTone, &mut diagnostics);

    assert_eq!(color_of(&graph, 10), Some(Color::new(200, 0, 0)));
    assert_eq!(color_of(&graph, 20), Some(Color::new(0, 0, 100)));
    assert_eq!(color_of(&graph, 30), Some(Color::new(0, 0, 100)));
}

#[test]
fn test_barycentric_orbits_blend_top_two_stars() {
    let mut graph = SystemGraph::new(Seed::new(1), "Test");
    graph.stars.push(star_entity(10, 2.0));
    graph.stars.push(star_entity(11, 0.5));
    graph.bodies.push(body_entity(20, None, BodyKind::Planet));
    let mut diagnostics = CollectingDiagnostics::new();
    assign_colors(&mut graph, &TwoTone, &mut diagnostics);

    assert_eq!(color_of(&graph, 20), Some(Color::new(100, 0, 50)));
}

#[test]
fn test_single_star_barycenter_is_white() {
    let mut graph = SystemGraph::new(Seed::new(1), "Test");
    graph.stars.push(star_entity(10, 1.0));
    assert_eq!(barycenter_color(&graph), Color::white());
}

#[test]
fn test_unresolved_parent_reports_and_falls_back() {
    let mut graph = SystemGraph::new(Seed::new(1), "Test");
    graph.stars.push(star_entity(10, 1.0));
    graph.bodies.push(body_entity(20, Some(99), BodyKind::Planet));
    let mut diagnostics = CollectingDiagnostics::new();
    assign_colors(&mut graph, &TwoTone, &mut diagnostics);

    assert_eq!(color_of(&graph, 20), Some(Color::white()));
    assert_eq!(
        diagnostics.entries,
        vec![Diagnostic::UnresolvedParent {
            seed: Seed::new(20),
            parent: Seed::new(99),
        }]
    );
}

#[test]
fn test_lookup_sees_clamped_temperatures() {
    let mut graph = SystemGraph::new(Seed::new(1), "Test");
    graph.stars.push(star_entity(10, 5.0));
    let mut cold = star_entity(11, 0.1);
    cold.star.temperature = Temperature::from_kelvin(500.0);
    graph.stars.push(cold);
    assert!(graph.stars[0].star.temperature.to_kelvin() > SpectralColorLookup::MAX_TEMPERATURE_K);

    let lookup = RecordingLookup::default();
    assign_colors(&mut graph, &lookup, &mut CollectingDiagnostics::new());

    let seen = lookup.temperatures.borrow();
    assert_eq!(seen.len(), 2);
    assert_relative_eq!(seen[0], SpectralColorLookup::MAX_TEMPERATURE_K);
    assert_relative_eq!(seen[1], SpectralColorLookup::MIN_TEMPERATURE_K);
}
