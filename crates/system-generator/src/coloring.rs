//! Orbit colors.
//!
//! Stars take the color of their surface temperature. Everything else takes
//! the color of its parent, so a star's planets, moons and belts all share
//! its color. Orbits around the barycenter blend the two heaviest stars.

use sampling::Seed;
use stellar::{Color, ColorLookup, SpectralColorLookup};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::entity::EntityRef;
use crate::graph::SystemGraph;

const MAX_HIERARCHY_DEPTH: usize = 8;

/// Colors every entity of `graph`.
///
/// Lookups only ever see temperatures inside the stellar palette range;
/// hotter or cooler stars are clamped before the call.
pub fn assign_colors(
    graph: &mut SystemGraph,
    lookup: &dyn ColorLookup,
    diagnostics: &mut dyn Diagnostics,
) {
    for star in &mut graph.stars {
        let temperature = star.star.temperature.clamp(
            SpectralColorLookup::MIN_TEMPERATURE_K,
            SpectralColorLookup::MAX_TEMPERATURE_K,
        );
        star.base.orbit_color = lookup.color_for(temperature);
    }
    let fallback = barycenter_color(graph);

    let body_colors: Vec<Color> = graph
        .bodies
        .iter()
        .map(|b| inherited_color(graph, b.base.seed, b.base.parent_seed, fallback, diagnostics))
        .collect();
    let belt_colors: Vec<Color> = graph
        .belts
        .iter()
        .map(|b| inherited_color(graph, b.base.seed, b.base.parent_seed, fallback, diagnostics))
        .collect();

    for (body, color) in graph.bodies.iter_mut().zip(body_colors) {
        body.base.orbit_color = color;
    }
    for (belt, color) in graph.belts.iter_mut().zip(belt_colors) {
        belt.base.orbit_color = color;
    }
}

/// Average of the two heaviest stars' colors, or white with fewer than two
pub fn barycenter_color(graph: &SystemGraph) -> Color {
    let mut stars: Vec<_> = graph.stars.iter().collect();
    stars.sort_by(|a, b| {
        b.base
            .mass
            .partial_cmp(&a.base.mass)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    match stars.as_slice() {
        [first, second, ..] => first.base.orbit_color.average(&second.base.orbit_color),
        _ => Color::white(),
    }
}

fn inherited_color(
    graph: &SystemGraph,
    seed: Seed,
    parent: Option<Seed>,
    fallback: Color,
    diagnostics: &mut dyn Diagnostics,
) -> Color {
    let mut current = parent;
    for _ in 0..MAX_HIERARCHY_DEPTH {
        let Some(parent) = current else {
            return fallback;
        };
        match graph.lookup(parent) {
            Some(EntityRef::Star(star)) => return star.base.orbit_color,
            Some(entity) => current = entity.base().parent_seed,
            None => {
                diagnostics.report(Diagnostic::UnresolvedParent { seed, parent });
                return fallback;
            }
        }
    }
    fallback
}
