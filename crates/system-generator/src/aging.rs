//! System age.
//!
//! Every member of a system shares one age, drawn after generation so that it
//! can respect the shortest-lived star.

use sampling::{Seed, random_float};
use units::{Length, Time};

use crate::config::AgeConfig;
use crate::entity::{BodyEntity, EntityRef, StarEntity};
use crate::graph::SystemGraph;

const AGE_OFFSET: u64 = 900;
const MAX_HIERARCHY_DEPTH: usize = 8;

/// Age in `[min, min(shortest lifespan, max))` Gyr.
///
/// A system without stars is bounded by the configured maximum alone.
pub fn draw_system_age(seed: Seed, stars: &[StarEntity], config: &AgeConfig) -> Time {
    let shortest = stars
        .iter()
        .map(|s| s.star.lifespan.to_gyr())
        .fold(f64::INFINITY, f64::min);
    let upper = shortest.min(config.max_gyr).max(config.min_gyr);
    Time::from_gyr(random_float(config.min_gyr, upper, seed.offset(AGE_OFFSET)))
}

/// Pushes `age` to every entity, re-ages the stars and reheats the bodies
/// under the stars' new luminosity.
pub fn apply_age(graph: &mut SystemGraph, age: Time) {
    graph.age = age;
    for star in &mut graph.stars {
        star.star = star.star.with_age(age);
        star.base.age = age;
    }

    let illumination: Vec<Option<(f64, Length)>> = graph
        .bodies
        .iter()
        .map(|b| illumination(graph, b))
        .collect();
    for (body, light) in graph.bodies.iter_mut().zip(illumination) {
        body.base.age = age;
        if let Some((luminosity, distance)) = light {
            body.body = body.body.with_illumination(luminosity, distance);
        }
    }

    for belt in &mut graph.belts {
        belt.base.age = age;
    }
}

/// Current luminosity reaching `body` and its distance from the source.
///
/// Moons use their planet's distance; barycentric orbits see every star.
fn illumination(graph: &SystemGraph, body: &BodyEntity) -> Option<(f64, Length)> {
    let mut current = body;
    for _ in 0..MAX_HIERARCHY_DEPTH {
        let distance = current.base.orbit.semi_major_axis();
        match current.base.parent_seed.map(|p| graph.lookup(p)) {
            None => {
                let total = graph.stars.iter().map(|s| s.star.luminosity).sum::<f64>();
                return Some((total, distance));
            }
            Some(Some(EntityRef::Star(star))) => return Some((star.star.luminosity, distance)),
            Some(Some(EntityRef::Body(parent))) => current = parent,
            _ => return None,
        }
    }
    None
}
