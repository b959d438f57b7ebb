//! Stage machine that builds a [`SystemGraph`] from a seed.
//!
//! Stages run strictly in order:
//!
//! ```text
//! StarCount → StellarBodies → PositionStars (multi-star) → MajorBodies
//!   → MinorBodies → EjectedBodyCheck (multi-star) → ColorAssignment
//!   → NameAssignment → AgeAssignment → Done
//! ```
//!
//! Generation stages skip themselves when the graph already holds their
//! output, which lets [`SystemAssembler::continue_from`] finish a partially
//! built system. Coloring, naming and aging always run.

use std::collections::HashSet;

use orbits::{Orbit, OrbitalElements, hill_radius};
use planetary::{
    BodyEnvironment, BodyKind, generate_belt, generate_body, sample_belt_mass, sample_moon_count,
    sample_moon_mass, sample_planet_mass,
};
use sampling::{Seed, random_int};
use serde::{Deserialize, Serialize};
use stellar::{ColorLookup, SpectralColorLookup, Star, StarGen};
use tracing::{debug, info_span};
use units::{Length, Time};

use crate::aging::{apply_age, draw_system_age};
use crate::allocator::{OrbitSlots, OrbitStatistics, planet_count, random_phase_epoch};
use crate::coloring::assign_colors;
use crate::config::{GeneratorConfig, StarsConfig};
use crate::diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics};
use crate::entity::{BaseEntity, BeltEntity, BodyEntity, Rotation, StarEntity};
use crate::graph::{BinaryConfiguration, SystemGraph};
use crate::multiplicity::{outer_separation, pair_eccentricity, pair_separation, split_separation};
use crate::naming::{assign_names, catalog_name};
use crate::stability::{p_type_limit, s_type_limit};

const BINARY_PHASE_OFFSET: u64 = 7;
const BELT_PICK_OFFSET: u64 = 70;
/// Child index of a star's belt; planet children stay below the slot cap
const BELT_CHILD_INDEX: u64 = 1000;
/// Belt edges sit this fraction of the local slot gap either side of the slot
const BELT_HALF_WIDTH: f64 = 0.25;
/// Relative tolerance when matching planet orbits to allocator slots
const SLOT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    StarCount,
    StellarBodies,
    PositionStars,
    MajorBodies,
    MinorBodies,
    EjectedBodyCheck,
    ColorAssignment,
    NameAssignment,
    AgeAssignment,
    Done,
}

impl Stage {
    /// Stage after this one; the multi-star stages are skipped for fewer
    /// than two stars.
    pub fn next(self, star_count: usize) -> Stage {
        let multi_star = star_count > 1;
        match self {
            Stage::StarCount => Stage::StellarBodies,
            Stage::StellarBodies if multi_star => Stage::PositionStars,
            Stage::StellarBodies => Stage::MajorBodies,
            Stage::PositionStars => Stage::MajorBodies,
            Stage::MajorBodies => Stage::MinorBodies,
            Stage::MinorBodies if multi_star => Stage::EjectedBodyCheck,
            Stage::MinorBodies => Stage::ColorAssignment,
            Stage::EjectedBodyCheck => Stage::ColorAssignment,
            Stage::ColorAssignment => Stage::NameAssignment,
            Stage::NameAssignment => Stage::AgeAssignment,
            Stage::AgeAssignment | Stage::Done => Stage::Done,
        }
    }
}

/// Number of stars for a count roll; rolls past the table give none.
///
/// With the default table: 1–78 → 1, 79–93 → 2, 94–100 → 3, else 0.
pub fn star_count_for_roll(roll: i64, config: &StarsConfig) -> usize {
    match roll {
        r if r < 1 => 0,
        r if r <= config.single_max_roll => 1,
        r if r <= config.binary_max_roll => 2,
        r if r <= config.trinary_max_roll => 3,
        _ => 0,
    }
}

/// Builds one system.
///
/// ```no_run
/// use sampling::Seed;
/// use system_generator::{CollectingDiagnostics, GeneratorConfig, SystemAssembler};
///
/// let mut diagnostics = CollectingDiagnostics::new();
/// let system = SystemAssembler::new(Seed::new(12345), GeneratorConfig::default())
///     .run(&mut diagnostics);
/// println!("{} has {} stars", system.name, system.stars.len());
/// ```
pub struct SystemAssembler<L: ColorLookup = SpectralColorLookup> {
    config: GeneratorConfig,
    lookup: L,
    graph: SystemGraph,
    stage: Stage,
    star_count: usize,
}

impl SystemAssembler<SpectralColorLookup> {
    /// Starts a fresh system named after its seed's catalog designation.
    pub fn new(seed: Seed, config: GeneratorConfig) -> Self {
        Self::continue_from(SystemGraph::new(seed, catalog_name(seed)), config)
    }

    /// Resumes work on an existing graph.
    pub fn continue_from(graph: SystemGraph, config: GeneratorConfig) -> Self {
        Self {
            config,
            lookup: SpectralColorLookup,
            star_count: graph.stars.len(),
            graph,
            stage: Stage::StarCount,
        }
    }
}

impl<L: ColorLookup> SystemAssembler<L> {
    pub fn with_color_lookup<M: ColorLookup>(self, lookup: M) -> SystemAssembler<M> {
        SystemAssembler {
            config: self.config,
            lookup,
            graph: self.graph,
            stage: self.stage,
            star_count: self.star_count,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.graph.name = name.into();
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn graph(&self) -> &SystemGraph {
        &self.graph
    }

    /// Runs every remaining stage and hands back the finished graph.
    pub fn run(mut self, diagnostics: &mut dyn Diagnostics) -> SystemGraph {
        let _span = info_span!("generate_system", seed = %self.graph.seed).entered();
        while self.stage != Stage::Done {
            self.step(diagnostics);
        }
        debug!(
            name = %self.graph.name,
            stars = self.graph.stars.len(),
            bodies = self.graph.bodies.len(),
            belts = self.graph.belts.len(),
            "system complete"
        );
        self.graph
    }

    /// Runs the current stage and returns the one after it.
    pub fn step(&mut self, diagnostics: &mut dyn Diagnostics) -> Stage {
        debug!(stage = ?self.stage, "running stage");
        match self.stage {
            Stage::StarCount => self.count_stars(diagnostics),
            Stage::StellarBodies => self.generate_stars(),
            Stage::PositionStars => self.position_stars(),
            Stage::MajorBodies => self.generate_planets(diagnostics),
            Stage::MinorBodies => self.generate_minor_bodies(),
            Stage::EjectedBodyCheck => self.check_ejected_bodies(diagnostics),
            Stage::ColorAssignment => assign_colors(&mut self.graph, &self.lookup, diagnostics),
            Stage::NameAssignment => self.assign_names(),
            Stage::AgeAssignment => self.assign_age(),
            Stage::Done => {}
        }
        self.stage = self.stage.next(self.star_count);
        self.stage
    }

    // =========================================================================
    // Stars
    // =========================================================================

    fn count_stars(&mut self, diagnostics: &mut dyn Diagnostics) {
        if !self.graph.stars.is_empty() {
            self.star_count = self.graph.stars.len();
            return;
        }
        let roll = random_int(1, self.config.stars.roll_max, self.graph.seed);
        self.star_count = star_count_for_roll(roll, &self.config.stars);
        if self.star_count == 0 {
            diagnostics.report(Diagnostic::StarCountFallback { roll });
        }
        debug!(roll, count = self.star_count, "star count");
    }

    fn generate_stars(&mut self) {
        if !self.graph.stars.is_empty() {
            return;
        }
        let generator = StarGen::new(self.config.stars.max_mass);
        let existing_age = (self.graph.age > Time::zero()).then_some(self.graph.age);

        for i in 0..self.star_count {
            let seed = self.graph.unique_seed(self.graph.seed.child(i as u64));
            let star = generator.generate(seed, existing_age);
            let base = BaseEntity::new(seed, None, star.mass)
                .with_rotation(Rotation::sample_star(seed))
                .with_hill_radius(star.sphere_of_influence_edge());
            self.graph.stars.push(StarEntity { base, star });
        }
        self.graph.stars.sort_by(|a, b| {
            b.base
                .mass
                .partial_cmp(&a.base.mass)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        debug!(count = self.graph.stars.len(), "generated stars");
    }

    fn position_stars(&mut self) {
        if self.graph.binary.is_some() || self.graph.stars.len() < 2 {
            return;
        }
        let seed = self.graph.seed;
        let multiplicity = &self.config.multiplicity;

        let primary_mass = self.graph.stars[0].base.mass;
        let secondary_mass = self.graph.stars[1].base.mass;
        let separation = pair_separation(seed, multiplicity);
        let relative = OrbitalElements::new(
            separation,
            pair_eccentricity(seed, separation, multiplicity),
            0.0,
            0.0,
            0.0,
        );
        let eccentricity = relative.eccentricity();
        let period = Orbit::new(relative, primary_mass + secondary_mass).period();
        let epoch = random_phase_epoch(seed.offset(BINARY_PHASE_OFFSET), period);

        let (primary_axis, secondary_axis) =
            split_separation(separation, primary_mass, secondary_mass);
        self.graph.stars[0].base.orbit =
            OrbitalElements::new(primary_axis, eccentricity, 0.0, 0.0, 0.0).with_epoch(epoch);
        self.graph.stars[1].base.orbit =
            OrbitalElements::new(secondary_axis, eccentricity, 0.0, 0.0, 180.0).with_epoch(epoch);

        let (tertiary, tertiary_separation) = match self.graph.stars.get_mut(2) {
            Some(third) => {
                let distance = outer_separation(seed, multiplicity);
                third.base.orbit = OrbitalElements::circular(distance);
                (Some(third.base.seed), Some(distance))
            }
            None => (None, None),
        };

        let binary = BinaryConfiguration {
            primary: self.graph.stars[0].base.seed,
            secondary: self.graph.stars[1].base.seed,
            separation,
            eccentricity,
            primary_limit: s_type_limit(separation, eccentricity, primary_mass, secondary_mass),
            secondary_limit: s_type_limit(separation, eccentricity, secondary_mass, primary_mass),
            circumbinary_limit: p_type_limit(
                separation,
                eccentricity,
                primary_mass,
                secondary_mass,
            ),
            tertiary,
            tertiary_separation,
        };
        debug!(
            separation_au = separation.to_au(),
            eccentricity,
            primary_limit_au = binary.primary_limit.to_au(),
            circumbinary_limit_au = binary.circumbinary_limit.to_au(),
            "positioned stars"
        );
        self.graph.binary = Some(binary);
    }

    // =========================================================================
    // Planets
    // =========================================================================

    fn generate_planets(&mut self, diagnostics: &mut dyn Diagnostics) {
        if self.graph.planets().next().is_some() {
            return;
        }
        for (star_seed, star) in self.star_snapshot() {
            let slots = OrbitSlots::for_star(star_seed, &star);
            if slots.is_empty() {
                diagnostics.report(Diagnostic::NoOrbitSlots { star: star_seed });
                continue;
            }
            let count = planet_count(star_seed, star.mass).min(slots.len());
            let statistics = OrbitStatistics::for_count(count);
            let mut picker = slots.picker();

            for index in 0..count {
                let Some((_, distance)) = picker.pick(star_seed, index) else {
                    break;
                };
                let seed = self.graph.unique_seed(star_seed.child(index as u64));
                let environment = BodyEnvironment {
                    base_luminosity: star.base_luminosity,
                    luminosity: star.luminosity,
                    distance,
                };
                let body = generate_body(
                    seed,
                    BodyKind::Planet,
                    sample_planet_mass(seed),
                    &environment,
                );

                let mut orbit = statistics.jittered_orbit(seed, distance);
                let period = Orbit::new(orbit, star.mass).period();
                orbit = orbit.with_epoch(random_phase_epoch(seed, period));

                let base = BaseEntity::new(seed, Some(star_seed), body.mass())
                    .with_orbit(orbit)
                    .with_hill_radius(hill_radius(
                        distance,
                        orbit.eccentricity(),
                        body.mass(),
                        star.mass,
                    ))
                    .with_rotation(Rotation::sample_planet(seed));
                self.graph.bodies.push(BodyEntity { base, body });
            }
            debug!(star = %star_seed, count, slots = slots.len(), "generated planets");
        }
    }

    // =========================================================================
    // Moons and belts
    // =========================================================================

    fn generate_minor_bodies(&mut self) {
        if self.graph.moons().next().is_some() || !self.graph.belts.is_empty() {
            return;
        }
        if self.config.moons.enabled {
            self.generate_moons();
        }
        if self.config.belts.enabled {
            self.generate_belts();
        }
    }

    fn generate_moons(&mut self) {
        let planets: Vec<(BaseEntity, Length, BodyEnvironment)> = self
            .graph
            .planets()
            .map(|planet| {
                let (base_luminosity, luminosity) = match self.graph.host_star(planet.base.seed) {
                    Some(host) => (host.star.base_luminosity, host.star.luminosity),
                    None => self.total_luminosity(),
                };
                let environment = BodyEnvironment {
                    base_luminosity,
                    luminosity,
                    distance: planet.base.orbit.semi_major_axis(),
                };
                (planet.base.clone(), planet.body.radius, environment)
            })
            .collect();

        let statistics = OrbitStatistics::for_moons();
        for (planet, radius, environment) in planets {
            let count = sample_moon_count(planet.seed, planet.mass)
                .min(self.config.moons.max_per_planet);
            if count == 0 {
                continue;
            }
            let slots = OrbitSlots::for_planet(planet.seed, radius, planet.hill_radius);
            let count = count.min(slots.len());
            let mut picker = slots.picker();

            for index in 0..count {
                let Some((_, distance)) = picker.pick(planet.seed, index) else {
                    break;
                };
                let seed = self.graph.unique_seed(planet.seed.child(index as u64));
                let mass = sample_moon_mass(seed, planet.mass);
                let body = generate_body(seed, BodyKind::Moon, mass, &environment);

                let mut orbit = statistics.jittered_orbit(seed, distance);
                let period = Orbit::new(orbit, planet.mass).period();
                orbit = orbit.with_epoch(random_phase_epoch(seed, period));

                let base = BaseEntity::new(seed, Some(planet.seed), body.mass())
                    .with_orbit(orbit)
                    .with_hill_radius(hill_radius(
                        distance,
                        orbit.eccentricity(),
                        body.mass(),
                        planet.mass,
                    ))
                    .with_rotation(Rotation::tidally_locked(seed, period));
                self.graph.bodies.push(BodyEntity { base, body });
            }
            if count > 0 {
                debug!(planet = %planet.seed, count, "generated moons");
            }
        }
    }

    /// At most one belt per star, in a slot no planet took.
    fn generate_belts(&mut self) {
        for (star_seed, star) in self.star_snapshot() {
            let slots = OrbitSlots::for_star(star_seed, &star);
            let taken: Vec<f64> = self
                .graph
                .planets_of(star_seed)
                .map(|p| p.base.orbit.semi_major_axis_au())
                .collect();
            let free: Vec<(usize, Length)> = slots
                .slots
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, slot)| {
                    !taken
                        .iter()
                        .any(|a| (a - slot.to_au()).abs() <= SLOT_TOLERANCE * slot.to_au())
                })
                .collect();
            if free.is_empty() {
                continue;
            }

            let pick = random_int(0, free.len() as i64 - 1, star_seed.offset(BELT_PICK_OFFSET));
            let (index, distance) = free[pick as usize];
            let half_width = slots.gap(index) * BELT_HALF_WIDTH;

            let seed = self.graph.unique_seed(star_seed.child(BELT_CHILD_INDEX));
            let belt = generate_belt(
                seed,
                distance - half_width,
                distance + half_width,
                sample_belt_mass(seed),
                star.base_luminosity,
            );
            let base = BaseEntity::new(seed, Some(star_seed), belt.mass())
                .with_orbit(OrbitalElements::circular(belt.centre()));
            debug!(
                star = %star_seed,
                inner_au = belt.inner_edge.to_au(),
                outer_au = belt.outer_edge.to_au(),
                "generated belt"
            );
            self.graph.belts.push(BeltEntity { base, belt });
        }
    }

    // =========================================================================
    // Stability
    // =========================================================================

    /// Moves unstable planets and belts of a binary onto circumbinary orbits,
    /// or drops them. Moons go with their planet.
    fn check_ejected_bodies(&mut self, diagnostics: &mut dyn Diagnostics) {
        let Some(binary) = self.graph.binary.clone() else {
            return;
        };
        let total_mass = self.graph.total_stellar_mass();
        let mut ejected = HashSet::new();

        for body in self.graph.bodies.iter_mut().filter(|b| b.is_planet()) {
            let Some(parent) = body.base.parent_seed else {
                continue;
            };
            let Some(limit) = binary.limit_for(parent) else {
                continue;
            };
            let orbit = body.base.orbit;
            if orbit.apoapsis() <= limit {
                continue;
            }

            if orbit.periapsis() > binary.circumbinary_limit {
                body.base.parent_seed = None;
                body.base.hill_radius = hill_radius(
                    orbit.semi_major_axis(),
                    orbit.eccentricity(),
                    body.base.mass,
                    total_mass,
                );
                diagnostics.report(Diagnostic::BodyMadeCircumbinary {
                    seed: body.base.seed,
                    parent,
                });
            } else {
                ejected.insert(body.base.seed);
                diagnostics.report(Diagnostic::BodyEjected {
                    seed: body.base.seed,
                    parent,
                    apoapsis_au: orbit.apoapsis().to_au(),
                    limit_au: limit.to_au(),
                });
            }
        }

        for belt in &mut self.graph.belts {
            let Some(parent) = belt.base.parent_seed else {
                continue;
            };
            let Some(limit) = binary.limit_for(parent) else {
                continue;
            };
            if belt.belt.outer_edge <= limit {
                continue;
            }

            if belt.belt.inner_edge > binary.circumbinary_limit {
                belt.base.parent_seed = None;
                diagnostics.report(Diagnostic::BodyMadeCircumbinary {
                    seed: belt.base.seed,
                    parent,
                });
            } else {
                ejected.insert(belt.base.seed);
                diagnostics.report(Diagnostic::BodyEjected {
                    seed: belt.base.seed,
                    parent,
                    apoapsis_au: belt.belt.outer_edge.to_au(),
                    limit_au: limit.to_au(),
                });
            }
        }

        if !ejected.is_empty() {
            self.graph.bodies.retain(|b| {
                !ejected.contains(&b.base.seed)
                    && b.base.parent_seed.is_none_or(|p| !ejected.contains(&p))
            });
            self.graph.belts.retain(|b| !ejected.contains(&b.base.seed));
            debug!(count = ejected.len(), "removed ejected bodies");
        }
    }

    // =========================================================================
    // Finishing
    // =========================================================================

    fn assign_names(&mut self) {
        if self.graph.name.is_empty() {
            self.graph.name = catalog_name(self.graph.seed);
        }
        assign_names(&mut self.graph);
    }

    fn assign_age(&mut self) {
        let age = if self.graph.age > Time::zero() {
            self.graph.age
        } else {
            draw_system_age(self.graph.seed, &self.graph.stars, &self.config.age)
        };
        debug!(age_gyr = age.to_gyr(), "system age");
        apply_age(&mut self.graph, age);
    }

    fn star_snapshot(&self) -> Vec<(Seed, Star)> {
        self.graph
            .stars
            .iter()
            .map(|s| (s.base.seed, s.star.clone()))
            .collect()
    }

    /// Formation and current luminosity of all stars together
    fn total_luminosity(&self) -> (f64, f64) {
        self.graph.stars.iter().fold((0.0, 0.0), |(base, now), s| {
            (base + s.star.base_luminosity, now + s.star.luminosity)
        })
    }
}

/// Builds the system for `seed` with default settings, logging diagnostics.
pub fn generate_system(seed: Seed) -> SystemGraph {
    SystemAssembler::new(seed, GeneratorConfig::default()).run(&mut TracingDiagnostics)
}
