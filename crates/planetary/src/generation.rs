//! Seeded planet and moon generation.
//!
//! Each property draws from its own offset of the body's seed, so changing how
//! one property is sampled never shifts the others.

use sampling::{Seed, random_float, random_int};
use tracing::debug;
use units::{Length, Mass, Temperature};

use crate::atmosphere::{Atmosphere, AtmosphereKind};
use crate::body::{Body, BodyKind};
use crate::composition::SurfaceComposition;
use crate::planet_class::PlanetClass;
use crate::zones::{baseline_ice, baseline_metal, composition_deviation};

const ICE_OFFSET: u64 = 1;
const METAL_OFFSET: u64 = 2;
const RADIUS_OFFSET: u64 = 3;
const ATMOSPHERE_OFFSET: u64 = 4;
const MASS_BIN_OFFSET: u64 = 5;
const MASS_OFFSET: u64 = 6;
const MOON_COUNT_OFFSET: u64 = 7;
const MOON_EXTRA_OFFSET: u64 = 8;

/// Earth escape velocity (km/s)
const EARTH_ESCAPE_VELOCITY: f64 = 11.186;
/// Equilibrium temperature at 1 AU from 1 L☉, zero albedo (K)
const EQUILIBRIUM_TEMP_1AU: f64 = 278.0;

/// Planets lighter than this (Earth masses) host no moons
pub const MIN_MOON_HOST_MASS: f64 = 0.05;

/// Where a body forms relative to its host star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyEnvironment {
    /// Host star luminosity at formation (L☉); sets the composition zones
    pub base_luminosity: f64,
    /// Host star luminosity now (L☉); sets the temperature
    pub luminosity: f64,
    /// Distance from the host star
    pub distance: Length,
}

// =============================================================================
// Mass
// =============================================================================

/// Planet mass bins in Earth masses and their weights.
///
/// Log-uniform within each bin.
const PLANET_MASS_BINS: [(f64, f64, f64); 6] = [
    (0.01, 0.5, 0.15),     // Sub-Earth
    (0.5, 2.0, 0.30),      // Earth
    (2.0, 10.0, 0.25),     // Super-Earth/Mini-Neptune
    (10.0, 50.0, 0.15),    // Neptune
    (50.0, 160.0, 0.05),   // Sub-Saturn
    (160.0, 1000.0, 0.10), // Jupiter
];

/// Draws a planet mass from the weighted bins
pub fn sample_planet_mass(seed: Seed) -> Mass {
    let total: f64 = PLANET_MASS_BINS.iter().map(|(_, _, weight)| weight).sum();
    let roll = random_float(0.0, total, seed.offset(MASS_BIN_OFFSET));

    let mut cumulative = 0.0;
    let (min, max) = PLANET_MASS_BINS
        .iter()
        .find(|(_, _, weight)| {
            cumulative += weight;
            roll < cumulative
        })
        .map(|(min, max, _)| (*min, *max))
        .unwrap_or((0.5, 2.0));

    let log_mass = random_float(min.ln(), max.ln(), seed.offset(MASS_OFFSET));
    Mass::from_earth_masses(log_mass.exp())
}

/// Moon host category: 0=Terrestrial, 1=Super-Earth, 2=Ice Giant, 3=Gas Giant
fn host_category(planet_mass_earth: f64) -> usize {
    match planet_mass_earth {
        m if m < 2.0 => 0,
        m if m < 10.0 => 1,
        m if m < 50.0 => 2,
        _ => 3,
    }
}

/// Moon count distribution per host category: [none, one, two, three+]
const MOON_COUNT_DIST: [[f64; 4]; 4] = [
    [0.70, 0.25, 0.05, 0.00],
    [0.60, 0.28, 0.10, 0.02],
    [0.15, 0.25, 0.35, 0.25],
    [0.03, 0.12, 0.35, 0.50],
];

/// Moon-to-planet mass ratio range per host category
const MOON_MASS_RATIO: [(f64, f64); 4] = [
    (0.002, 0.02),
    (0.001, 0.01),
    (0.0005, 0.003),
    (0.0001, 0.001),
];

/// Number of moons a planet of `planet_mass` keeps.
///
/// The "three or more" bucket draws 3-6.
pub fn sample_moon_count(seed: Seed, planet_mass: Mass) -> usize {
    let mass_earth = planet_mass.to_earth_masses();
    if mass_earth < MIN_MOON_HOST_MASS {
        return 0;
    }

    let dist = MOON_COUNT_DIST[host_category(mass_earth)];
    let roll = random_float(0.0, 1.0, seed.offset(MOON_COUNT_OFFSET));

    let mut cumulative = 0.0;
    for (count, probability) in dist.iter().enumerate() {
        cumulative += probability;
        if roll < cumulative {
            return match count {
                3 => random_int(3, 6, seed.offset(MOON_EXTRA_OFFSET)) as usize,
                n => n,
            };
        }
    }
    0
}

/// Draws a moon mass as a fraction of its planet's mass
pub fn sample_moon_mass(seed: Seed, planet_mass: Mass) -> Mass {
    let (min, max) = MOON_MASS_RATIO[host_category(planet_mass.to_earth_masses())];
    planet_mass * random_float(min, max, seed.offset(MASS_OFFSET))
}

// =============================================================================
// Physical properties
// =============================================================================

/// Equilibrium temperature: `278·(L/d²)^0.25` K, d in AU
pub fn equilibrium_temperature(luminosity: f64, distance: Length) -> Temperature {
    let d = distance.to_au();
    if d <= 0.0 {
        return Temperature::from_kelvin(0.0);
    }
    Temperature::from_kelvin(EQUILIBRIUM_TEMP_1AU * (luminosity.max(0.0) / (d * d)).powf(0.25))
}

/// Escape velocity in km/s from mass and radius in Earth units
pub fn escape_velocity(mass_earth: f64, radius_earth: f64) -> f64 {
    if radius_earth <= 0.0 {
        return 0.0;
    }
    EARTH_ESCAPE_VELOCITY * (mass_earth.max(0.0) / radius_earth).sqrt()
}

/// Baseline rock/ice/metal at `distance` jittered by the mass-dependent
/// deviation. Ice and metal draw from separate seed offsets.
pub fn sample_composition(
    seed: Seed,
    distance: Length,
    base_luminosity: f64,
    mass: Mass,
) -> SurfaceComposition {
    let ice = baseline_ice(distance, base_luminosity);
    let metal = baseline_metal(distance);
    let rock = (100.0 - ice - metal).max(0.0);

    let deviation = composition_deviation(mass.to_earth_masses());
    let ice = ice + random_float(-deviation, deviation, seed.offset(ICE_OFFSET));
    let metal = metal + random_float(-deviation, deviation, seed.offset(METAL_OFFSET));

    SurfaceComposition::new(rock, ice, metal, mass)
}

// =============================================================================
// Body generation
// =============================================================================

/// Generates the intrinsic properties of a planet or moon.
///
/// # Arguments
/// * `seed` - The body's seed
/// * `kind` - Planet or moon
/// * `mass` - Total mass, drawn beforehand by the caller
/// * `environment` - Host star luminosities and distance from it
pub fn generate_body(
    seed: Seed,
    kind: BodyKind,
    mass: Mass,
    environment: &BodyEnvironment,
) -> Body {
    let mass_earth = mass.to_earth_masses();
    let class = PlanetClass::from_earth_masses(mass_earth);
    let radius = class.radius_from_mass(mass_earth, seed.offset(RADIUS_OFFSET));
    let temperature = equilibrium_temperature(environment.luminosity, environment.distance);

    let atmosphere_kind = AtmosphereKind::classify(
        mass_earth,
        temperature.to_kelvin(),
        class,
        escape_velocity(mass_earth, radius.to_earth_radii()),
    );
    let (min_fraction, max_fraction) = atmosphere_kind.mass_fraction_range();
    let fraction = random_float(min_fraction, max_fraction, seed.offset(ATMOSPHERE_OFFSET));
    let atmosphere = Atmosphere::new(atmosphere_kind.mix(), mass * fraction);

    let composition = sample_composition(
        seed,
        environment.distance,
        environment.base_luminosity,
        mass * (1.0 - fraction),
    );

    debug!(
        %seed,
        ?kind,
        mass_earth,
        %class,
        atmosphere = ?atmosphere_kind,
        "generated body"
    );

    Body {
        kind,
        class,
        composition,
        atmosphere,
        radius,
        equilibrium_temperature: temperature,
    }
}
