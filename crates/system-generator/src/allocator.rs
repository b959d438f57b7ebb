//! Orbital slot allocation.
//!
//! Orbits around a parent are laid out in a doubling sequence starting from a
//! keystone orbit: `inner + spacing·2^i` for as long as the slot stays inside
//! the outer edge. Bodies claim slots at random without reuse.

use orbits::OrbitalElements;
use sampling::{Seed, random_float, random_int};
use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Mass, Time};

const PLANET_COUNT_OFFSET: u64 = 50;
const KEYSTONE_OFFSET: u64 = 51;
const SPACING_OFFSET: u64 = 52;
const PICK_OFFSET: u64 = 60;

const ECCENTRICITY_OFFSET: u64 = 30;
const INCLINATION_OFFSET: u64 = 31;
const NODE_OFFSET: u64 = 32;
const PERIAPSIS_OFFSET: u64 = 33;
const PHASE_OFFSET: u64 = 34;

/// Widest planet spacing step (AU)
const MAX_PLANET_SPACING_AU: f64 = 10.0;
/// Narrowest spacing step as a fraction of the outer edge
const MIN_SPACING_FRACTION: f64 = 0.06;
/// Widest moon spacing step as a fraction of the outer edge
const MAX_MOON_SPACING_FRACTION: f64 = 0.25;
/// Moons stay outside this many planet radii
const MOON_INNER_RADII: f64 = 3.0;
/// Moons stay inside this fraction of the planet's Hill radius
const MOON_HILL_FRACTION: f64 = 0.5;
const MAX_SLOTS: usize = 64;
const MOON_ECCENTRICITY_MEAN: f64 = 0.02;
/// Degrees
const MOON_INCLINATION_MAX: f64 = 5.0;

/// Candidate orbits around one parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitSlots {
    pub inner_orbit: Length,
    pub spacing: Length,
    pub edge: Length,
    pub slots: Vec<Length>,
}

impl OrbitSlots {
    /// Lays out slots between `inner_bound` and `edge`.
    ///
    /// # Arguments
    /// * `seed` - Key for the keystone and spacing draws
    /// * `inner_bound` - Closest allowed orbit; the keystone falls in `[inner, 5·inner)`
    /// * `edge` - Farthest allowed orbit
    /// * `spacing_range` - Bounds of the base spacing step
    pub fn generate(
        seed: Seed,
        inner_bound: Length,
        edge: Length,
        spacing_range: (Length, Length),
    ) -> Self {
        let inner = inner_bound.to_au();
        let inner_orbit = random_float(inner, 5.0 * inner, seed.offset(KEYSTONE_OFFSET));
        let spacing = random_float(
            spacing_range.0.to_au(),
            spacing_range.1.to_au(),
            seed.offset(SPACING_OFFSET),
        );

        let mut slots = Vec::new();
        if spacing > 0.0 {
            for i in 0..MAX_SLOTS {
                let slot = inner_orbit + spacing * 2f64.powi(i as i32);
                if slot > edge.to_au() {
                    break;
                }
                slots.push(Length::from_au(slot));
            }
        }

        Self {
            inner_orbit: Length::from_au(inner_orbit),
            spacing: Length::from_au(spacing),
            edge,
            slots,
        }
    }

    /// Planet slots between a star's inner limit and its sphere-of-influence edge
    pub fn for_star(seed: Seed, star: &Star) -> Self {
        let edge = star.sphere_of_influence_edge();
        Self::generate(
            seed,
            star.sphere_of_influence_inner(),
            edge,
            (edge * MIN_SPACING_FRACTION, Length::from_au(MAX_PLANET_SPACING_AU)),
        )
    }

    /// Moon slots between 3 planet radii and half the planet's Hill radius
    pub fn for_planet(seed: Seed, radius: Length, hill_radius: Length) -> Self {
        let edge = hill_radius * MOON_HILL_FRACTION;
        Self::generate(
            seed,
            radius * MOON_INNER_RADII,
            edge,
            (edge * MIN_SPACING_FRACTION, edge * MAX_MOON_SPACING_FRACTION),
        )
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Distance from slot `index` to the next one in the sequence
    pub fn gap(&self, index: usize) -> Length {
        self.spacing * 2f64.powi(index as i32)
    }

    pub fn picker(&self) -> SlotPicker {
        SlotPicker {
            remaining: self.slots.iter().copied().enumerate().collect(),
        }
    }
}

/// Draws slots without replacement.
#[derive(Debug, Clone)]
pub struct SlotPicker {
    remaining: Vec<(usize, Length)>,
}

impl SlotPicker {
    /// Claims a random free slot, keyed by `seed` and the pick `index`.
    ///
    /// Returns the slot's position in the original sequence and its distance.
    pub fn pick(&mut self, seed: Seed, index: usize) -> Option<(usize, Length)> {
        if self.remaining.is_empty() {
            return None;
        }
        let last = self.remaining.len() as i64 - 1;
        let drawn = random_int(0, last, seed.offset(PICK_OFFSET + index as u64));
        Some(self.remaining.remove(drawn as usize))
    }

    pub fn remaining(&self) -> &[(usize, Length)] {
        &self.remaining
    }
}

/// Planets around a star: `max(1, floor(M^0.3 · randomInt(1, 10)))`
pub fn planet_count(seed: Seed, star_mass: Mass) -> usize {
    let roll = random_int(1, 10, seed.offset(PLANET_COUNT_OFFSET)) as f64;
    ((star_mass.to_solar_masses().powf(0.3) * roll).floor() as usize).max(1)
}

/// Shape statistics shared by every planet of one star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitStatistics {
    pub eccentricity_mean: f64,
    /// Degrees
    pub inclination_max: f64,
}

impl OrbitStatistics {
    /// Crowded systems are flatter and rounder.
    ///
    /// `eccMean = max(n^-0.15 - 0.65, 0.01)`, `inclMax = (15 - n) / 2`
    pub fn for_count(count: usize) -> Self {
        let n = count.max(1) as f64;
        Self {
            eccentricity_mean: (n.powf(-0.15) - 0.65).max(0.01),
            inclination_max: (15.0 - n) / 2.0,
        }
    }

    /// Near-circular, near-equatorial moon orbits
    pub fn for_moons() -> Self {
        Self {
            eccentricity_mean: MOON_ECCENTRICITY_MEAN,
            inclination_max: MOON_INCLINATION_MAX,
        }
    }

    /// Orbit at `distance` with eccentricity, tilt and orientation drawn from
    /// these statistics.
    pub fn jittered_orbit(&self, seed: Seed, distance: Length) -> OrbitalElements {
        let inclination_max = self.inclination_max.abs();
        OrbitalElements::new(
            distance,
            random_float(0.0, 2.0 * self.eccentricity_mean, seed.offset(ECCENTRICITY_OFFSET)),
            random_float(-inclination_max, inclination_max, seed.offset(INCLINATION_OFFSET)),
            random_float(0.0, 360.0, seed.offset(NODE_OFFSET)),
            random_float(0.0, 360.0, seed.offset(PERIAPSIS_OFFSET)),
        )
    }
}

/// Periapsis time placing the body at a random point of an orbit of `period`
pub fn random_phase_epoch(seed: Seed, period: Time) -> Time {
    let seconds = period.to_seconds();
    if !seconds.is_finite() {
        return Time::zero();
    }
    Time::from_seconds(-random_float(0.0, 1.0, seed.offset(PHASE_OFFSET)) * seconds)
}
