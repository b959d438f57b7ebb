use sampling::{Seed, random_float};
use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::composition::SurfaceComposition;
use crate::generation::sample_composition;

/// Belt mass range in Earth masses
const BELT_MASS_RANGE: (f64, f64) = (1e-4, 5e-2);

const MASS_OFFSET: u64 = 1;
const SAMPLE_SEED_STRIDE: u64 = 10;
const FRACTION_OFFSET: u64 = 40;

/// Debris belt between two edges, described by composition samples at its
/// inner edge, centre and outer edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Belt {
    pub inner_edge: Length,
    pub outer_edge: Length,
    /// Inner, centre and outer samples; their solid masses sum to the belt mass
    pub samples: [SurfaceComposition; 3],
}

impl Belt {
    pub fn mass(&self) -> Mass {
        self.samples.iter().map(|sample| sample.mass()).sum()
    }

    pub fn centre(&self) -> Length {
        (self.inner_edge + self.outer_edge) / 2.0
    }

    pub fn width(&self) -> Length {
        self.outer_edge - self.inner_edge
    }
}

/// Draws a belt's total mass: U(1e-4, 5e-2) M⊕
pub fn sample_belt_mass(seed: Seed) -> Mass {
    let (min, max) = BELT_MASS_RANGE;
    Mass::from_earth_masses(random_float(min, max, seed.offset(MASS_OFFSET)))
}

/// Generates a belt of total `mass` between `inner_edge` and `outer_edge`.
///
/// Each sample takes a random share of whatever mass is still unassigned, then
/// the shares are rescaled so they add up to `mass`.
pub fn generate_belt(
    seed: Seed,
    inner_edge: Length,
    outer_edge: Length,
    mass: Mass,
    base_luminosity: f64,
) -> Belt {
    let (inner_edge, outer_edge) = if inner_edge <= outer_edge {
        (inner_edge, outer_edge)
    } else {
        (outer_edge, inner_edge)
    };
    let radii = [inner_edge, (inner_edge + outer_edge) / 2.0, outer_edge];

    let masses = partition_mass(seed, mass);
    let samples = std::array::from_fn(|i| {
        let sample_seed = seed.offset(SAMPLE_SEED_STRIDE * (i as u64 + 1));
        sample_composition(sample_seed, radii[i], base_luminosity, masses[i])
    });

    Belt {
        inner_edge,
        outer_edge,
        samples,
    }
}

fn partition_mass(seed: Seed, mass: Mass) -> [Mass; 3] {
    let total = mass.to_earth_masses().max(0.0);

    let mut budget = total;
    let mut parts = [0.0; 3];
    for (i, part) in parts.iter_mut().enumerate() {
        let fraction = random_float(0.0, 1.0, seed.offset(FRACTION_OFFSET + i as u64));
        *part = budget * fraction;
        budget -= *part;
    }

    let assigned: f64 = parts.iter().sum();
    if assigned > 0.0 {
        let scale = total / assigned;
        parts.iter_mut().for_each(|part| *part *= scale);
        // Absorb rounding so the parts add back to the total
        parts[2] = (total - parts[0] - parts[1]).max(0.0);
    } else {
        parts = [total / 3.0; 3];
    }

    parts.map(Mass::from_earth_masses)
}
