//! Keplerian orbits.
//!
//! Orbital elements are stored in the form the generator produces them
//! (semi-major axis in metres, angles in degrees). An [`Orbit`] binds elements
//! to a parent mass and caches the constants needed for repeated position
//! queries.
//!
//! # Coordinate system
//!
//! Positions are parent-centred Cartesian vectors. The reference plane is x-y;
//! the ascending node is measured from +x and inclination tilts toward +z.

pub mod elements;
pub mod hill;
pub mod kepler;
pub mod orbit;
pub mod scale;

#[cfg(test)]
mod kepler_test;
#[cfg(test)]
mod scale_test;

pub use elements::OrbitalElements;
pub use hill::hill_radius;
pub use kepler::{solve_eccentric_anomaly, true_anomaly};
pub use orbit::Orbit;
pub use scale::DistanceScale;
