//! Star generation, aging and coloring.
//!
//! Stars are seeded main-sequence objects: a single uniform draw picks the mass,
//! and radius, temperature, luminosity and lifespan follow from it through
//! scaling relations. Aging swells the radius and brightens the star while the
//! surface temperature holds.

pub mod color;
pub mod generation;
pub mod spectral;
pub mod star;

#[cfg(test)]
mod color_test;
#[cfg(test)]
mod spectral_test;
#[cfg(test)]
mod star_test;

pub use color::{Color, ColorLookup, SpectralColorLookup};
pub use generation::{StarGen, generate_star, sample_stellar_mass};
pub use spectral::{SpectralClass, SpectralType};
pub use star::{MAX_STELLAR_MASS, MIN_STELLAR_MASS, Star};
