//! Planet, moon and belt generation.
//!
//! Bodies are built from a seed plus their host star's context. Composition
//! comes from where the body formed relative to the star's frost and
//! sublimation lines; atmosphere and radius come from its mass regime.

pub mod atmosphere;
pub mod belt;
pub mod body;
pub mod composition;
pub mod generation;
pub mod planet_class;
pub mod zones;

pub use atmosphere::{Atmosphere, AtmosphereKind, Element};
pub use belt::{Belt, generate_belt, sample_belt_mass};
pub use body::{Body, BodyKind};
pub use composition::SurfaceComposition;
pub use generation::{
    BodyEnvironment, equilibrium_temperature, generate_body, sample_moon_count, sample_moon_mass,
    sample_planet_mass,
};
pub use planet_class::PlanetClass;

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod belt_test;
