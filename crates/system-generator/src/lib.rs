//! Seeded star-system assembly.
//!
//! A [`SystemAssembler`] turns a single seed into a [`SystemGraph`]: one to
//! three stars, planets laid out in resonant slots, moons, debris belts, orbit
//! colors, names and a shared age. The same seed and config always produce
//! the same system.
//!
//! ```no_run
//! use sampling::Seed;
//! use system_generator::generate_system;
//!
//! let system = generate_system(Seed::parse("Kepler"));
//! for planet in system.planets() {
//!     println!("{} at {:.2} AU", planet.base.name, planet.base.orbit.semi_major_axis_au());
//! }
//! ```

pub mod aging;
pub mod allocator;
pub mod assembler;
pub mod coloring;
pub mod config;
pub mod diagnostics;
pub mod entity;
pub mod error;
pub mod graph;
pub mod multiplicity;
pub mod naming;
pub mod stability;

#[cfg(test)]
mod assembler_test;
#[cfg(test)]
mod coloring_test;

pub use assembler::{Stage, SystemAssembler, generate_system, star_count_for_roll};
pub use config::GeneratorConfig;
pub use diagnostics::{CollectingDiagnostics, Diagnostic, Diagnostics, TracingDiagnostics};
pub use entity::{BaseEntity, BeltEntity, BodyEntity, EntityRef, Rotation, StarEntity};
pub use error::ConfigError;
pub use graph::{BinaryConfiguration, SystemGraph};
pub use naming::catalog_name;
