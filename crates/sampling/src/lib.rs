//! Deterministic random draws keyed by seed.
//!
//! Every draw is a pure function of its seed: the same seed always yields the
//! same value, so a generated system can be rebuilt from its seed alone. Callers
//! that need several independent values from one entity derive sibling keys with
//! [`Seed::offset`]. Child generations (a star's planets, a planet's moons) take
//! [`Seed::child`] keys from a separate keystream, so neither siblings nor the
//! parent share draws.

pub mod distributions;
pub mod draw;
pub mod seed;

#[cfg(test)]
mod distributions_test;
#[cfg(test)]
mod draw_test;

pub use distributions::{sample_gaussian, sample_log_normal};
pub use draw::{
    child_seed, random_float, random_float_unseeded, random_int, random_int_unseeded, random_unit,
    tweak_seed,
};
pub use seed::Seed;
