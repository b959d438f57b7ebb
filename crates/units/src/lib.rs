//! Physical constants and typed quantities for star-system generation.

pub mod constants;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod time_test;

pub use length::Length;
pub use mass::Mass;
pub use temperature::Temperature;
pub use time::Time;
