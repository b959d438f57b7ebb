use serde::{Deserialize, Serialize};

use crate::constants::SOLAR_TEMPERATURE_K;

/// A temperature quantity in Kelvin.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let sun = Temperature::solar();
/// assert_eq!(sun.to_kelvin(), 5778.0);
/// assert_eq!(sun.solar_ratio(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Effective temperature of the Sun
    pub fn solar() -> Self {
        Self(SOLAR_TEMPERATURE_K)
    }

    /// Returns the temperature in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Celsius.
    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// Ratio to the solar effective temperature (T / T☉)
    pub fn solar_ratio(&self) -> f64 {
        self.0 / SOLAR_TEMPERATURE_K
    }

    /// Restricts the temperature to `[min, max]` Kelvin.
    pub fn clamp(self, min: f64, max: f64) -> Self {
        Self(self.0.clamp(min, max))
    }
}
