use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::constants::SECONDS_PER_YEAR;

const HOURS_PER_YEAR: f64 = 8_766.0; // 365.25 * 24
const GYR_TO_YEARS: f64 = 1.0e9;

/// A time quantity with years as the base unit.
///
/// System ages and stellar lifespans are quoted in billions of years (Gyr),
/// rotation periods in hours and orbit epochs in seconds.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let age = Time::from_gyr(4.6);
/// assert_eq!(age.to_gyr(), 4.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    /// Creates a `Time` from a value in billions of years.
    pub fn from_gyr(value: f64) -> Self {
        Self(value * GYR_TO_YEARS)
    }

    /// Creates a `Time` from a value in hours.
    pub fn from_hours(value: f64) -> Self {
        Self(value / HOURS_PER_YEAR)
    }

    /// Creates a `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_YEAR)
    }

    /// Returns the time in years.
    pub fn to_years(&self) -> f64 {
        self.0
    }

    /// Returns the time in billions of years.
    pub fn to_gyr(&self) -> f64 {
        self.0 / GYR_TO_YEARS
    }

    /// Converts the time to hours.
    pub fn to_hours(&self) -> f64 {
        self.0 * HOURS_PER_YEAR
    }

    /// Converts the time to seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}
