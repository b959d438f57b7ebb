//! Planet classification by physical mass regime
//!
//! Based on Wolfgang, Rogers, & Ford (2016) with refined boundaries for envelope physics.

use sampling::{Seed, random_float};
use serde::{Deserialize, Serialize};
use units::Length;

/// Classification of a planet or moon by mass regime
///
/// | Class        | Mass Range        | Radius Behavior              |
/// |--------------|-------------------|------------------------------|
/// | Rocky        | < 2 M⊕            | R = 1.07·M^0.27              |
/// | Transitional | 2-5 M⊕            | R ∝ M^0.35                   |
/// | Volatile     | 5-160 M⊕          | R ∝ M^0.55                   |
/// | Giant        | > 160 M⊕          | R nearly constant            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetClass {
    Rocky,
    Transitional,
    Volatile,
    Giant,
}

impl PlanetClass {
    /// Mass threshold between Rocky and Transitional regimes (2 Earth masses)
    pub const ROCKY_TRANSITIONAL_THRESHOLD: f64 = 2.0;

    /// Mass threshold between Transitional and Volatile regimes (5 Earth masses)
    pub const TRANSITIONAL_VOLATILE_THRESHOLD: f64 = 5.0;

    /// Mass threshold between Volatile and Giant regimes (~0.5 Jupiter masses)
    pub const VOLATILE_GIANT_THRESHOLD: f64 = 160.0;

    pub fn from_earth_masses(mass_earth: f64) -> Self {
        match mass_earth {
            m if m < Self::ROCKY_TRANSITIONAL_THRESHOLD => Self::Rocky,
            m if m < Self::TRANSITIONAL_VOLATILE_THRESHOLD => Self::Transitional,
            m if m < Self::VOLATILE_GIANT_THRESHOLD => Self::Volatile,
            _ => Self::Giant,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rocky => "Rocky",
            Self::Transitional => "Transitional",
            Self::Volatile => "Volatile",
            Self::Giant => "Giant",
        }
    }

    /// Returns (coefficient, exponent, scatter_sigma) where R = coeff * M^exp (Earth units)
    ///
    /// Scatter sigma is in log10 space.
    ///
    /// # References
    /// - Chen & Kipping (2017) for rocky/transitional planets
    /// - Wolfgang et al. (2016) for volatile planets
    /// - Thorngren et al. (2016) for giant planets
    pub fn mass_radius_params(&self) -> (f64, f64, f64) {
        match self {
            Self::Rocky => (1.07, 0.27, 0.035),
            // Matches the rocky curve at 2 M⊕
            Self::Transitional => (1.07 * 2.0_f64.powf(0.27 - 0.35), 0.35, 0.06),
            Self::Volatile => (0.73, 0.55, 0.08),
            Self::Giant => (11.2, 0.01, 0.04),
        }
    }

    /// Radius from the mass-radius relation with seeded log-normal-ish scatter
    ///
    /// # Arguments
    /// * `mass_earth` - Mass in Earth masses
    /// * `seed` - Draw key for the scatter
    pub fn radius_from_mass(&self, mass_earth: f64, seed: Seed) -> Length {
        let (coeff, exp, sigma) = self.mass_radius_params();
        let base_radius = coeff * mass_earth.max(0.0).powf(exp);
        let log_scatter = random_float(-sigma, sigma, seed);
        Length::from_earth_radii(base_radius * 10_f64.powf(log_scatter))
    }

    pub fn can_retain_envelope(&self) -> bool {
        matches!(self, Self::Transitional | Self::Volatile | Self::Giant)
    }
}

impl std::fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
