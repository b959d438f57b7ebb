use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::constants::{EARTH_DENSITY_G_CM3, SOLAR_TEMPERATURE_K};
use units::{Length, Mass, Temperature, Time};

use crate::spectral::SpectralClass;

/// Lightest star the generator produces (solar masses)
pub const MIN_STELLAR_MASS: f64 = 0.1;
/// Heaviest star the generator produces (solar masses)
pub const MAX_STELLAR_MASS: f64 = 5.0;

/// Sphere-of-influence edge per unit sqrt(L0), in AU
const SOI_EDGE_SCALE: f64 = 75.0;

/// A main-sequence star
///
/// Every field is derived from mass (and age, for radius and luminosity), so a
/// star is only built through [`Star::from_mass`] and changed through
/// [`Star::with_mass`] / [`Star::with_age`].
///
/// # Relations
/// * radius at formation: R0 = M^0.7
/// * temperature: T = (1.25·R0)^0.54 · T☉ (constant with age)
/// * luminosity: L = R²·(T/T☉)^4
/// * main-sequence lifespan: τ = M^-2.5 · 10 Gyr
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub mass: Mass,
    /// Current radius
    pub radius: Length,
    /// Radius at formation
    pub base_radius: Length,
    /// Current luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Luminosity at formation in L☉; drives composition and orbit zones
    pub base_luminosity: f64,
    pub temperature: Temperature,
    pub lifespan: Time,
    pub age: Time,
    pub spectral_class: SpectralClass,
}

impl Star {
    /// Builds a zero-age star. Mass is clamped to the generator's stellar range.
    pub fn from_mass(mass: Mass) -> Self {
        let solar_masses = mass
            .to_solar_masses()
            .clamp(MIN_STELLAR_MASS, MAX_STELLAR_MASS);

        let base_radius = Length::from_solar_radii(solar_masses.powf(0.7));
        let temperature = Temperature::from_kelvin(
            (base_radius.to_solar_radii() * 1.25).powf(0.54) * SOLAR_TEMPERATURE_K,
        );
        // Same path as with_age so a zero-age star reproduces L0 exactly
        let base_luminosity = luminosity(base_radius.to_solar_radii(), temperature);

        Self {
            mass: Mass::from_solar_masses(solar_masses),
            radius: base_radius,
            base_radius,
            luminosity: base_luminosity,
            base_luminosity,
            temperature,
            lifespan: Time::from_gyr(solar_masses.powf(-2.5) * 10.0),
            age: Time::zero(),
            spectral_class: SpectralClass::from_temperature(temperature),
        }
    }

    /// Returns this star aged to `age`, starting from its formation state.
    ///
    /// Ages past the lifespan are accepted; the star just keeps swelling.
    /// Negative ages are treated as zero.
    pub fn with_age(&self, age: Time) -> Self {
        let age_gyr = age.to_gyr().max(0.0);
        let adjusted_age = age_gyr / self.lifespan.to_gyr();
        let base_radius = self.base_radius.to_solar_radii();
        let radius = base_radius * (1.0 + 0.5 * adjusted_age);

        Self {
            radius: Length::from_solar_radii(radius),
            luminosity: luminosity(radius, self.temperature),
            age: Time::from_gyr(age_gyr),
            ..self.clone()
        }
    }

    /// Rebuilds the star for a new mass, keeping its current age.
    pub fn with_mass(&self, mass: Mass) -> Self {
        Self::from_mass(mass).with_age(self.age)
    }

    /// Outer edge of the planet-forming region: sqrt(L0)·75 AU
    pub fn sphere_of_influence_edge(&self) -> Length {
        Length::from_au(self.base_luminosity.sqrt() * SOI_EDGE_SCALE)
    }

    /// Innermost stable planet distance: ((3M)/(9π·ρ⊕))^0.33 AU
    pub fn sphere_of_influence_inner(&self) -> Length {
        let solar_masses = self.mass.to_solar_masses();
        Length::from_au(((3.0 * solar_masses) / (9.0 * PI * EARTH_DENSITY_G_CM3)).powf(0.33))
    }
}

/// L = R²·(T/T☉)^4 with R in solar radii
fn luminosity(radius_solar: f64, temperature: Temperature) -> f64 {
    radius_solar.powi(2) * temperature.solar_ratio().powi(4)
}
