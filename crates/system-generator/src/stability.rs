//! Planet stability limits in binary star systems.
//!
//! # Orbital Types
//!
//! - **S-type**: the planet orbits one star and the companion is external.
//!   Stable only well inside the binary separation.
//! - **P-type**: the planet orbits both stars. Stable only well outside the
//!   binary separation.
//!
//! # References
//! - Holman & Wiegert (1999) - "Dynamical Stability of Planets in Binary Systems"

use units::{Length, Mass};

/// Widest stable orbit around `host` with `companion` outside it.
///
/// ```text
/// a_crit = a_bin·(0.464 - 0.38μ - 0.631e + 0.586μe + 0.15e² - 0.198μe²)
/// ```
/// with μ = M_companion / (M_host + M_companion).
///
/// # Arguments
/// * `separation` - Binary semi-major axis
/// * `eccentricity` - Binary eccentricity
/// * `host_mass` - Mass of the star the planet orbits
/// * `companion_mass` - Mass of the other star
pub fn s_type_limit(
    separation: Length,
    eccentricity: f64,
    host_mass: Mass,
    companion_mass: Mass,
) -> Length {
    let mu = mass_parameter(companion_mass, host_mass + companion_mass);
    let e = eccentricity;

    let factor =
        0.464 - 0.38 * mu - 0.631 * e + 0.586 * mu * e + 0.15 * e.powi(2) - 0.198 * mu * e.powi(2);

    Length::from_au(separation.to_au() * factor.max(0.0))
}

/// Tightest stable orbit around both stars of a binary.
///
/// ```text
/// a_crit = a_bin·(1.60 + 4.12μ + 5.10e - 4.27μe - 2.22e² + 4.61μ²e²)
/// ```
/// with μ = M₂ / (M₁ + M₂) for the lighter star M₂.
pub fn p_type_limit(
    separation: Length,
    eccentricity: f64,
    primary_mass: Mass,
    secondary_mass: Mass,
) -> Length {
    let lighter = primary_mass.min(secondary_mass);
    let mu = mass_parameter(lighter, primary_mass + secondary_mass);
    let e = eccentricity;

    let factor = 1.60 + 4.12 * mu + 5.10 * e - 4.27 * mu * e - 2.22 * e.powi(2)
        + 4.61 * mu.powi(2) * e.powi(2);

    Length::from_au(separation.to_au() * factor)
}

fn mass_parameter(mass: Mass, total: Mass) -> f64 {
    let total = total.to_solar_masses();
    if total <= 0.0 {
        0.0
    } else {
        mass.to_solar_masses() / total
    }
}
