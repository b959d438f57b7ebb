//! Physical constants shared by the generators and the orbit solver.
//!
//! SI values unless the name says otherwise. Every formula in the workspace that
//! needs a physical constant reads it from here so the numbers stay in one place.

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Mass of the Sun (kg)
pub const SOLAR_MASS_KG: f64 = 1.988_47e30;

/// Mass of the Earth (kg)
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Mass of Jupiter (kg)
pub const JUPITER_MASS_KG: f64 = 1.898e27;

/// Nominal solar radius (m)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Mean Earth radius (m)
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Effective temperature of the Sun (K)
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

/// One astronomical unit (m)
pub const AU_M: f64 = 1.496e11;

/// Julian year (s)
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;

/// Mean density of the Earth (g/cm³), used by the sphere-of-influence inner edge
pub const EARTH_DENSITY_G_CM3: f64 = 5.51;
