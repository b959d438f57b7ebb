use units::{Length, Mass};

/// Hill sphere radius: `r_H = a(1 - e)·(m / 3M)^(1/3)`
///
/// Evaluated at periapsis, where the parent's pull is strongest. A massless
/// parent has no tidal limit and yields zero.
///
/// # Arguments
/// * `semi_major_axis` - Orbit of the body around its parent
/// * `eccentricity` - Orbit eccentricity
/// * `mass` - Mass of the orbiting body
/// * `parent_mass` - Mass of the body it orbits
pub fn hill_radius(
    semi_major_axis: Length,
    eccentricity: f64,
    mass: Mass,
    parent_mass: Mass,
) -> Length {
    let parent = parent_mass.to_solar_masses();
    if parent <= 0.0 {
        return Length::zero();
    }

    let ratio = (mass.to_solar_masses() / (3.0 * parent)).max(0.0);
    semi_major_axis * ((1.0 - eccentricity) * ratio.cbrt())
}
