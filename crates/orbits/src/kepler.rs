//! Kepler's equation.

/// Newton-Raphson iteration cap
pub const MAX_ITERATIONS: usize = 5;
/// Convergence threshold on the eccentric-anomaly step (radians)
pub const TOLERANCE: f64 = 1e-6;

/// Solve Kepler's equation `M = E - e sin(E)` for the eccentric anomaly.
///
/// Newton-Raphson on `f(E) = M - E + e sin(E)` from `E₀ = M`, stopping once a
/// step is below [`TOLERANCE`] or after [`MAX_ITERATIONS`]. There is no failure
/// path: whatever the last iterate is gets returned.
///
/// # Arguments
/// * `mean_anomaly` - Mean anomaly M (radians)
/// * `eccentricity` - Eccentricity e, `0 ≤ e < 1`
///
/// # Returns
/// Eccentric anomaly E (radians)
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly;

    for _ in 0..MAX_ITERATIONS {
        let f = mean_anomaly - ecc_anomaly + eccentricity * ecc_anomaly.sin();
        let f_prime = -1.0 + eccentricity * ecc_anomaly.cos();

        let delta = f / f_prime;
        ecc_anomaly -= delta;

        if delta.abs() < TOLERANCE {
            break;
        }
    }

    ecc_anomaly
}

/// Mean anomaly for a given eccentric anomaly: `M = E - e sin(E)`
pub fn mean_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin()
}

/// `sqrt((1 + e) / (1 - e))`, the factor relating the half-angle tangents
pub fn true_anomaly_constant(eccentricity: f64) -> f64 {
    ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt()
}

/// True anomaly from eccentric anomaly: `ν = 2·atan(c·tan(E/2))`
///
/// Result lies in `[-π, π]`.
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    true_anomaly_from_constant(eccentric_anomaly, true_anomaly_constant(eccentricity))
}

pub(crate) fn true_anomaly_from_constant(eccentric_anomaly: f64, constant: f64) -> f64 {
    2.0 * (constant * (eccentric_anomaly / 2.0).tan()).atan()
}
