use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use units::constants::AU_M;

/// Mapping from physical distance (metres) to output units.
///
/// Logarithmic scaling compresses the radius along the position's direction so
/// that inner and outer orbits both stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DistanceScale {
    /// Output = distance in AU × `units_per_au`
    #[serde(rename_all = "camelCase")]
    Linear { units_per_au: f64 },
    /// Output radius = log10(1 + distance in AU) × `units_per_decade`
    #[serde(rename_all = "camelCase")]
    Logarithmic { units_per_decade: f64 },
}

impl Default for DistanceScale {
    fn default() -> Self {
        DistanceScale::Linear { units_per_au: 1.0 }
    }
}

impl DistanceScale {
    /// Scales a single distance given in metres.
    pub fn apply(&self, metres: f64) -> f64 {
        let au = metres / AU_M;
        match *self {
            DistanceScale::Linear { units_per_au } => au * units_per_au,
            DistanceScale::Logarithmic { units_per_decade } => {
                au.signum() * (1.0 + au.abs()).log10() * units_per_decade
            }
        }
    }

    /// Scales a position vector in metres, preserving its direction.
    pub fn apply_vector(&self, position: Vector3<f64>) -> Vector3<f64> {
        let distance = position.norm();
        if distance == 0.0 {
            return Vector3::zeros();
        }
        position * (self.apply(distance) / distance)
    }
}
