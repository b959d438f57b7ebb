use serde::{Deserialize, Serialize};
use units::{Length, Time};

/// Keplerian orbital elements.
///
/// Construction clamps the elements into a valid bound orbit: the semi-major
/// axis is at least one metre and eccentricity lies in `[0, 0.9999]`. Angles are
/// kept as given; use the `*_normalized` readers for values in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawElements")]
pub struct OrbitalElements {
    /// Semi-major axis (metres)
    semi_major_axis: f64,
    /// Eccentricity (dimensionless)
    eccentricity: f64,
    /// Inclination (degrees)
    inclination: f64,
    /// Longitude of ascending node (degrees)
    longitude_of_ascending_node: f64,
    /// Argument of periapsis (degrees)
    argument_of_periapsis: f64,
    /// Time of periapsis passage (seconds)
    epoch: f64,
}

/// Unchecked serialized form; goes through the clamping constructor
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawElements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    longitude_of_ascending_node: f64,
    argument_of_periapsis: f64,
    #[serde(default)]
    epoch: f64,
}

impl From<RawElements> for OrbitalElements {
    fn from(raw: RawElements) -> Self {
        Self::new(
            Length::from_meters(raw.semi_major_axis),
            raw.eccentricity,
            raw.inclination,
            raw.longitude_of_ascending_node,
            raw.argument_of_periapsis,
        )
        .with_epoch(Time::from_seconds(raw.epoch))
    }
}

impl Default for OrbitalElements {
    fn default() -> Self {
        Self::circular(Length::zero())
    }
}

impl OrbitalElements {
    pub const MIN_SEMI_MAJOR_AXIS_M: f64 = 1.0;
    pub const MAX_ECCENTRICITY: f64 = 0.9999;

    /// # Arguments
    /// * `semi_major_axis` - Orbit size
    /// * `eccentricity` - Shape, clamped to `[0, 0.9999]`
    /// * `inclination` - Tilt of the orbital plane (degrees)
    /// * `longitude_of_ascending_node` - Degrees from the reference direction
    /// * `argument_of_periapsis` - Degrees from the ascending node
    pub fn new(
        semi_major_axis: Length,
        eccentricity: f64,
        inclination: f64,
        longitude_of_ascending_node: f64,
        argument_of_periapsis: f64,
    ) -> Self {
        Self {
            semi_major_axis: clamp_semi_major_axis(semi_major_axis.to_m()),
            eccentricity: clamp_eccentricity(eccentricity),
            inclination,
            longitude_of_ascending_node,
            argument_of_periapsis,
            epoch: 0.0,
        }
    }

    /// Circular, uninclined orbit
    pub fn circular(semi_major_axis: Length) -> Self {
        Self::new(semi_major_axis, 0.0, 0.0, 0.0, 0.0)
    }

    pub fn with_epoch(mut self, epoch: Time) -> Self {
        self.epoch = if epoch.to_seconds().is_finite() { epoch.to_seconds() } else { 0.0 };
        self
    }

    pub fn with_semi_major_axis(mut self, semi_major_axis: Length) -> Self {
        self.semi_major_axis = clamp_semi_major_axis(semi_major_axis.to_m());
        self
    }

    pub fn with_eccentricity(mut self, eccentricity: f64) -> Self {
        self.eccentricity = clamp_eccentricity(eccentricity);
        self
    }

    pub fn semi_major_axis(&self) -> Length {
        Length::from_meters(self.semi_major_axis)
    }

    pub fn semi_major_axis_m(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn semi_major_axis_au(&self) -> f64 {
        self.semi_major_axis().to_au()
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn longitude_of_ascending_node(&self) -> f64 {
        self.longitude_of_ascending_node
    }

    pub fn argument_of_periapsis(&self) -> f64 {
        self.argument_of_periapsis
    }

    pub fn inclination_normalized(&self) -> f64 {
        normalize_degrees(self.inclination)
    }

    pub fn longitude_of_ascending_node_normalized(&self) -> f64 {
        normalize_degrees(self.longitude_of_ascending_node)
    }

    pub fn argument_of_periapsis_normalized(&self) -> f64 {
        normalize_degrees(self.argument_of_periapsis)
    }

    pub fn epoch(&self) -> Time {
        Time::from_seconds(self.epoch)
    }

    /// Closest approach: a(1 - e)
    pub fn periapsis(&self) -> Length {
        Length::from_meters(self.semi_major_axis * (1.0 - self.eccentricity))
    }

    /// Farthest distance: a(1 + e)
    pub fn apoapsis(&self) -> Length {
        Length::from_meters(self.semi_major_axis * (1.0 + self.eccentricity))
    }
}

fn clamp_semi_major_axis(metres: f64) -> f64 {
    if metres.is_nan() {
        OrbitalElements::MIN_SEMI_MAJOR_AXIS_M
    } else {
        metres.max(OrbitalElements::MIN_SEMI_MAJOR_AXIS_M)
    }
}

fn clamp_eccentricity(eccentricity: f64) -> f64 {
    if eccentricity.is_nan() {
        0.0
    } else {
        eccentricity.clamp(0.0, OrbitalElements::MAX_ECCENTRICITY)
    }
}

/// Wraps an angle into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
