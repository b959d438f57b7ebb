use std::f64::consts::TAU;

use nalgebra::Vector3;
use units::constants::GRAVITATIONAL_CONSTANT;
use units::{Mass, Time};

use crate::elements::OrbitalElements;
use crate::kepler::{solve_eccentric_anomaly, true_anomaly_constant, true_anomaly_from_constant};
use crate::scale::DistanceScale;

/// Orbital elements bound to a parent mass.
///
/// Caches the per-orbit constants so that position queries only solve Kepler's
/// equation and rotate. The cache is rebuilt whenever the elements or the parent
/// mass change.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    elements: OrbitalElements,
    parent_mass: Mass,
    /// Standard gravitational parameter G·M (m³/s²)
    mu: f64,
    /// Mean motion (rad/s)
    mean_motion: f64,
    true_anomaly_constant: f64,
    argument_of_periapsis: f64,
    sin_node: f64,
    cos_node: f64,
    sin_inclination: f64,
    cos_inclination: f64,
}

impl Orbit {
    pub fn new(elements: OrbitalElements, parent_mass: Mass) -> Self {
        let mu = GRAVITATIONAL_CONSTANT * parent_mass.to_kg().max(0.0);
        let a = elements.semi_major_axis_m();
        let node = elements.longitude_of_ascending_node().to_radians();
        let inclination = elements.inclination().to_radians();

        Self {
            elements,
            parent_mass,
            mu,
            mean_motion: (mu / a.powi(3)).sqrt(),
            true_anomaly_constant: true_anomaly_constant(elements.eccentricity()),
            argument_of_periapsis: elements.argument_of_periapsis().to_radians(),
            sin_node: node.sin(),
            cos_node: node.cos(),
            sin_inclination: inclination.sin(),
            cos_inclination: inclination.cos(),
        }
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn parent_mass(&self) -> Mass {
        self.parent_mass
    }

    pub fn set_elements(&mut self, elements: OrbitalElements) {
        *self = Self::new(elements, self.parent_mass);
    }

    pub fn set_parent_mass(&mut self, parent_mass: Mass) {
        *self = Self::new(self.elements, parent_mass);
    }

    /// Standard gravitational parameter of the parent (m³/s²)
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Mean motion n = sqrt(μ/a³) in rad/s
    pub fn mean_motion(&self) -> f64 {
        self.mean_motion
    }

    /// Orbital period T = 2π/n. Infinite around a massless parent.
    pub fn period(&self) -> Time {
        if self.mean_motion > 0.0 {
            Time::from_seconds(TAU / self.mean_motion)
        } else {
            Time::from_seconds(f64::INFINITY)
        }
    }

    /// Mean anomaly at `time`: M = n·(t - epoch), wrapped to `[0, 2π)`
    pub fn mean_anomaly_at(&self, time: Time) -> f64 {
        let elapsed = time.to_seconds() - self.elements.epoch().to_seconds();
        (self.mean_motion * elapsed).rem_euclid(TAU)
    }

    /// Parent-centred position at `time`, scaled for output.
    pub fn position_at(&self, time: Time, scale: DistanceScale) -> Vector3<f64> {
        scale.apply_vector(self.position_at_mean_anomaly(self.mean_anomaly_at(time)))
    }

    /// Parent-centred position in metres for a given mean anomaly.
    ///
    /// The in-plane vector `(r·cos(ω+ν), r·sin(ω+ν), 0)` is rotated by the
    /// inclination about the node line, then by the node about z.
    pub fn position_at_mean_anomaly(&self, mean_anomaly: f64) -> Vector3<f64> {
        let e = self.elements.eccentricity();
        let a = self.elements.semi_major_axis_m();

        let ecc_anomaly = solve_eccentric_anomaly(mean_anomaly, e);
        let nu = true_anomaly_from_constant(ecc_anomaly, self.true_anomaly_constant);
        let r = a * (1.0 - e * ecc_anomaly.cos());

        let (sin_u, cos_u) = (self.argument_of_periapsis + nu).sin_cos();

        Vector3::new(
            r * (self.cos_node * cos_u - self.sin_node * sin_u * self.cos_inclination),
            r * (self.sin_node * cos_u + self.cos_node * sin_u * self.cos_inclination),
            r * sin_u * self.sin_inclination,
        )
    }

    /// `samples` points along the orbit at equally spaced mean-anomaly phases,
    /// starting at periapsis.
    pub fn path(&self, samples: usize, scale: DistanceScale) -> Vec<Vector3<f64>> {
        (0..samples)
            .map(|i| {
                let phase = TAU * i as f64 / samples as f64;
                scale.apply_vector(self.position_at_mean_anomaly(phase))
            })
            .collect()
    }
}
