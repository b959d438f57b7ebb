//! Members of a generated system.
//!
//! Every star, planet, moon and belt shares a [`BaseEntity`] carrying its
//! identity, its place in the hierarchy and its orbit. Parent links are plain
//! seeds; `None` means the system barycenter.

use orbits::OrbitalElements;
use planetary::{Belt, Body, BodyKind};
use sampling::{Seed, random_float};
use serde::{Deserialize, Serialize};
use stellar::{Color, Star};
use units::{Length, Mass, Time};

const ROTATION_OFFSET: u64 = 20;
const TILT_OFFSET: u64 = 21;

/// Spin state of an entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub period_hours: f64,
    /// Degrees
    pub axial_tilt: f64,
}

impl Rotation {
    /// Main-sequence spin: 10 to 40 days, tilt up to 10°
    pub fn sample_star(seed: Seed) -> Self {
        Self {
            period_hours: random_float(240.0, 960.0, seed.offset(ROTATION_OFFSET)),
            axial_tilt: random_float(0.0, 10.0, seed.offset(TILT_OFFSET)),
        }
    }

    /// Free planetary spin: 8 to 72 hours, tilt up to 30°
    pub fn sample_planet(seed: Seed) -> Self {
        Self {
            period_hours: random_float(8.0, 72.0, seed.offset(ROTATION_OFFSET)),
            axial_tilt: random_float(0.0, 30.0, seed.offset(TILT_OFFSET)),
        }
    }

    /// Tidally locked spin: one turn per orbit
    pub fn tidally_locked(seed: Seed, orbital_period: Time) -> Self {
        Self {
            period_hours: orbital_period.to_hours(),
            axial_tilt: random_float(0.0, 5.0, seed.offset(TILT_OFFSET)),
        }
    }
}

/// Fields shared by every entity in a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEntity {
    /// Identity within the system and the key for every draw about this entity
    pub seed: Seed,
    pub parent_seed: Option<Seed>,
    pub name: String,
    /// Set when the name came from outside and must survive renaming
    pub custom_name: bool,
    pub age: Time,
    pub mass: Mass,
    pub hill_radius: Length,
    pub orbit_color: Color,
    pub orbit: OrbitalElements,
    pub rotation: Rotation,
}

impl BaseEntity {
    pub fn new(seed: Seed, parent_seed: Option<Seed>, mass: Mass) -> Self {
        Self {
            seed,
            parent_seed,
            name: String::new(),
            custom_name: false,
            age: Time::zero(),
            mass,
            hill_radius: Length::zero(),
            orbit_color: Color::default(),
            orbit: OrbitalElements::default(),
            rotation: Rotation::default(),
        }
    }

    pub fn with_orbit(mut self, orbit: OrbitalElements) -> Self {
        self.orbit = orbit;
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_hill_radius(mut self, hill_radius: Length) -> Self {
        self.hill_radius = hill_radius;
        self
    }

    /// Names the entity and protects the name from automatic naming.
    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.custom_name = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarEntity {
    pub base: BaseEntity,
    pub star: Star,
}

/// A planet or a moon; `body.kind` tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyEntity {
    pub base: BaseEntity,
    pub body: Body,
}

impl BodyEntity {
    pub fn is_planet(&self) -> bool {
        self.body.kind == BodyKind::Planet
    }

    pub fn is_moon(&self) -> bool {
        self.body.kind == BodyKind::Moon
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeltEntity {
    pub base: BaseEntity,
    pub belt: Belt,
}

/// Borrowed view of any entity in a [`crate::SystemGraph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'a> {
    Star(&'a StarEntity),
    Body(&'a BodyEntity),
    Belt(&'a BeltEntity),
}

impl<'a> EntityRef<'a> {
    pub fn base(&self) -> &'a BaseEntity {
        match *self {
            EntityRef::Star(star) => &star.base,
            EntityRef::Body(body) => &body.base,
            EntityRef::Belt(belt) => &belt.base,
        }
    }

    pub fn seed(&self) -> Seed {
        self.base().seed
    }

    pub fn mass(&self) -> Mass {
        self.base().mass
    }
}
