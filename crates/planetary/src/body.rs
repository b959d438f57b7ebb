use serde::{Deserialize, Serialize};
use units::{Length, Mass, Temperature};

use crate::atmosphere::Atmosphere;
use crate::composition::SurfaceComposition;
use crate::generation::equilibrium_temperature;
use crate::planet_class::PlanetClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Planet,
    Moon,
}

/// Intrinsic properties of a planet or moon.
///
/// Total mass is split between the solid body (`composition.mass()`) and the
/// atmosphere (`atmosphere.mass()`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub kind: BodyKind,
    pub class: PlanetClass,
    pub composition: SurfaceComposition,
    pub atmosphere: Atmosphere,
    pub radius: Length,
    pub equilibrium_temperature: Temperature,
}

impl Body {
    pub fn mass(&self) -> Mass {
        self.composition.mass() + self.atmosphere.mass()
    }

    /// Returns a copy heated by a star of `luminosity` L☉ at `distance`.
    pub fn with_illumination(&self, luminosity: f64, distance: Length) -> Self {
        Self {
            equilibrium_temperature: equilibrium_temperature(luminosity, distance),
            ..self.clone()
        }
    }
}
