//! Atmospheres as gas mixes.
//!
//! Classification follows the retention picture: a body keeps an atmosphere
//! when its escape velocity is high for its temperature, and which gases it
//! keeps depends on its mass regime and how warm it is.
//!
//! # References
//! - Seager & Deming (2010) - "Exoplanet Atmospheres"
//! - Zahnle & Catling (2017) - "The Cosmic Shoreline"

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use units::Mass;

use crate::planet_class::PlanetClass;

/// Atmospheric constituent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Hydrogen,
    Helium,
    Nitrogen,
    Oxygen,
    Argon,
    CarbonDioxide,
    Methane,
    Ammonia,
    WaterVapor,
    SulfurDioxide,
}

impl Element {
    pub fn formula(&self) -> &'static str {
        match self {
            Self::Hydrogen => "H₂",
            Self::Helium => "He",
            Self::Nitrogen => "N₂",
            Self::Oxygen => "O₂",
            Self::Argon => "Ar",
            Self::CarbonDioxide => "CO₂",
            Self::Methane => "CH₄",
            Self::Ammonia => "NH₃",
            Self::WaterVapor => "H₂O",
            Self::SulfurDioxide => "SO₂",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula())
    }
}

/// Gas mix (percent by element) and total atmospheric mass.
///
/// Percentages never sum above 100; anything short of 100 is unlisted trace
/// gases.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawAtmosphere")]
pub struct Atmosphere {
    gases: BTreeMap<Element, f64>,
    mass: Mass,
}

#[derive(Deserialize)]
struct RawAtmosphere {
    gases: BTreeMap<Element, f64>,
    mass: Mass,
}

impl From<RawAtmosphere> for Atmosphere {
    fn from(raw: RawAtmosphere) -> Self {
        Self::new(raw.gases, raw.mass)
    }
}

impl Atmosphere {
    /// Builds an atmosphere, dropping non-positive entries and scaling the mix
    /// down if it exceeds 100%.
    pub fn new(gases: impl IntoIterator<Item = (Element, f64)>, mass: Mass) -> Self {
        let mut gases: BTreeMap<Element, f64> = gases
            .into_iter()
            .filter(|(_, percent)| *percent > 0.0 && percent.is_finite())
            .collect();

        let total: f64 = gases.values().sum();
        if total > 100.0 {
            let scale = 100.0 / total;
            gases.values_mut().for_each(|percent| *percent *= scale);
        }

        Self { gases, mass }
    }

    /// Airless body
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns a copy with `element` set to `percent`, renormalized.
    pub fn with_gas(&self, element: Element, percent: f64) -> Self {
        let mut gases = self.gases.clone();
        gases.insert(element, percent);
        Self::new(gases, self.mass)
    }

    pub fn with_mass(&self, mass: Mass) -> Self {
        Self {
            gases: self.gases.clone(),
            mass,
        }
    }

    pub fn percent(&self, element: Element) -> f64 {
        self.gases.get(&element).copied().unwrap_or(0.0)
    }

    pub fn gases(&self) -> &BTreeMap<Element, f64> {
        &self.gases
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn total(&self) -> f64 {
        self.gases.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.gases.is_empty()
    }

    /// Most abundant gas
    pub fn dominant(&self) -> Option<Element> {
        self.gases
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(element, _)| *element)
    }
}

/// Atmosphere regime a body falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosphereKind {
    /// Hard vacuum
    None,
    /// Exosphere only, Luna/Mercury-like
    Trace,
    /// Mars-like
    ThinCO2,
    /// Earth-like
    NitrogenOxygen,
    /// Venus-like
    ThickCO2,
    /// Titan-like
    MethaneNitrogen,
    /// Steam world
    WaterVapor,
    /// Mini-Neptune or ice giant envelope
    HydrogenMethane,
    /// Gas giant, Jupiter/Saturn-like
    HydrogenHelium,
}

impl AtmosphereKind {
    /// Classify by mass regime, temperature and escape velocity
    ///
    /// # Arguments
    /// * `mass_earth` - Body mass in Earth masses
    /// * `temperature` - Equilibrium temperature in Kelvin
    /// * `class` - Mass regime of the body
    /// * `escape_velocity` - Escape velocity in km/s
    pub fn classify(
        mass_earth: f64,
        temperature: f64,
        class: PlanetClass,
        escape_velocity: f64,
    ) -> Self {
        // Cold gas moves slowly, so cold bodies hold on with less gravity
        let min_escape_velocity = match temperature {
            t if t < 50.0 => 1.0,
            t if t < 150.0 => 2.0,
            t if t < 400.0 => 5.0,
            _ => 7.0,
        };

        if escape_velocity < min_escape_velocity {
            return if mass_earth > 0.001 && temperature < 500.0 {
                Self::Trace
            } else {
                Self::None
            };
        }

        match class {
            PlanetClass::Giant => Self::HydrogenHelium,
            PlanetClass::Volatile => Self::HydrogenMethane,
            PlanetClass::Transitional => match temperature {
                t if t > 600.0 => Self::ThickCO2,
                t if t > 373.0 => Self::WaterVapor,
                _ => Self::HydrogenMethane,
            },
            PlanetClass::Rocky => match (mass_earth, temperature) {
                (m, t) if m <= 0.05 && (80.0..120.0).contains(&t) => Self::MethaneNitrogen,
                (m, t) if m < 0.5 && t < 250.0 => Self::ThinCO2,
                (_, t) if (250.0..=350.0).contains(&t) => Self::NitrogenOxygen,
                (_, t) if t > 350.0 && t < 700.0 => Self::ThickCO2,
                (_, t) if t >= 700.0 => Self::WaterVapor,
                _ => Self::ThinCO2,
            },
        }
    }

    /// Representative gas percentages for this regime
    pub fn mix(&self) -> Vec<(Element, f64)> {
        use Element::*;
        match self {
            Self::None => vec![],
            Self::Trace => vec![(Argon, 40.0), (Helium, 30.0), (Oxygen, 20.0)],
            Self::ThinCO2 => vec![(CarbonDioxide, 95.0), (Nitrogen, 2.8), (Argon, 2.0)],
            Self::NitrogenOxygen => vec![(Nitrogen, 78.0), (Oxygen, 21.0), (Argon, 0.9)],
            Self::ThickCO2 => vec![(CarbonDioxide, 96.5), (Nitrogen, 3.4), (SulfurDioxide, 0.1)],
            Self::MethaneNitrogen => vec![(Nitrogen, 94.0), (Methane, 5.7)],
            Self::WaterVapor => vec![(WaterVapor, 80.0), (CarbonDioxide, 15.0), (Nitrogen, 5.0)],
            Self::HydrogenMethane => vec![(Hydrogen, 80.0), (Helium, 18.0), (Methane, 2.0)],
            Self::HydrogenHelium => vec![(Hydrogen, 86.0), (Helium, 13.6), (Methane, 0.3)],
        }
    }

    /// Range of the atmosphere's share of total body mass
    pub fn mass_fraction_range(&self) -> (f64, f64) {
        match self {
            Self::None => (0.0, 0.0),
            Self::Trace => (1e-14, 1e-12),
            Self::ThinCO2 | Self::MethaneNitrogen => (1e-8, 1e-6),
            Self::NitrogenOxygen => (5e-7, 2e-6),
            Self::ThickCO2 | Self::WaterVapor => (5e-5, 2e-4),
            Self::HydrogenMethane => (0.02, 0.3),
            Self::HydrogenHelium => (0.7, 0.95),
        }
    }
}
