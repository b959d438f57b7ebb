use serde::{Deserialize, Serialize};
use units::Mass;

/// Solid make-up of a body as rock/ice/metal percentages plus the solid mass.
///
/// The three percentages always sum to 100. Every constructor and `with_*`
/// method renormalizes, so there is no way to build an unbalanced value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawComposition")]
pub struct SurfaceComposition {
    rock: f64,
    ice: f64,
    metal: f64,
    mass: Mass,
}

#[derive(Deserialize)]
struct RawComposition {
    rock: f64,
    ice: f64,
    metal: f64,
    mass: Mass,
}

impl From<RawComposition> for SurfaceComposition {
    fn from(raw: RawComposition) -> Self {
        Self::new(raw.rock, raw.ice, raw.metal, raw.mass)
    }
}

impl Default for SurfaceComposition {
    fn default() -> Self {
        Self::new(100.0, 0.0, 0.0, Mass::zero())
    }
}

impl SurfaceComposition {
    /// Builds a composition from unnormalized parts.
    ///
    /// Negative or NaN parts count as zero. If nothing is left the body is
    /// taken to be pure rock.
    pub fn new(rock: f64, ice: f64, metal: f64, mass: Mass) -> Self {
        let rock = non_negative(rock);
        let ice = non_negative(ice);
        let metal = non_negative(metal);
        let total = rock + ice + metal;

        if total <= 0.0 || !total.is_finite() {
            return Self {
                rock: 100.0,
                ice: 0.0,
                metal: 0.0,
                mass,
            };
        }

        let scale = 100.0 / total;
        Self {
            rock: rock * scale,
            ice: ice * scale,
            metal: metal * scale,
            mass,
        }
    }

    pub fn rock(&self) -> f64 {
        self.rock
    }

    pub fn ice(&self) -> f64 {
        self.ice
    }

    pub fn metal(&self) -> f64 {
        self.metal
    }

    /// Solid mass
    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn total(&self) -> f64 {
        self.rock + self.ice + self.metal
    }

    /// Sets the rock percentage; ice and metal share the rest in their
    /// current proportion.
    pub fn with_rock(&self, percent: f64) -> Self {
        let rock = clamp_percent(percent);
        let (ice, metal) = share_remainder(100.0 - rock, self.ice, self.metal);
        match (ice, metal) {
            (Some(ice), Some(metal)) => Self::new(rock, ice, metal, self.mass),
            _ => Self::new(100.0, 0.0, 0.0, self.mass),
        }
    }

    /// Sets the ice percentage; rock and metal share the rest in their
    /// current proportion, or rock takes it all if both are empty.
    pub fn with_ice(&self, percent: f64) -> Self {
        let ice = clamp_percent(percent);
        let remainder = 100.0 - ice;
        match share_remainder(remainder, self.rock, self.metal) {
            (Some(rock), Some(metal)) => Self::new(rock, ice, metal, self.mass),
            _ => Self::new(remainder, ice, 0.0, self.mass),
        }
    }

    /// Sets the metal percentage; rock and ice share the rest in their
    /// current proportion, or rock takes it all if both are empty.
    pub fn with_metal(&self, percent: f64) -> Self {
        let metal = clamp_percent(percent);
        let remainder = 100.0 - metal;
        match share_remainder(remainder, self.rock, self.ice) {
            (Some(rock), Some(ice)) => Self::new(rock, ice, metal, self.mass),
            _ => Self::new(remainder, 0.0, metal, self.mass),
        }
    }

    pub fn with_mass(&self, mass: Mass) -> Self {
        Self { mass, ..*self }
    }
}

/// Splits `remainder` across two parts in proportion; `None` when both are empty.
fn share_remainder(remainder: f64, a: f64, b: f64) -> (Option<f64>, Option<f64>) {
    let total = a + b;
    if total <= 0.0 {
        return (None, None);
    }
    (Some(remainder * a / total), Some(remainder * b / total))
}

fn clamp_percent(percent: f64) -> f64 {
    non_negative(percent).min(100.0)
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
