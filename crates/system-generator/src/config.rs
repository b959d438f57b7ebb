//! Generator tuning, loadable from TOML.
//!
//! Every field has a default matching the built-in generation model, so a
//! config file only needs the values it changes:
//!
//! ```toml
//! [moons]
//! max_per_planet = 2
//!
//! [orbits.scale]
//! kind = "logarithmic"
//! unitsPerDecade = 10.0
//! ```

use std::path::Path;

use orbits::DistanceScale;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub stars: StarsConfig,
    pub multiplicity: MultiplicityConfig,
    pub age: AgeConfig,
    pub orbits: OrbitsConfig,
    pub moons: MoonsConfig,
    pub belts: BeltsConfig,
}

/// Star-count table and stellar mass ceiling.
///
/// The count roll is `randomInt(1, roll_max)`; rolls up to `single_max_roll`
/// give one star, up to `binary_max_roll` two, up to `trinary_max_roll` three,
/// and anything higher none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    pub roll_max: i64,
    pub single_max_roll: i64,
    pub binary_max_roll: i64,
    pub trinary_max_roll: i64,
    /// Solar masses
    pub max_mass: f64,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            roll_max: 120,
            single_max_roll: 78,
            binary_max_roll: 93,
            trinary_max_roll: 100,
            max_mass: 5.0,
        }
    }
}

/// Log-normal separation model for multi-star systems (log10 AU)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplicityConfig {
    pub separation_mu: f64,
    pub separation_sigma: f64,
    pub outer_separation_mu: f64,
    pub outer_separation_sigma: f64,
    /// Upper eccentricity bound per AU of AB separation
    pub eccentricity_per_au: f64,
}

impl Default for MultiplicityConfig {
    fn default() -> Self {
        Self {
            separation_mu: 3.059,
            separation_sigma: 0.6,
            outer_separation_mu: 4.7,
            outer_separation_sigma: 0.7,
            eccentricity_per_au: 0.0017,
        }
    }
}

/// System age bounds in Gyr
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeConfig {
    pub min_gyr: f64,
    pub max_gyr: f64,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            min_gyr: 0.25,
            max_gyr: 10.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitsConfig {
    /// Points per sampled orbit path
    pub path_samples: usize,
    pub scale: DistanceScale,
}

impl Default for OrbitsConfig {
    fn default() -> Self {
        Self {
            path_samples: 128,
            scale: DistanceScale::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoonsConfig {
    pub enabled: bool,
    pub max_per_planet: usize,
}

impl Default for MoonsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_per_planet: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeltsConfig {
    pub enabled: bool,
}

impl Default for BeltsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Reads a config file, failing on a missing or malformed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Reads a config file, falling back to defaults when it is missing or
    /// malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io { .. }) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("{e}. Using defaults.");
                Self::default()
            }
        }
    }
}
