use std::fmt;

use serde::{Deserialize, Serialize};
use units::Temperature;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    // Brown dwarfs
    L,
    T,
    Y,
}

/// Lower temperature bound of each type (Kelvin), hottest first
const TEMP_BOUNDS: [(SpectralType, f64); 10] = [
    (SpectralType::O, 30000.0),
    (SpectralType::B, 10000.0),
    (SpectralType::A, 7500.0),
    (SpectralType::F, 6000.0),
    (SpectralType::G, 5200.0),
    (SpectralType::K, 3700.0),
    (SpectralType::M, 2400.0),
    (SpectralType::L, 1300.0),
    (SpectralType::T, 550.0),
    (SpectralType::Y, 0.0),
];

impl SpectralType {
    pub fn from_temperature(temperature: Temperature) -> Self {
        let kelvin = temperature.to_kelvin();
        TEMP_BOUNDS
            .iter()
            .find(|(_, bound)| kelvin >= *bound)
            .map(|(spectral_type, _)| *spectral_type)
            .unwrap_or(SpectralType::Y)
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
            SpectralType::L => "L",
            SpectralType::T => "T",
            SpectralType::Y => "Y",
        };
        write!(f, "{}", str)
    }
}

/// Harvard class plus numeric subtype, e.g. G2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectralClass {
    pub spectral_type: SpectralType,
    /// 0 (hottest) to 9 (coolest) within the type
    pub subtype: u8,
}

impl SpectralClass {
    pub fn from_temperature(temperature: Temperature) -> Self {
        Self {
            spectral_type: SpectralType::from_temperature(temperature),
            subtype: calculate_subtype(temperature),
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.spectral_type, self.subtype)
    }
}

/// Spectral subtype (0-9) by linear position inside the type's temperature band.
///
/// O stars have no upper bound; their band is taken as 20000 K wide.
pub fn calculate_subtype(temperature: Temperature) -> u8 {
    const O_BAND_WIDTH: f64 = 20000.0;
    let kelvin = temperature.to_kelvin();
    let hottest = TEMP_BOUNDS[0].1;

    let (upper_bound, lower_bound) = if kelvin >= hottest {
        (hottest + O_BAND_WIDTH, hottest)
    } else {
        TEMP_BOUNDS
            .windows(2)
            .find(|window| kelvin >= window[1].1)
            .map(|window| (window[0].1, window[1].1))
            .unwrap_or((TEMP_BOUNDS[8].1, TEMP_BOUNDS[9].1))
    };

    let temp_range = upper_bound - lower_bound;
    let temp_position = upper_bound - kelvin;
    let subtype = (9.0 * temp_position / temp_range).round().clamp(0.0, 9.0);
    subtype as u8
}
