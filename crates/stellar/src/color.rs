use serde::{Deserialize, Serialize};
use units::Temperature;

/// RGB color used for stars and the orbit lines of their bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

impl Color {
    // Tanner Helland blackbody-to-RGB curve fit
    // Reference: https://tannerhelland.com/2012/09/18/convert-temperature-rgb-algorithm-code.html
    const RED_COEFF: f64 = 329.698727446;
    const RED_EXP: f64 = -0.1332047592;

    const GREEN_COOL_COEFF: f64 = 99.4708025861;
    const GREEN_COOL_OFFSET: f64 = -161.1195681661;
    const GREEN_HOT_COEFF: f64 = 288.1221695283;
    const GREEN_HOT_EXP: f64 = -0.0755148492;

    const BLUE_COEFF: f64 = 138.5177312231;
    const BLUE_OFFSET: f64 = -305.0447927307;

    /// Thresholds in units of temp/100
    const TEMP_HOT_THRESHOLD: f64 = 66.0;
    const TEMP_BLUE_CUTOFF: f64 = 19.0;

    /// Blend toward grey so stars read whitish rather than saturated
    const DESATURATION_BLEND: f64 = 0.3;

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Convert a blackbody temperature to RGB
    ///
    /// The input is used as given; callers that need a bounded palette clamp it
    /// first (see [`SpectralColorLookup`]).
    ///
    /// # References
    /// - Tanner Helland (2012) - "How to Convert Temperature to RGB"
    pub fn from_temperature(temperature: Temperature) -> Self {
        let temp = temperature.to_kelvin().max(1.0) / 100.0;

        let r = match temp {
            t if t <= Self::TEMP_HOT_THRESHOLD => 255.0,
            t => (Self::RED_COEFF * (t - 60.0).powf(Self::RED_EXP)).clamp(0.0, 255.0),
        };

        let g = match temp {
            t if t <= Self::TEMP_HOT_THRESHOLD => {
                (Self::GREEN_COOL_COEFF * t.ln() + Self::GREEN_COOL_OFFSET).clamp(0.0, 255.0)
            }
            t => (Self::GREEN_HOT_COEFF * (t - 60.0).powf(Self::GREEN_HOT_EXP)).clamp(0.0, 255.0),
        };

        let b = match temp {
            t if t >= Self::TEMP_HOT_THRESHOLD => 255.0,
            t if t <= Self::TEMP_BLUE_CUTOFF => 0.0,
            t => (Self::BLUE_COEFF * (t - 10.0).ln() + Self::BLUE_OFFSET).clamp(0.0, 255.0),
        };

        let avg = (r + g + b) / 3.0;
        let r = r + (avg - r) * Self::DESATURATION_BLEND;
        let g = g + (avg - g) * Self::DESATURATION_BLEND;
        let b = b + (avg - b) * Self::DESATURATION_BLEND;

        Self {
            r: r.round() as u8,
            g: g.round() as u8,
            b: b.round() as u8,
        }
    }

    /// Channel-wise mean of two colors, rounded to nearest
    pub fn average(&self, other: &Color) -> Self {
        let mean = |a: u8, b: u8| ((a as u16 + b as u16 + 1) / 2) as u8;
        Self {
            r: mean(self.r, other.r),
            g: mean(self.g, other.g),
            b: mean(self.b, other.b),
        }
    }

    /// Returns the color as a hex string (e.g., "#FF9944")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#FF9944" or "FF9944")
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 || !s.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        let channel = |range: std::ops::Range<usize>, label: &str| {
            u8::from_str_radix(&s[range.clone()], 16)
                .map_err(|_| format!("Invalid {} component: {}", label, &s[range]))
        };

        Ok(Self {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }
}

/// Temperature to color service used when coloring a system
pub trait ColorLookup {
    fn color_for(&self, temperature: Temperature) -> Color;
}

/// Blackbody lookup restricted to the stellar palette range
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralColorLookup;

impl SpectralColorLookup {
    pub const MIN_TEMPERATURE_K: f64 = 1000.0;
    pub const MAX_TEMPERATURE_K: f64 = 11000.0;
}

impl ColorLookup for SpectralColorLookup {
    fn color_for(&self, temperature: Temperature) -> Color {
        Color::from_temperature(
            temperature.clamp(Self::MIN_TEMPERATURE_K, Self::MAX_TEMPERATURE_K),
        )
    }
}
