//! Composition zones around a star.
//!
//! Both reference distances scale with the square root of the star's formation
//! luminosity, so they are fixed once a star exists and do not move as it ages.

use units::Length;

/// Frost line per unit sqrt(L0), in AU
const FROST_LINE_SCALE: f64 = 4.8;
/// Sublimation line per unit sqrt(L0), in AU
const SUBLIMATION_LINE_SCALE: f64 = 0.034;
/// Width of the outer ice ramp in frost-line multiples
const OUTER_RAMP_WIDTHS: f64 = 13.0;

/// Distance beyond which volatiles condense: sqrt(L0)·4.8 AU
pub fn frost_line(base_luminosity: f64) -> Length {
    Length::from_au(base_luminosity.max(0.0).sqrt() * FROST_LINE_SCALE)
}

/// Distance inside which solids vaporise: sqrt(L0)·0.034 AU
pub fn sublimation_line(base_luminosity: f64) -> Length {
    Length::from_au(base_luminosity.max(0.0).sqrt() * SUBLIMATION_LINE_SCALE)
}

/// Baseline ice percentage at `distance`.
///
/// Inside the frost line ice ramps steeply up from the sublimation line
/// (`76.278·t^3.826 - 0.11`); beyond it ice approaches 70% as
/// `25 + 45·t^0.35` over the next 13 frost-line widths.
pub fn baseline_ice(distance: Length, base_luminosity: f64) -> f64 {
    let d = distance.to_au();
    let frost = frost_line(base_luminosity).to_au();
    let sublimation = sublimation_line(base_luminosity).to_au();

    if d < frost {
        let span = frost - sublimation;
        let t = if span > 0.0 { ((d - sublimation) / span).max(0.0) } else { 0.0 };
        (76.278 * t.powf(3.826) - 0.11).max(0.0)
    } else {
        let t = if frost > 0.0 {
            ((d - frost) / (OUTER_RAMP_WIDTHS * frost)).clamp(0.0, 1.0)
        } else {
            1.0
        };
        25.0 + 45.0 * t.powf(0.35)
    }
}

/// Baseline metal percentage: `max(3, 80·e^(-0.857·d^1.3205))`, d in AU
pub fn baseline_metal(distance: Length) -> f64 {
    let d = distance.to_au().max(0.0);
    (80.0 * (-0.857 * d.powf(1.3205)).exp()).max(3.0)
}

/// Spread of the compositional jitter, in percentage points, for a body of
/// `mass_earth` Earth masses. Smaller bodies vary more.
pub fn composition_deviation(mass_earth: f64) -> f64 {
    0.25 * (-1.1 * (mass_earth.max(0.0) + 0.001).log10()).exp() * 6.0
}
