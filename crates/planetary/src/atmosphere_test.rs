use approx::assert_relative_eq;
use units::Mass;

use crate::atmosphere::{Atmosphere, AtmosphereKind, Element};
use crate::planet_class::PlanetClass;

#[test]
fn oversubscribed_mix_is_scaled_down() {
    let atmosphere = Atmosphere::new(
        [(Element::Nitrogen, 150.0), (Element::Oxygen, 50.0)],
        Mass::zero(),
    );
    assert_relative_eq!(atmosphere.total(), 100.0, epsilon = 1e-9);
    assert_relative_eq!(atmosphere.percent(Element::Nitrogen), 75.0, epsilon = 1e-9);
}

#[test]
fn partial_mix_is_kept() {
    let atmosphere = Atmosphere::new(
        [(Element::Nitrogen, 40.0), (Element::Argon, -1.0), (Element::Helium, 0.0)],
        Mass::zero(),
    );
    assert_relative_eq!(atmosphere.total(), 40.0);
    assert_eq!(atmosphere.gases().len(), 1);
    assert_eq!(atmosphere.percent(Element::Argon), 0.0);
}

#[test]
fn with_gas_renormalizes() {
    let earth = Atmosphere::new(AtmosphereKind::NitrogenOxygen.mix(), Mass::zero());
    let enriched = earth.with_gas(Element::CarbonDioxide, 20.0);

    assert!(enriched.total() <= 100.0 + 1e-9);
    assert!(enriched.percent(Element::CarbonDioxide) > 0.0);
    assert_eq!(enriched.dominant(), Some(Element::Nitrogen));
}

#[test]
fn none_is_empty() {
    let vacuum = Atmosphere::none();
    assert!(vacuum.is_empty());
    assert_eq!(vacuum.dominant(), None);
    assert_eq!(vacuum.total(), 0.0);
}

#[test]
fn every_kind_mix_fits() {
    let kinds = [
        AtmosphereKind::None,
        AtmosphereKind::Trace,
        AtmosphereKind::ThinCO2,
        AtmosphereKind::NitrogenOxygen,
        AtmosphereKind::ThickCO2,
        AtmosphereKind::MethaneNitrogen,
        AtmosphereKind::WaterVapor,
        AtmosphereKind::HydrogenMethane,
        AtmosphereKind::HydrogenHelium,
    ];
    for kind in kinds {
        let total: f64 = kind.mix().iter().map(|(_, percent)| percent).sum();
        assert!(total <= 100.0, "{:?} sums to {}", kind, total);

        let (min, max) = kind.mass_fraction_range();
        assert!(min <= max && max < 1.0);
    }
}

#[test]
fn classify_earth_like() {
    let kind = AtmosphereKind::classify(1.0, 255.0, PlanetClass::Rocky, 11.2);
    assert_eq!(kind, AtmosphereKind::NitrogenOxygen);
}

#[test]
fn classify_giants() {
    assert_eq!(
        AtmosphereKind::classify(318.0, 110.0, PlanetClass::Giant, 59.5),
        AtmosphereKind::HydrogenHelium
    );
    assert_eq!(
        AtmosphereKind::classify(17.0, 50.0, PlanetClass::Volatile, 23.5),
        AtmosphereKind::HydrogenMethane
    );
}

#[test]
fn classify_airless() {
    // Moon-like: retains only a trace exosphere
    assert_eq!(
        AtmosphereKind::classify(0.012, 270.0, PlanetClass::Rocky, 2.4),
        AtmosphereKind::Trace
    );
    assert_eq!(
        AtmosphereKind::classify(0.0005, 600.0, PlanetClass::Rocky, 0.5),
        AtmosphereKind::None
    );
}

#[test]
fn classify_hot_rocky() {
    assert_eq!(
        AtmosphereKind::classify(0.8, 450.0, PlanetClass::Rocky, 10.0),
        AtmosphereKind::ThickCO2
    );
    assert_eq!(
        AtmosphereKind::classify(1.5, 900.0, PlanetClass::Rocky, 12.0),
        AtmosphereKind::WaterVapor
    );
}
