use units::Temperature;

use crate::spectral::{SpectralClass, SpectralType, calculate_subtype};

fn kelvin(value: f64) -> Temperature {
    Temperature::from_kelvin(value)
}

#[test]
fn spectral_type_from_temperature() {
    assert_eq!(SpectralType::from_temperature(kelvin(35000.0)), SpectralType::O);
    assert_eq!(SpectralType::from_temperature(kelvin(12000.0)), SpectralType::B);
    assert_eq!(SpectralType::from_temperature(kelvin(8000.0)), SpectralType::A);
    assert_eq!(SpectralType::from_temperature(kelvin(6500.0)), SpectralType::F);
    assert_eq!(SpectralType::from_temperature(kelvin(5778.0)), SpectralType::G);
    assert_eq!(SpectralType::from_temperature(kelvin(4500.0)), SpectralType::K);
    assert_eq!(SpectralType::from_temperature(kelvin(3000.0)), SpectralType::M);
    assert_eq!(SpectralType::from_temperature(kelvin(1500.0)), SpectralType::L);
    assert_eq!(SpectralType::from_temperature(kelvin(600.0)), SpectralType::T);
    assert_eq!(SpectralType::from_temperature(kelvin(300.0)), SpectralType::Y);
}

#[test]
fn band_edges_belong_to_the_hotter_type() {
    assert_eq!(SpectralType::from_temperature(kelvin(6000.0)), SpectralType::F);
    assert_eq!(SpectralType::from_temperature(kelvin(5999.9)), SpectralType::G);
}

#[test]
fn subtype_within_band() {
    assert_eq!(calculate_subtype(kelvin(5778.0)), 2);
    assert_eq!(calculate_subtype(kelvin(3000.0)), 5);
    assert_eq!(calculate_subtype(kelvin(35000.0)), 7);
    assert_eq!(calculate_subtype(kelvin(6000.0)), 9);
    assert_eq!(calculate_subtype(kelvin(99999.0)), 0);
}

#[test]
fn spectral_class_display() {
    let sun = SpectralClass::from_temperature(kelvin(5778.0));
    assert_eq!(sun.to_string(), "G2");

    let dwarf = SpectralClass::from_temperature(kelvin(3000.0));
    assert_eq!(format!("{}", dwarf), "M5");
}
