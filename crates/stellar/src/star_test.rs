use approx::assert_relative_eq;
use units::{Mass, Time};

use crate::star::{MAX_STELLAR_MASS, MIN_STELLAR_MASS, Star};

#[test]
fn solar_mass_star_relations() {
    let star = Star::from_mass(Mass::from_solar_masses(1.0));

    assert_relative_eq!(star.base_radius.to_solar_radii(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(
        star.temperature.to_kelvin(),
        1.25_f64.powf(0.54) * 5778.0,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        star.base_luminosity,
        star.temperature.solar_ratio().powi(4),
        epsilon = 1e-9
    );
    assert_relative_eq!(star.lifespan.to_gyr(), 10.0, epsilon = 1e-9);
    assert_eq!(star.age, Time::zero());
}

#[test]
fn zero_age_luminosity_equals_base() {
    for mass in [0.1, 0.35, 1.0, 2.7, 5.0] {
        let star = Star::from_mass(Mass::from_solar_masses(mass));
        assert_eq!(star.luminosity, star.base_luminosity);

        let reaged = star.with_age(Time::from_gyr(3.0)).with_age(Time::zero());
        assert_eq!(reaged.luminosity, reaged.base_luminosity);
        assert_eq!(reaged.radius, star.radius);
    }
}

#[test]
fn aging_swells_and_brightens() {
    let star = Star::from_mass(Mass::from_solar_masses(1.0));
    let aged = star.with_age(Time::from_gyr(10.0));

    // One full lifespan: radius x1.5, luminosity x2.25, temperature unchanged
    assert_relative_eq!(aged.radius.to_solar_radii(), 1.5, epsilon = 1e-9);
    assert_relative_eq!(aged.luminosity, star.base_luminosity * 2.25, max_relative = 1e-9);
    assert_eq!(aged.temperature, star.temperature);
    assert_eq!(aged.base_luminosity, star.base_luminosity);
}

#[test]
fn aging_past_lifespan_is_accepted() {
    let star = Star::from_mass(Mass::from_solar_masses(4.0));
    let aged = star.with_age(Time::from_gyr(10.0));
    assert!(aged.age.to_gyr() > star.lifespan.to_gyr());
    assert!(aged.luminosity > star.luminosity);
}

#[test]
fn with_age_is_repeatable() {
    let star = Star::from_mass(Mass::from_solar_masses(0.8));
    let once = star.with_age(Time::from_gyr(4.0));
    let twice = once.with_age(Time::from_gyr(4.0));
    assert_eq!(once, twice);
}

#[test]
fn with_mass_keeps_age() {
    let star = Star::from_mass(Mass::from_solar_masses(1.0)).with_age(Time::from_gyr(2.0));
    let heavier = star.with_mass(Mass::from_solar_masses(1.5));

    assert_relative_eq!(heavier.mass.to_solar_masses(), 1.5);
    assert_relative_eq!(heavier.age.to_gyr(), 2.0);
    assert!(heavier.base_luminosity > star.base_luminosity);
}

#[test]
fn mass_is_clamped() {
    let tiny = Star::from_mass(Mass::from_solar_masses(0.01));
    let huge = Star::from_mass(Mass::from_solar_masses(40.0));

    assert_relative_eq!(tiny.mass.to_solar_masses(), MIN_STELLAR_MASS);
    assert_relative_eq!(huge.mass.to_solar_masses(), MAX_STELLAR_MASS);
}

#[test]
fn sphere_of_influence() {
    let star = Star::from_mass(Mass::from_solar_masses(1.0));

    assert_relative_eq!(
        star.sphere_of_influence_edge().to_au(),
        star.base_luminosity.sqrt() * 75.0,
        max_relative = 1e-9
    );
    let inner = star.sphere_of_influence_inner().to_au();
    assert!(inner > 0.0 && inner < star.sphere_of_influence_edge().to_au());
}

#[test]
fn star_serializes_camel_case() {
    let star = Star::from_mass(Mass::from_solar_masses(1.0));
    let json = serde_json::to_string(&star).unwrap();
    assert!(json.contains("baseLuminosity"));
    assert!(json.contains("spectralClass"));

    let back: Star = serde_json::from_str(&json).unwrap();
    assert_relative_eq!(back.base_luminosity, star.base_luminosity, max_relative = 1e-12);
    assert_eq!(back.spectral_class, star.spectral_class);
}
