use approx::assert_relative_eq;
use sampling::Seed;
use stellar::Star;
use units::{Length, Mass};

use crate::belt::{generate_belt, sample_belt_mass};

fn solar_formation_luminosity() -> f64 {
    Star::from_mass(Mass::from_solar_masses(1.0)).base_luminosity
}

#[test]
fn test_seed_7_belt_samples_are_balanced() {
    let seed = Seed::new(7);
    let belt = generate_belt(
        seed,
        Length::from_au(2.0),
        Length::from_au(5.0),
        sample_belt_mass(seed),
        solar_formation_luminosity(),
    );

    for sample in &belt.samples {
        assert_relative_eq!(sample.total(), 100.0, max_relative = 1e-3);
    }
    assert_relative_eq!(belt.centre().to_au(), 3.5, max_relative = 1e-12);
}

#[test]
fn test_belt_mass_is_conserved() {
    for value in 1..200 {
        let seed = Seed::new(value);
        let mass = sample_belt_mass(seed);
        let belt = generate_belt(
            seed,
            Length::from_au(1.0),
            Length::from_au(3.0),
            mass,
            solar_formation_luminosity(),
        );

        assert_relative_eq!(
            belt.mass().to_earth_masses(),
            mass.to_earth_masses(),
            max_relative = 1e-12
        );
        for sample in &belt.samples {
            assert!(sample.mass().to_earth_masses() >= 0.0);
        }
    }
}

#[test]
fn test_belt_mass_range() {
    for value in 1..500 {
        let mass = sample_belt_mass(Seed::new(value)).to_earth_masses();
        assert!((0.99e-4..=5.01e-2).contains(&mass));
    }
}

#[test]
fn test_inverted_edges_are_swapped() {
    let belt = generate_belt(
        Seed::new(3),
        Length::from_au(6.0),
        Length::from_au(4.0),
        Mass::from_earth_masses(0.01),
        1.0,
    );
    assert_eq!(belt.inner_edge, Length::from_au(4.0));
    assert_eq!(belt.outer_edge, Length::from_au(6.0));
    assert!(belt.width().to_au() > 0.0);
}

#[test]
fn test_belt_is_reproducible() {
    let build = || {
        generate_belt(
            Seed::new(42),
            Length::from_au(2.0),
            Length::from_au(2.5),
            Mass::from_earth_masses(0.02),
            1.0,
        )
    };
    assert_eq!(build(), build());
}
