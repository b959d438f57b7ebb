use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;

use crate::kepler::{mean_anomaly, solve_eccentric_anomaly, true_anomaly};

#[test]
fn circular_orbit_is_identity() {
    for m in [0.0, 0.3, 1.0, 2.5, 6.0] {
        assert_relative_eq!(solve_eccentric_anomaly(m, 0.0), m, epsilon = 1e-12);
    }
}

#[test]
fn round_trip_across_eccentricities() {
    for e in [0.0, 0.1, 0.3, 0.5, 0.7, 0.8] {
        for step in 0..32 {
            let ecc_anomaly = TAU * step as f64 / 32.0;
            let m = mean_anomaly(ecc_anomaly, e);
            let solved = solve_eccentric_anomaly(m, e);
            assert!(
                (solved - ecc_anomaly).abs() < 1e-4,
                "e = {}, E = {}, solved = {}",
                e,
                ecc_anomaly,
                solved
            );
        }
    }
}

#[test]
fn high_eccentricity_round_trip() {
    let e = 0.9;
    for ecc_anomaly in [0.5, 0.8, 1.5, PI] {
        let m = mean_anomaly(ecc_anomaly, e);
        let solved = solve_eccentric_anomaly(m, e);
        assert!(
            (mean_anomaly(solved, e) - m).abs() < 1e-4,
            "E = {}, solved = {}",
            ecc_anomaly,
            solved
        );
    }
}

#[test]
fn true_anomaly_at_apsides() {
    assert_relative_eq!(true_anomaly(0.0, 0.5), 0.0);
    assert_relative_eq!(true_anomaly(PI, 0.5).abs(), PI, epsilon = 1e-9);
}

#[test]
fn true_anomaly_leads_eccentric_anomaly() {
    // Between periapsis and apoapsis the body runs ahead of the eccentric anomaly
    let e = 0.6;
    for ecc_anomaly in [0.2, 0.9, 1.7, 2.8] {
        assert!(true_anomaly(ecc_anomaly, e) > ecc_anomaly);
    }
}
