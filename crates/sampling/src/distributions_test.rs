use approx::assert_relative_eq;

use crate::distributions::{sample_gaussian, sample_log_normal};
use crate::seed::Seed;

#[test]
fn test_gaussian_is_deterministic() {
    let seed = Seed::new(4242);
    assert_eq!(sample_gaussian(1.0, 2.0, seed), sample_gaussian(1.0, 2.0, seed));
}

#[test]
fn test_gaussian_moments() {
    let n = 5000;
    let samples: Vec<f64> = (1..=n)
        .map(|i| sample_gaussian(3.0, 0.5, Seed::new(i * 7919)))
        .collect();

    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    assert_relative_eq!(mean, 3.0, epsilon = 0.05);
    assert_relative_eq!(variance.sqrt(), 0.5, epsilon = 0.05);
}

#[test]
fn test_zero_spread_returns_mean() {
    assert_relative_eq!(sample_gaussian(1.5, 0.0, Seed::new(3)), 1.5);
    assert_relative_eq!(sample_log_normal(2.0, 0.0, Seed::new(3)), 100.0, epsilon = 1e-9);
}

#[test]
fn test_log10_normal_is_positive() {
    for value in 1..500 {
        let d = sample_log_normal(3.059, 0.6, Seed::new(value));
        assert!(d > 0.0 && d.is_finite());
    }
}
