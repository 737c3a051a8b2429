#![allow(dead_code)]

use approx::assert_relative_eq;
use digital_filters::Filter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};

/// `sin(t) + 0.5 cos(10 t)` sampled every `dt`
pub fn two_tone(n: usize, dt: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 * dt;
            t.sin() + 0.5 * (10.0 * t).cos()
        })
        .collect()
}

pub fn uniform_noise(n: usize, amplitude: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Uniform::new(-amplitude, amplitude).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Stream every sample of `x` through `filter`
pub fn stream(filter: &mut Filter<f64, f64>, x: &[f64]) -> Vec<f64> {
    x.iter().map(|&v| filter.filter(v)).collect()
}

pub fn assert_signals_close(expected: &[f64], actual: &[f64], max_relative: f64) {
    assert_eq!(expected.len(), actual.len(), "signal length mismatch");
    for (i, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        assert_relative_eq!(e, a, epsilon = 1e-9, max_relative = max_relative);
        assert!(e.is_finite(), "non-finite sample at i={}", i);
    }
}

/// A handful of stable filters of different shapes
pub fn sample_filters() -> Vec<Filter<f64, f64>> {
    vec![
        Filter::new(&[1.0, 0.5], &[1.0, 0.25]).unwrap(),
        Filter::new(&[3.0, -2.0, 1.0, -0.05], &[1.7, 0.5, -0.8]).unwrap(),
        Filter::new(&[0.2, 0.2, 0.2, 0.2, 0.2], &[1.0]).unwrap(),
        Filter::new(&[0.1], &[1.0, -0.9]).unwrap(),
        Filter::new(&[2.0], &[1.0]).unwrap(),
        Filter::new(&[0.0, 1.0, 0.0, -0.5], &[2.0, 0.0, 0.5]).unwrap(),
    ]
}
