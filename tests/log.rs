//! Precision tests of the lane base-2 and base-10 logarithms.

use std::f64::consts::SQRT_2;

use lanemath::simd::SimdMath;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test log2 around the √2 mantissa re-centering threshold.
#[test]
fn test_log2_sqrt2_threshold() {
    let mut inputs = Vec::new();
    for k in -3..=3 {
        let scale = 2f64.powi(k);
        inputs.extend([SQRT_2 * scale, SQRT_2 * scale * (1.0 + 1e-14), SQRT_2 * scale * (1.0 - 1e-14)]);
    }
    let results = inputs.log2();

    for (i, &x) in inputs.iter().enumerate() {
        let absolute_error = (results[i] - x.log2()).abs();
        println!(
            "  Input: {x:.16}, Scalar: {:.16}, SIMD: {:.16}, Abs Error: {absolute_error:.2e}",
            x.log2(),
            results[i]
        );
        assert!(absolute_error < 1e-13, "log2({x}) error {absolute_error:.2e}");
    }
}

/// Test log2 and log10 with inputs spread log-uniformly over many decades.
#[test]
fn test_log_precision_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);

    let inputs: Vec<f32> = (0..5000)
        .map(|_| 10f32.powf(rng.random_range(-6.0..=6.0)))
        .collect();
    let log2 = inputs.log2();
    let log10 = inputs.log10();
    for (i, &x) in inputs.iter().enumerate() {
        let error2 = (log2[i] - x.log2()).abs();
        let error10 = (log10[i] - x.log10()).abs();
        assert!(error2 < 1e-5, "f32 log2 error at index {i}: x={x}, abs_error={error2:.2e}");
        assert!(error10 < 1e-5, "f32 log10 error at index {i}: x={x}, abs_error={error10:.2e}");
    }

    let inputs: Vec<f64> = (0..5000)
        .map(|_| 10f64.powf(rng.random_range(-100.0..=100.0)))
        .collect();
    let log2 = inputs.log2();
    let log10 = inputs.log10();
    for (i, &x) in inputs.iter().enumerate() {
        let error2 = (log2[i] - x.log2()).abs();
        let error10 = (log10[i] - x.log10()).abs();
        assert!(error2 < 1e-13, "f64 log2 error at index {i}: x={x}, abs_error={error2:.2e}");
        assert!(error10 < 1e-13, "f64 log10 error at index {i}: x={x}, abs_error={error10:.2e}");
    }
}

/// Test the IEEE results for zero, negative, infinite and NaN inputs.
#[test]
fn test_log_special_inputs() {
    let inputs = vec![0.0f64, -0.0, -1.0, f64::INFINITY, f64::NAN];
    for results in [inputs.log2(), inputs.log10()] {
        assert_eq!(results[0], f64::NEG_INFINITY);
        assert_eq!(results[1], f64::NEG_INFINITY);
        assert!(results[2].is_nan());
        assert_eq!(results[3], f64::INFINITY);
        assert!(results[4].is_nan());
    }
}

/// Test exact powers of ten and two.
#[test]
fn test_log_exact_powers() {
    let powers_of_ten = [0.001f64, 0.1, 1.0, 10.0, 1.0e5];
    let results = powers_of_ten.log10();
    for (got, want) in results.iter().zip([-3.0, -1.0, 0.0, 1.0, 5.0].iter()) {
        assert!((got - want).abs() < 1e-14, "log10 gave {got}, expected {want}");
    }

    let powers_of_two = [0.125f32, 1.0, 8.0, 4096.0];
    assert_eq!(powers_of_two.log2(), vec![-3.0, 0.0, 3.0, 12.0]);
}
