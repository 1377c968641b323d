//! Precision tests of the lane arctangent against the standard library.

use lanemath::simd::SimdMath;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TAN_FRAC_PI_8: f64 = 0.414_213_562_373_095_05;

/// Test atan at the reciprocal and half-angle reduction thresholds.
#[test]
fn test_atan_reduction_thresholds() {
    let inputs = vec![
        0.0f64,
        1.0,
        -1.0,
        TAN_FRAC_PI_8,
        -TAN_FRAC_PI_8,
        TAN_FRAC_PI_8 * (1.0 + 1e-12),
        1.0 + 1e-12,
        1.0 / TAN_FRAC_PI_8,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    let results = inputs.atan();

    for (i, &x) in inputs.iter().enumerate() {
        let absolute_error = (results[i] - x.atan()).abs();
        println!(
            "  Input: {x:.12}, Scalar: {:.15}, SIMD: {:.15}, Abs Error: {absolute_error:.2e}",
            x.atan(),
            results[i]
        );
        assert!(absolute_error < 1e-14, "atan({x}) error {absolute_error:.2e}");
    }
}

/// Test atan with randomly generated inputs across magnitudes.
#[test]
fn test_atan_precision_random_inputs() {
    let mut rng = StdRng::seed_from_u64(12345);

    let inputs: Vec<f32> = (0..5000).map(|_| rng.random_range(-1000.0..=1000.0)).collect();
    let results = inputs.atan();
    let mut max_error = 0.0f32;
    for (i, &x) in inputs.iter().enumerate() {
        let absolute_error = (results[i] - x.atan()).abs();
        max_error = max_error.max(absolute_error);
        assert!(
            absolute_error < 1e-6,
            "f32 atan error at index {i}: x={x}, simd={}, abs_error={absolute_error:.2e}",
            results[i]
        );
    }
    println!("f32 max atan error: {max_error:.2e}");

    let inputs: Vec<f64> = (0..5000).map(|_| rng.random_range(-2.0..=2.0)).collect();
    let results = inputs.atan();
    for (i, &x) in inputs.iter().enumerate() {
        let absolute_error = (results[i] - x.atan()).abs();
        assert!(
            absolute_error < 1e-14,
            "f64 atan error at index {i}: x={x}, abs_error={absolute_error:.2e}"
        );
    }
}

/// Test that atan is odd.
#[test]
fn test_atan_odd_symmetry() {
    let inputs: Vec<f32> = (1..200).map(|i| i as f32 * 0.173).collect();
    let negated: Vec<f32> = inputs.iter().map(|x| -x).collect();
    let positive = inputs.atan();
    let negative = negated.atan();
    for (p, n) in positive.iter().zip(negative.iter()) {
        assert_eq!(*p, -*n);
    }
}
