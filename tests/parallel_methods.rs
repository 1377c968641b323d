//! The `par_*` methods must agree exactly with the single-threaded ones, both
//! below the parallel threshold and above it (where rayon splits the work).

use lanemath::simd::SimdMath;
use lanemath::PARALLEL_SIMD_THRESHOLD;

fn large_input_f32() -> Vec<f32> {
    // Past the threshold and not a multiple of any lane width
    (0..PARALLEL_SIMD_THRESHOLD + 1027)
        .map(|i| ((i % 20_000) as f32) * 0.0013 - 13.0)
        .collect()
}

fn large_input_f64() -> Vec<f64> {
    (0..PARALLEL_SIMD_THRESHOLD + 1027)
        .map(|i| ((i % 20_000) as f64) * 0.0013 - 13.0)
        .collect()
}

#[test]
fn test_par_unary_methods_match_serial_f32() {
    let data = large_input_f32();
    assert_eq!(data.par_sin(), data.sin());
    assert_eq!(data.par_cos(), data.cos());
    assert_eq!(data.par_tan(), data.tan());
    assert_eq!(data.par_atan(), data.atan());
    assert_eq!(data.par_erf(), data.erf());
    assert_eq!(data.par_exp2(), data.exp2());
    assert_eq!(data.par_exp10(), data.exp10());
}

#[test]
fn test_par_log_methods_match_serial_f64() {
    let data: Vec<f64> = large_input_f64().iter().map(|x| x.abs() + 1e-3).collect();
    assert_eq!(data.par_log2(), data.log2());
    assert_eq!(data.par_log10(), data.log10());
}

#[test]
fn test_par_sincos_matches_serial() {
    let data = large_input_f64();
    let (par_sin, par_cos) = data.par_sincos();
    let (sin, cos) = data.sincos();
    assert_eq!(par_sin, sin);
    assert_eq!(par_cos, cos);

    // Spot-check against std in the last, ragged chunk
    let last = data.len() - 1;
    assert!((par_sin[last] - data[last].sin()).abs() < 1e-13);
    assert!((par_cos[last] - data[last].cos()).abs() < 1e-13);
}

#[test]
fn test_par_binary_methods_match_serial() {
    let y = large_input_f32();
    let x: Vec<f32> = y.iter().rev().copied().collect();
    assert_eq!(y.par_atan2(&x), y.atan2(&x));

    let bases: Vec<f32> = y.iter().map(|v| v.abs() * 0.5 + 0.01).collect();
    let exponents: Vec<f32> = x.iter().map(|v| v * 0.25).collect();
    assert_eq!(bases.par_pow(&exponents), bases.pow(&exponents));
}

#[test]
fn test_par_methods_small_input() {
    let data = vec![0.25f64, 0.5, 0.75];
    assert_eq!(data.par_exp2(), data.exp2());
    assert_eq!(data.par_atan2(&data), data.atan2(&data));
    assert!(Vec::<f32>::new().par_sin().is_empty());
}

#[test]
#[should_panic(expected = "Input slices must be the same length")]
fn test_par_binary_length_mismatch_panics() {
    let a = vec![1.0f32; PARALLEL_SIMD_THRESHOLD + 8];
    let b = vec![1.0f32; PARALLEL_SIMD_THRESHOLD + 4];
    a.par_pow(&b);
}
