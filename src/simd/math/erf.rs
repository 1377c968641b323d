//! Error function on lane groups.
//!
//! Uses the Abramowitz and Stegun rational approximation 7.1.26:
//!
//! ```text
//! t = 1 / (1 + p·|x|)
//! erf(|x|) ≈ 1 - (a₁t + a₂t² + a₃t³ + a₄t⁴ + a₅t⁵) · e^(-x²)
//! ```
//!
//! with the sign of `x` restored afterwards. The approximation itself is good
//! to about `1.5e-7` absolute, which bounds the `f64` result as well.
//! Zero lanes are passed through unchanged so `erf(±0) = ±0` exactly.

use crate::simd::bits::copysign;
use crate::simd::lanes::LaneGroup;
use crate::simd::math::exp::{exp, ExpCoefficients};
use crate::simd::poly::horner;

const P: f64 = 0.327_591_1;

/// `a₁..a₅`, applied as `t·(a₁ + a₂t + …)`.
const A: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// Error function of every lane.
#[inline(always)]
pub fn erf<T: ExpCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    let one = LaneGroup::one();
    let coeffs = A.map(T::lit);

    let t = one / (one + LaneGroup::splat(T::lit(P)) * x.abs());
    let tail = t * horner(t, &coeffs) * exp(-(x * x));
    let result = copysign(one - tail, x);

    x.eq_elements(LaneGroup::zero()).select(x, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erf_f64_against_reference() {
        let xs: Vec<f64> = (0..800).map(|i| -4.0 + i as f64 * 0.01).collect();
        for chunk in xs.chunks_exact(4) {
            let r = erf(LaneGroup::<f64, 4>::load(chunk));
            for lane in 0..4 {
                let x = chunk[lane];
                let want = statrs::function::erf::erf(x);
                assert!((r.extract(lane) - want).abs() < 5e-7, "erf({x})");
            }
        }
    }

    #[test]
    fn test_erf_f32_against_reference() {
        let xs: Vec<f32> = (0..800).map(|i| -4.0 + i as f32 * 0.01).collect();
        for chunk in xs.chunks_exact(8) {
            let r = erf(LaneGroup::<f32, 8>::load(chunk));
            for lane in 0..8 {
                let x = chunk[lane];
                let want = statrs::function::erf::erf(x as f64);
                assert!((r.extract(lane) as f64 - want).abs() < 1e-6, "erf({x})");
            }
        }
    }

    #[test]
    fn test_erf_signed_zero_and_limits() {
        let x = LaneGroup::from_array([0.0f64, -0.0, 10.0, -10.0]);
        let r = erf(x).to_array();
        assert!(r[0] == 0.0 && r[0].is_sign_positive());
        assert!(r[1] == 0.0 && r[1].is_sign_negative());
        assert!((r[2] - 1.0).abs() < 1e-12);
        assert!((r[3] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_erf_is_odd() {
        let x = LaneGroup::from_array([0.1f32, 0.7, 1.3, 2.9]);
        assert_eq!(erf(-x), -erf(x));
    }

    #[test]
    fn test_erf_nan_stays_nan() {
        assert!(erf(LaneGroup::<f32, 4>::splat(f32::NAN)).is_nan().all());
    }
}
