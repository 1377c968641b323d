//! Base-2 and base-10 logarithms on lane groups.
//!
//! # Algorithm
//!
//! 1. Decompose `x = m · 2^k` by reading the exponent field, with `m ∈ [1, 2)`.
//! 2. Re-centre: where `m > √2`, halve `m` and bump `k`, so that
//!    `f = m - 1 ∈ [√½ - 1, √2 - 1]`.
//! 3. `ln(1 + f) = f·Q(f)` with a fixed polynomial, converted to base 2.
//! 4. `log₂ x = k + log₂(1 + f)`.
//!
//! IEEE special inputs are overwritten afterwards by masked select:
//!
//! | Input      | Result |
//! |------------|--------|
//! | `±0`       | `-∞`   |
//! | `< 0`      | NaN    |
//! | `+∞`       | `+∞`   |
//! | NaN        | NaN    |
//!
//! Subnormal inputs are decoded as if normal and are not accurate.

use crate::simd::bits::decompose;
use crate::simd::float::LaneFloat;
use crate::simd::lanes::LaneGroup;
use crate::simd::poly::horner;

/// Polynomial table of the logarithm family.
///
/// `LOG1P` holds `ln(1 + f)/f` on `[√½ - 1, √2 - 1]`, ascending powers of `f`.
pub trait LogCoefficients: LaneFloat {
    const LOG1P: &'static [Self];
}

#[allow(clippy::excessive_precision)]
impl LogCoefficients for f32 {
    const LOG1P: &'static [f32] = &[
        1.0,
        -4.999_999_7e-1,
        3.333_419_3e-1,
        -2.500_135_3e-1,
        1.995_593_3e-1,
        -1.657_799_3e-1,
        1.497_740_1e-1,
        -1.426_925_8e-1,
        8.533_313e-2,
    ];
}

#[allow(clippy::excessive_precision)]
impl LogCoefficients for f64 {
    const LOG1P: &'static [f64] = &[
        0.999_999_999_999_998_1,
        -0.499_999_999_999_994_17,
        0.333_333_333_335_651_3,
        -0.250_000_000_004_889_64,
        0.199_999_999_495_258_9,
        -0.166_666_665_484_201_61,
        0.142_857_184_355_113_8,
        -0.125_000_114_119_256_04,
        0.111_109_471_898_319_27,
        -0.099_994_636_076_406_68,
        0.090_942_406_438_310_57,
        -0.083_467_464_563_678_47,
        0.076_602_525_618_904_34,
        -0.069_628_282_736_589_33,
        0.067_274_706_799_067_14,
        -0.074_267_364_083_308_4,
        0.069_951_468_064_216_79,
        -0.032_507_014_700_544_14,
    ];
}

/// `log₂ x` for every lane.
#[inline(always)]
pub fn log2<T: LogCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    let one = LaneGroup::one();
    let (k, m) = decompose(x);

    let high = m.gt_elements(LaneGroup::splat(T::SQRT_2()));
    let m = high.select(m * LaneGroup::splat(T::lit(0.5)), m);
    let k = high.select(k + one, k);

    let f = m - one;
    let log1p = f * horner(f, T::LOG1P);
    let result = k + log1p * LaneGroup::splat(T::LOG2_E());

    special_cases(x, result)
}

/// `log₁₀ x` for every lane.
#[inline(always)]
pub fn log10<T: LogCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    log2(x) * LaneGroup::splat(T::LOG10_2())
}

#[inline(always)]
fn special_cases<T: LaneFloat, const N: usize>(
    x: LaneGroup<T, N>,
    result: LaneGroup<T, N>,
) -> LaneGroup<T, N> {
    let zero = LaneGroup::zero();
    let nan = LaneGroup::splat(T::nan());

    let result = x.eq_elements(zero).select(LaneGroup::splat(T::neg_infinity()), result);
    let result = x.lt_elements(zero).select(nan, result);
    let infinity = LaneGroup::splat(T::infinity());
    let result = x.eq_elements(infinity).select(infinity, result);
    x.is_nan().select(nan, result)
}
