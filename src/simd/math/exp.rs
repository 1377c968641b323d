//! Base-2, base-10 and natural exponentials on lane groups.
//!
//! # Algorithm
//!
//! 1. Clamp the argument to the range whose power of two has a normal
//!    encoding, `[MIN_EXPONENT, MAX_EXPONENT]` in the base-2 domain. Results
//!    saturate at the largest and smallest normal powers of two instead of
//!    overflowing to `∞` or flushing to zero. NaN lanes pass the clamp
//!    unchanged.
//! 2. Split `x = k + r` with `k = round(x)` and `r ∈ [-0.5, 0.5]`.
//! 3. Evaluate `2^r = e^(r·ln 2)` with a fixed polynomial in Horner form.
//! 4. Build `2^k` by writing `k + bias` into the exponent field and multiply.
//!
//! `exp10` converts to the base-2 domain first (`x·log₂10`). The natural
//! exponential used by `erf` reduces against a two-part `ln 2` so the
//! remainder stays exact for large `k`.

use crate::simd::bits::pow2i;
use crate::simd::float::LaneFloat;
use crate::simd::lanes::LaneGroup;
use crate::simd::poly::horner;

/// Polynomial table of the exponential family.
///
/// `EXP` holds `e^t` on `|t| <= ln(2)/2`, ascending powers of `t`.
pub trait ExpCoefficients: LaneFloat {
    const EXP: &'static [Self];
}

#[allow(clippy::excessive_precision)]
impl ExpCoefficients for f32 {
    const EXP: &'static [f32] = &[
        1.0,
        1.0,
        5.0e-1,
        1.666_641_5e-1,
        4.166_635e-2,
        8.375_126e-3,
        1.394_110_8e-3,
    ];
}

#[allow(clippy::excessive_precision)]
impl ExpCoefficients for f64 {
    const EXP: &'static [f64] = &[
        0.999_999_999_999_999_9,
        1.000_000_000_000_007_5,
        0.500_000_000_000_021_3,
        0.166_666_666_665_543_36,
        0.041_666_666_665_706_86,
        0.008_333_333_385_236_09,
        0.001_388_888_907_856_917_5,
        0.000_198_411_708_839_618_57,
        2.480_140_009_613_877e-5,
        2.763_994_130_807_212e-6,
        2.765_236_570_389_78e-7,
    ];
}

/// `2^x` for every lane.
#[inline(always)]
pub fn exp2<T: ExpCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    let x = x.clamp(T::MIN_EXPONENT, T::MAX_EXPONENT);
    let k = x.round_even();
    let r = (x - k) * LaneGroup::splat(T::LN_2());

    pow2i(k) * horner(r, T::EXP)
}

/// `10^x` for every lane.
#[inline(always)]
pub fn exp10<T: ExpCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    exp2(x * LaneGroup::splat(T::LOG2_10()))
}

/// `e^x` for every lane, reduced in the natural-log domain.
#[inline(always)]
pub(crate) fn exp<T: ExpCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    let x = x.clamp(
        T::MIN_EXPONENT * T::LN_2(),
        T::MAX_EXPONENT * T::LN_2(),
    );
    let k = (x * LaneGroup::splat(T::LOG2_E())).round_even();
    let r = x - k * LaneGroup::splat(T::LN_2_HI) - k * LaneGroup::splat(T::LN_2_LO);

    pow2i(k) * horner(r, T::EXP)
}
