//! Sine, cosine and tangent on lane groups.
//!
//! # Algorithm
//!
//! 1. Periodic reduction to `[-π, π]`: `k = round(x / 2π)` (ties to even) and
//!    `x' = x - k·2π`, with `2π` split into a short high part and a low
//!    correction so that `k·2π_hi` is exact.
//! 2. Sine reflects `x'` into `[-π/2, π/2]` (`sin x = sin(π - x)` above `π/2`,
//!    `sin x = sin(-π - x)` below `-π/2`) and evaluates an odd polynomial.
//! 3. Cosine works on `|x'|`, reflects with `cos x = -cos(π - x)` above `π/2`
//!    and evaluates an even polynomial, negating the reflected lanes.
//! 4. `tan = sin / cos`, a plain division. Lanes at the asymptote come out as
//!    large finite values or ±∞, whatever IEEE division gives.
//!
//! All reflections are selects; every lane runs every path.
//!
//! Accuracy degrades gradually for very large `|x|` as the reduction constant
//! runs out of bits. This is not corrected.

use crate::simd::float::LaneFloat;
use crate::simd::lanes::LaneGroup;
use crate::simd::poly::horner;

/// Polynomial tables of the trigonometric family.
///
/// `SIN` holds `sin(x)/x` as a polynomial in `x²` on `[0, (π/2)²]`,
/// `COS` holds `cos(x)` as a polynomial in `x²` on the same range.
pub trait TrigCoefficients: LaneFloat {
    const SIN: &'static [Self];
    const COS: &'static [Self];
}

#[allow(clippy::excessive_precision)]
impl TrigCoefficients for f32 {
    const SIN: &'static [f32] = &[
        1.0,
        -1.666_666_7e-1,
        8.333_334e-3,
        -1.984_127e-4,
        2.755_731_9e-6,
        -2.505_210_8e-8,
        1.605_904_4e-10,
    ];
    const COS: &'static [f32] = &[
        1.0,
        -5.0e-1,
        4.166_666_8e-2,
        -1.388_888_9e-3,
        2.480_158_8e-5,
        -2.755_732e-7,
        2.087_675_6e-9,
        -1.147_074_5e-11,
    ];
}

#[allow(clippy::excessive_precision)]
impl TrigCoefficients for f64 {
    const SIN: &'static [f64] = &[
        1.0,
        -0.166_666_666_666_666_66,
        0.008_333_333_333_333_333,
        -0.000_198_412_698_412_698_4,
        2.755_731_922_398_589_3e-6,
        -2.505_210_838_544_172e-8,
        1.605_904_383_682_161_3e-10,
        -7.647_163_731_819_816e-13,
        2.811_457_254_345_520_6e-15,
        -8.220_635_246_624_33e-18,
        1.957_294_106_339_126_3e-20,
    ];
    const COS: &'static [f64] = &[
        1.0,
        -0.5,
        0.041_666_666_666_666_664,
        -0.001_388_888_888_888_889,
        2.480_158_730_158_73e-5,
        -2.755_731_922_398_589e-7,
        2.087_675_698_786_81e-9,
        -1.147_074_559_772_972_5e-11,
        4.779_477_332_387_385e-14,
        -1.561_920_696_858_622_5e-16,
        4.110_317_623_312_165e-19,
        -8.896_791_392_450_574e-22,
    ];
}

/// Reduces angles to `[-π, π]` by subtracting the nearest multiple of `2π`.
#[inline(always)]
fn reduce<T: TrigCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    let k = (x * LaneGroup::splat(T::FRAC_1_TAU)).round_even();
    x - k * LaneGroup::splat(T::TAU_HI) - k * LaneGroup::splat(T::TAU_LO)
}

/// Sine of an angle already reduced to `[-π, π]`.
#[inline(always)]
fn sin_reduced<T: TrigCoefficients, const N: usize>(r: LaneGroup<T, N>) -> LaneGroup<T, N> {
    let pi = LaneGroup::splat(T::PI());
    let half_pi = LaneGroup::splat(T::FRAC_PI_2());

    let above = r.gt_elements(half_pi);
    let below = r.lt_elements(-half_pi);
    let s = above.select(pi - r, below.select(-pi - r, r));

    s * horner(s * s, T::SIN)
}

/// Cosine of an angle already reduced to `[-π, π]`.
#[inline(always)]
fn cos_reduced<T: TrigCoefficients, const N: usize>(r: LaneGroup<T, N>) -> LaneGroup<T, N> {
    let pi = LaneGroup::splat(T::PI());
    let half_pi = LaneGroup::splat(T::FRAC_PI_2());

    let a = r.abs();
    let reflected = a.gt_elements(half_pi);
    let c = reflected.select(pi - a, a);
    let p = horner(c * c, T::COS);

    reflected.select(-p, p)
}

/// Sine of every lane.
#[inline(always)]
pub fn sin<T: TrigCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    sin_reduced(reduce(x))
}

/// Cosine of every lane.
#[inline(always)]
pub fn cos<T: TrigCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    cos_reduced(reduce(x))
}

/// Sine and cosine of every lane from a single shared reduction.
#[inline(always)]
pub fn sincos<T: TrigCoefficients, const N: usize>(
    x: LaneGroup<T, N>,
) -> (LaneGroup<T, N>, LaneGroup<T, N>) {
    let r = reduce(x);
    (sin_reduced(r), cos_reduced(r))
}

/// Tangent of every lane.
#[inline(always)]
pub fn tan<T: TrigCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    let (s, c) = sincos(x);
    s / c
}
