//! Arctangent and two-argument arctangent on lane groups.
//!
//! # Algorithm
//!
//! `atan` folds its argument into `[0, tan(π/8)]` in two steps, both as
//! selects:
//!
//! - `|x| > 1` uses `atan(x) = π/2 - atan(1/x)`.
//! - `a > tan(π/8)` uses `atan(a) = π/4 + atan((a - 1)/(a + 1))`.
//!
//! The reduced value is evaluated as `r·P(r²)` and the sign of the input is
//! restored at the end, so `atan(-x) = -atan(x)` holds bit for bit.
//!
//! `atan2` divides by `x` (by 1 where `x == 0`), takes `atan` of the
//! quotient and then overwrites lanes by quadrant, later rules winning:
//!
//! | Condition            | Result        |
//! |----------------------|---------------|
//! | `x < 0`, `y >= 0`    | `atan + π`    |
//! | `x < 0`, `y < 0`     | `atan - π`    |
//! | `x == 0`, `y > 0`    | `π/2`         |
//! | `x == 0`, `y < 0`    | `-π/2`        |
//! | `x == 0`, `y == 0`   | `0`           |
//!
//! Signed zeros are compared by value, so `atan2(±0, ±0)` is `0` in every
//! sign combination.

use crate::simd::bits::copysign;
use crate::simd::float::LaneFloat;
use crate::simd::lanes::LaneGroup;
use crate::simd::poly::horner;

/// Polynomial table of the arctangent family.
///
/// `ATAN` holds `atan(x)/x` as a polynomial in `x²` on `[0, tan²(π/8)]`.
pub trait AtanCoefficients: LaneFloat {
    const ATAN: &'static [Self];
}

#[allow(clippy::excessive_precision)]
impl AtanCoefficients for f32 {
    const ATAN: &'static [f32] = &[
        1.0,
        -3.333_330_8e-1,
        1.999_818_2e-1,
        -1.423_953_3e-1,
        1.056_982_9e-1,
        -6.026_305_3e-2,
    ];
}

#[allow(clippy::excessive_precision)]
impl AtanCoefficients for f64 {
    const ATAN: &'static [f64] = &[
        0.999_999_999_999_999_9,
        -0.333_333_333_333_248_7,
        0.199_999_999_982_107_85,
        -0.142_857_141_352_570_08,
        0.111_111_044_804_996_23,
        -0.090_907_359_701_094_66,
        0.076_894_553_478_233_9,
        -0.066_360_802_946_051_14,
        0.056_674_140_651_244_674,
        -0.042_896_895_826_470_7,
        0.020_444_779_893_970_744,
    ];
}

/// Arctangent of every lane, in `[-π/2, π/2]`.
#[inline(always)]
pub fn atan<T: AtanCoefficients, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T, N> {
    let one = LaneGroup::one();
    let t = x.abs();

    let inverted = t.gt_elements(one);
    let a = inverted.select(one / t, t);

    let shifted = a.gt_elements(LaneGroup::splat(T::TAN_FRAC_PI_8));
    let b = shifted.select((a - one) / (a + one), a);

    let r = b * horner(b * b, T::ATAN);
    let r = shifted.select(r + LaneGroup::splat(T::FRAC_PI_4()), r);
    let r = inverted.select(LaneGroup::splat(T::FRAC_PI_2()) - r, r);

    copysign(r, x)
}

/// Four-quadrant arctangent of `y / x` for every lane pair, in `[-π, π]`.
#[inline(always)]
pub fn atan2<T: AtanCoefficients, const N: usize>(
    y: LaneGroup<T, N>,
    x: LaneGroup<T, N>,
) -> LaneGroup<T, N> {
    let zero = LaneGroup::zero();
    let pi = LaneGroup::splat(T::PI());
    let half_pi = LaneGroup::splat(T::FRAC_PI_2());

    let x_zero = x.eq_elements(zero);
    let x_neg = x.lt_elements(zero);
    let y_neg = y.lt_elements(zero);
    let y_pos = y.gt_elements(zero);
    let y_zero = y.eq_elements(zero);

    let divisor = x_zero.select(LaneGroup::one(), x);
    let a = atan(y / divisor);

    let a = (x_neg & !y_neg).select(a + pi, a);
    let a = (x_neg & y_neg).select(a - pi, a);
    let a = (x_zero & y_pos).select(half_pi, a);
    let a = (x_zero & y_neg).select(-half_pi, a);
    (x_zero & y_zero).select(zero, a)
}
