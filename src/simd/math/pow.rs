//! Power function on lane groups, `pow(b, e) = 2^(e·log₂|b|)`.
//!
//! The product `e·log₂|b|` is clamped to the normal exponent range before
//! exponentiation. Two overwrites follow the general computation, the second
//! one winning where both apply:
//!
//! - `|b|` below the smallest normal value gives `0`.
//! - `|e|` below the smallest normal value gives `1`, so `pow(0, 0) = 1`.
//!
//! The sign of the base is dropped: `pow(-2, 3)` is `8`.

use crate::simd::lanes::LaneGroup;
use crate::simd::math::exp::{exp2, ExpCoefficients};
use crate::simd::math::log::{log2, LogCoefficients};

/// `b^e` for every lane pair.
#[inline(always)]
pub fn pow<T: ExpCoefficients + LogCoefficients, const N: usize>(
    base: LaneGroup<T, N>,
    exponent: LaneGroup<T, N>,
) -> LaneGroup<T, N> {
    let y = (exponent * log2(base.abs())).clamp(T::MIN_EXPONENT, T::MAX_EXPONENT);
    let result = exp2(y);

    let tiny = LaneGroup::splat(T::min_positive_value());
    let result = base.abs().lt_elements(tiny).select(LaneGroup::zero(), result);
    exponent.abs().lt_elements(tiny).select(LaneGroup::one(), result)
}
