//! Bit-pattern views of float lanes.
//!
//! These are same-width reinterpretations, never numeric conversions. The
//! exponential kernels build `2^k` by writing `k + bias` straight into the
//! exponent field, the logarithm kernels read it back out.

use super::float::LaneFloat;
use super::lanes::LaneGroup;

/// Reinterprets each lane as its raw IEEE-754 bit pattern.
#[inline(always)]
pub fn to_bits<T: LaneFloat, const N: usize>(x: LaneGroup<T, N>) -> LaneGroup<T::Bits, N> {
    x.map(T::to_raw_bits)
}

/// Reinterprets raw bit patterns as float lanes.
#[inline(always)]
pub fn from_bits<T: LaneFloat, const N: usize>(bits: LaneGroup<T::Bits, N>) -> LaneGroup<T, N> {
    bits.map(T::from_raw_bits)
}

/// Builds `2^k` for integral lanes `k` in `[T::MIN_EXPONENT, T::MAX_EXPONENT]`
/// by writing the biased exponent field directly (`ldexp(1, k)`).
///
/// Lanes outside that range produce garbage patterns; callers clamp first.
#[inline(always)]
pub fn pow2i<T: LaneFloat, const N: usize>(k: LaneGroup<T, N>) -> LaneGroup<T, N> {
    from_bits(k.map(T::biased_exponent) << T::MANTISSA_BITS)
}

/// Splits each lane into an unbiased exponent `k` and a mantissa `m` in `[1, 2)`
/// such that `|x| = m · 2^k` for normal inputs (`frexp` with a `[1, 2)` mantissa).
///
/// The sign is dropped. Zero and subnormal lanes decode as
/// `k = -bias` with the stored mantissa bits behind an implicit one.
#[inline(always)]
pub fn decompose<T: LaneFloat, const N: usize>(
    x: LaneGroup<T, N>,
) -> (LaneGroup<T, N>, LaneGroup<T, N>) {
    let bits = to_bits(x);
    let field = (bits & LaneGroup::splat(T::EXPONENT_MASK)) >> T::MANTISSA_BITS;
    let k = field.map(T::unbiased_exponent);
    let m = from_bits((bits & LaneGroup::splat(T::MANTISSA_MASK)) | LaneGroup::splat(T::ONE_BITS));
    (k, m)
}

/// Magnitude of `magnitude` with the sign bit of `sign`.
#[inline(always)]
pub fn copysign<T: LaneFloat, const N: usize>(
    magnitude: LaneGroup<T, N>,
    sign: LaneGroup<T, N>,
) -> LaneGroup<T, N> {
    let sign_mask = LaneGroup::splat(T::SIGN_MASK);
    from_bits((to_bits(magnitude) & !sign_mask) | (to_bits(sign) & sign_mask))
}
