//! Scalar fallback for the elements left over after the lane-aligned body.
//!
//! Each function is the lane math instantiated at one lane, so a remainder
//! element goes through exactly the operations it would inside a full group
//! and matches the kernel output bit for bit.

use crate::simd::{math, Elementary, LaneGroup};

/// Splits a buffer of `len` elements into a lane-aligned body and a tail.
///
/// Returns `(body, tail)` with `body + tail == len`, `body % lanes == 0` and
/// `tail < lanes`. The kernels own `[0, body)`, the scalar fallback owns
/// `[body, len)`.
///
/// # Panics
///
/// Panics if `lanes` is zero.
#[inline]
pub fn split_at_lanes(len: usize, lanes: usize) -> (usize, usize) {
    assert!(lanes > 0, "Lane width must be non-zero");
    let tail = len % lanes;
    (len - tail, tail)
}

#[inline(always)]
fn one<T: Elementary>(
    x: T,
    f: impl Fn(LaneGroup<T, 1>) -> LaneGroup<T, 1>,
) -> T {
    f(LaneGroup::splat(x)).extract(0)
}

#[inline(always)]
fn two<T: Elementary>(
    a: T,
    b: T,
    f: impl Fn(LaneGroup<T, 1>, LaneGroup<T, 1>) -> LaneGroup<T, 1>,
) -> T {
    f(LaneGroup::splat(a), LaneGroup::splat(b)).extract(0)
}

pub fn sin<T: Elementary>(x: T) -> T {
    one(x, math::sin)
}

pub fn cos<T: Elementary>(x: T) -> T {
    one(x, math::cos)
}

/// Sine and cosine from one shared reduction.
pub fn sincos<T: Elementary>(x: T) -> (T, T) {
    let (s, c) = math::sincos(LaneGroup::<T, 1>::splat(x));
    (s.extract(0), c.extract(0))
}

pub fn tan<T: Elementary>(x: T) -> T {
    one(x, math::tan)
}

pub fn atan<T: Elementary>(x: T) -> T {
    one(x, math::atan)
}

/// Four-quadrant arctangent of `y / x`.
pub fn atan2<T: Elementary>(y: T, x: T) -> T {
    two(y, x, math::atan2)
}

pub fn exp2<T: Elementary>(x: T) -> T {
    one(x, math::exp2)
}

pub fn exp10<T: Elementary>(x: T) -> T {
    one(x, math::exp10)
}

pub fn log2<T: Elementary>(x: T) -> T {
    one(x, math::log2)
}

pub fn log10<T: Elementary>(x: T) -> T {
    one(x, math::log10)
}

/// `base^exponent`, with the sign of the base dropped.
pub fn pow<T: Elementary>(base: T, exponent: T) -> T {
    two(base, exponent, math::pow)
}

pub fn erf<T: Elementary>(x: T) -> T {
    one(x, math::erf)
}
