//! Array kernels over caller-owned buffers.
//!
//! Every kernel walks its buffers one lane group at a time and writes exactly
//! one output element per input element. Only whole lane groups are
//! processed:
//!
//! - `len / LANES` groups are computed.
//! - The trailing `len % LANES` output elements are left untouched.
//! - Nothing is read or written out of bounds, whatever the lengths.
//!
//! When buffer lengths differ, the shortest one bounds the work. The
//! `try_*` variants check the contract up front (equal lengths, whole lane
//! groups) and return an error without touching any output instead.
//!
//! The lane width is fixed per precision: `kernels::f32::LANES` and
//! `kernels::f64::LANES` follow [`crate::F32_LANES`] and [`crate::F64_LANES`].
//!
//! ```rust
//! use lanemath::kernels;
//!
//! let input = [0.5f32; 16];
//! let mut output = [0.0f32; 16];
//! kernels::f32::exp2(&input, &mut output);
//! assert!((output[15] - 0.5f32.exp2()).abs() < 1e-6);
//! ```

use crate::error::{length_mismatch, ragged_length, Result};
use crate::simd::{Elementary, LaneGroup};

#[inline(always)]
fn unary<T: Elementary, const N: usize>(
    input: &[T],
    output: &mut [T],
    f: impl Fn(LaneGroup<T, N>) -> LaneGroup<T, N>,
) {
    for (src, dst) in input.chunks_exact(N).zip(output.chunks_exact_mut(N)) {
        f(LaneGroup::load(src)).store(dst);
    }
}

#[inline(always)]
fn unary_in_place<T: Elementary, const N: usize>(
    data: &mut [T],
    f: impl Fn(LaneGroup<T, N>) -> LaneGroup<T, N>,
) {
    for chunk in data.chunks_exact_mut(N) {
        f(LaneGroup::load(chunk)).store(chunk);
    }
}

#[inline(always)]
fn binary<T: Elementary, const N: usize>(
    a: &[T],
    b: &[T],
    output: &mut [T],
    f: impl Fn(LaneGroup<T, N>, LaneGroup<T, N>) -> LaneGroup<T, N>,
) {
    for ((a, b), dst) in a
        .chunks_exact(N)
        .zip(b.chunks_exact(N))
        .zip(output.chunks_exact_mut(N))
    {
        f(LaneGroup::load(a), LaneGroup::load(b)).store(dst);
    }
}

#[inline(always)]
fn dual<T: Elementary, const N: usize>(
    input: &[T],
    first: &mut [T],
    second: &mut [T],
    f: impl Fn(LaneGroup<T, N>) -> (LaneGroup<T, N>, LaneGroup<T, N>),
) {
    for ((src, dst1), dst2) in input
        .chunks_exact(N)
        .zip(first.chunks_exact_mut(N))
        .zip(second.chunks_exact_mut(N))
    {
        let (r1, r2) = f(LaneGroup::load(src));
        r1.store(dst1);
        r2.store(dst2);
    }
}

/// Checks the buffer contract: every length equals the first, and the first
/// is a whole number of lane groups.
fn check_contract(lens: &[usize], lanes: usize) -> Result<()> {
    let expected = lens.first().copied().unwrap_or(0);
    if let Some(&actual) = lens.iter().find(|&&len| len != expected) {
        return Err(length_mismatch(expected, actual));
    }
    if expected % lanes != 0 {
        return Err(ragged_length(expected, lanes));
    }
    Ok(())
}

macro_rules! unary_kernels {
    ($t:ty, $lanes:expr; $($name:ident, $in_place:ident, $checked:ident => $math:path;)+) => {
        $(
            #[doc = concat!("`", stringify!($name), "` of every whole lane group of `input` into `output`.")]
            #[inline]
            pub fn $name(input: &[$t], output: &mut [$t]) {
                super::unary::<$t, { $lanes }>(input, output, $math);
            }

            #[doc = concat!("`", stringify!($name), "` of every whole lane group of `data`, in place.")]
            #[inline]
            pub fn $in_place(data: &mut [$t]) {
                super::unary_in_place::<$t, { $lanes }>(data, $math);
            }

            #[doc = concat!("Checked [`", stringify!($name), "`]: fails without writing on a contract violation.")]
            pub fn $checked(input: &[$t], output: &mut [$t]) -> Result<()> {
                super::check_contract(&[input.len(), output.len()], $lanes)?;
                $name(input, output);
                Ok(())
            }
        )+
    };
}

macro_rules! binary_kernels {
    ($t:ty, $lanes:expr; $($name:ident, $checked:ident => $math:path;)+) => {
        $(
            #[doc = concat!("`", stringify!($name), "` of every whole lane group of the input pair into `output`.")]
            #[inline]
            pub fn $name(a: &[$t], b: &[$t], output: &mut [$t]) {
                super::binary::<$t, { $lanes }>(a, b, output, $math);
            }

            #[doc = concat!("Checked [`", stringify!($name), "`]: fails without writing on a contract violation.")]
            pub fn $checked(a: &[$t], b: &[$t], output: &mut [$t]) -> Result<()> {
                super::check_contract(&[a.len(), b.len(), output.len()], $lanes)?;
                $name(a, b, output);
                Ok(())
            }
        )+
    };
}

macro_rules! precision_kernels {
    ($module:ident, $t:ty, $lanes:expr) => {
        #[doc = concat!("Kernels over `", stringify!($t), "` buffers.")]
        pub mod $module {
            use crate::error::Result;
            use crate::simd::math;

            /// Elements per lane group.
            pub const LANES: usize = $lanes;

            unary_kernels! { $t, LANES;
                sin, sin_in_place, try_sin => math::sin;
                cos, cos_in_place, try_cos => math::cos;
                tan, tan_in_place, try_tan => math::tan;
                atan, atan_in_place, try_atan => math::atan;
                exp2, exp2_in_place, try_exp2 => math::exp2;
                exp10, exp10_in_place, try_exp10 => math::exp10;
                log2, log2_in_place, try_log2 => math::log2;
                log10, log10_in_place, try_log10 => math::log10;
                erf, erf_in_place, try_erf => math::erf;
            }

            binary_kernels! { $t, LANES;
                atan2, try_atan2 => math::atan2;
                pow, try_pow => math::pow;
            }

            /// Sine into `sin` and cosine into `cos` for every whole lane
            /// group of `input`, sharing one reduction per group.
            #[inline]
            pub fn sincos(input: &[$t], sin: &mut [$t], cos: &mut [$t]) {
                super::dual::<$t, { LANES }>(input, sin, cos, math::sincos);
            }

            /// Checked [`sincos`]: fails without writing on a contract violation.
            pub fn try_sincos(input: &[$t], sin: &mut [$t], cos: &mut [$t]) -> Result<()> {
                super::check_contract(&[input.len(), sin.len(), cos.len()], LANES)?;
                sincos(input, sin, cos);
                Ok(())
            }
        }
    };
}

precision_kernels!(f32, f32, crate::F32_LANES);
precision_kernels!(f64, f64, crate::F64_LANES);
