//! [`SimdMath`] for `f32` and `f64` slices.
//!
//! # Dispatch
//!
//! Every call splits its buffers with [`split_at_lanes`]: the lane-aligned
//! body goes through the array kernels in [`crate::kernels`], the tail of at
//! most `LANES - 1` elements goes through [`crate::scalar`]. Both compute the
//! same lane math, so the seam between them is invisible in the output.
//!
//! The parallel variants hand `PARALLEL_CHUNK_SIZE`-element chunks to rayon.
//! The chunk size is a multiple of every lane width, so only the last chunk
//! can have a tail. Inputs at or below `PARALLEL_SIMD_THRESHOLD` stay on the
//! calling thread.

use log::{debug, trace};
use rayon::prelude::*;

use crate::scalar::{self, split_at_lanes};
use crate::simd::{Elementary, SimdMath};
use crate::{kernels, PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD};

type UnaryKernel<T> = fn(&[T], &mut [T]);
type BinaryKernel<T> = fn(&[T], &[T], &mut [T]);
type DualKernel<T> = fn(&[T], &mut [T], &mut [T]);

#[inline(always)]
fn unary_into<T: Elementary>(
    input: &[T],
    output: &mut [T],
    lanes: usize,
    kernel: UnaryKernel<T>,
    fallback: fn(T) -> T,
) {
    let (body, tail) = split_at_lanes(input.len(), lanes);
    kernel(&input[..body], &mut output[..body]);

    if tail > 0 {
        trace!("Routing {} trailing elements to the scalar fallback", tail);
        for (x, y) in input[body..].iter().zip(output[body..].iter_mut()) {
            *y = fallback(*x);
        }
    }
}

#[inline(always)]
fn binary_into<T: Elementary>(
    a: &[T],
    b: &[T],
    output: &mut [T],
    lanes: usize,
    kernel: BinaryKernel<T>,
    fallback: fn(T, T) -> T,
) {
    let (body, tail) = split_at_lanes(a.len(), lanes);
    kernel(&a[..body], &b[..body], &mut output[..body]);

    if tail > 0 {
        trace!("Routing {} trailing element pairs to the scalar fallback", tail);
        for ((a, b), y) in a[body..]
            .iter()
            .zip(b[body..].iter())
            .zip(output[body..].iter_mut())
        {
            *y = fallback(*a, *b);
        }
    }
}

#[inline(always)]
fn dual_into<T: Elementary>(
    input: &[T],
    first: &mut [T],
    second: &mut [T],
    lanes: usize,
    kernel: DualKernel<T>,
    fallback: fn(T) -> (T, T),
) {
    let (body, tail) = split_at_lanes(input.len(), lanes);
    kernel(&input[..body], &mut first[..body], &mut second[..body]);

    if tail > 0 {
        trace!("Routing {} trailing elements to the scalar fallback", tail);
        for ((x, y1), y2) in input[body..]
            .iter()
            .zip(first[body..].iter_mut())
            .zip(second[body..].iter_mut())
        {
            (*y1, *y2) = fallback(*x);
        }
    }
}

fn unary<T: Elementary>(
    input: &[T],
    lanes: usize,
    kernel: UnaryKernel<T>,
    fallback: fn(T) -> T,
) -> Vec<T> {
    let mut output = vec![T::zero(); input.len()];
    unary_into(input, &mut output, lanes, kernel, fallback);
    output
}

fn par_unary<T: Elementary>(
    input: &[T],
    lanes: usize,
    kernel: UnaryKernel<T>,
    fallback: fn(T) -> T,
) -> Vec<T> {
    if input.len() <= PARALLEL_SIMD_THRESHOLD {
        debug!(
            "{} elements at or below the parallel threshold, staying on the calling thread",
            input.len()
        );
        return unary(input, lanes, kernel, fallback);
    }

    debug!(
        "Splitting {} elements into chunks of {}",
        input.len(),
        PARALLEL_CHUNK_SIZE
    );
    let mut output = vec![T::zero(); input.len()];
    output
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(input.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|(out, inp)| unary_into(inp, out, lanes, kernel, fallback));
    output
}

fn binary<T: Elementary>(
    a: &[T],
    b: &[T],
    lanes: usize,
    kernel: BinaryKernel<T>,
    fallback: fn(T, T) -> T,
) -> Vec<T> {
    assert_eq!(a.len(), b.len(), "Input slices must be the same length");
    let mut output = vec![T::zero(); a.len()];
    binary_into(a, b, &mut output, lanes, kernel, fallback);
    output
}

fn par_binary<T: Elementary>(
    a: &[T],
    b: &[T],
    lanes: usize,
    kernel: BinaryKernel<T>,
    fallback: fn(T, T) -> T,
) -> Vec<T> {
    if a.len() <= PARALLEL_SIMD_THRESHOLD {
        debug!(
            "{} element pairs at or below the parallel threshold, staying on the calling thread",
            a.len()
        );
        return binary(a, b, lanes, kernel, fallback);
    }

    assert_eq!(a.len(), b.len(), "Input slices must be the same length");
    debug!(
        "Splitting {} element pairs into chunks of {}",
        a.len(),
        PARALLEL_CHUNK_SIZE
    );
    let mut output = vec![T::zero(); a.len()];
    output
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(a.par_chunks(PARALLEL_CHUNK_SIZE))
        .zip(b.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|((out, a), b)| binary_into(a, b, out, lanes, kernel, fallback));
    output
}

fn dual<T: Elementary>(
    input: &[T],
    lanes: usize,
    kernel: DualKernel<T>,
    fallback: fn(T) -> (T, T),
) -> (Vec<T>, Vec<T>) {
    let mut first = vec![T::zero(); input.len()];
    let mut second = vec![T::zero(); input.len()];
    dual_into(input, &mut first, &mut second, lanes, kernel, fallback);
    (first, second)
}

fn par_dual<T: Elementary>(
    input: &[T],
    lanes: usize,
    kernel: DualKernel<T>,
    fallback: fn(T) -> (T, T),
) -> (Vec<T>, Vec<T>) {
    if input.len() <= PARALLEL_SIMD_THRESHOLD {
        debug!(
            "{} elements at or below the parallel threshold, staying on the calling thread",
            input.len()
        );
        return dual(input, lanes, kernel, fallback);
    }

    debug!(
        "Splitting {} elements into chunks of {}",
        input.len(),
        PARALLEL_CHUNK_SIZE
    );
    let mut first = vec![T::zero(); input.len()];
    let mut second = vec![T::zero(); input.len()];
    first
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(second.par_chunks_mut(PARALLEL_CHUNK_SIZE))
        .zip(input.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|((out1, out2), inp)| dual_into(inp, out1, out2, lanes, kernel, fallback));
    (first, second)
}

macro_rules! impl_simd_math {
    ($t:ty, $module:ident) => {
        impl SimdMath for [$t] {
            type Element = $t;

            fn sin(&self) -> Vec<$t> {
                unary(self, kernels::$module::LANES, kernels::$module::sin, scalar::sin)
            }

            fn par_sin(&self) -> Vec<$t> {
                par_unary(self, kernels::$module::LANES, kernels::$module::sin, scalar::sin)
            }

            fn cos(&self) -> Vec<$t> {
                unary(self, kernels::$module::LANES, kernels::$module::cos, scalar::cos)
            }

            fn par_cos(&self) -> Vec<$t> {
                par_unary(self, kernels::$module::LANES, kernels::$module::cos, scalar::cos)
            }

            fn sincos(&self) -> (Vec<$t>, Vec<$t>) {
                dual(self, kernels::$module::LANES, kernels::$module::sincos, scalar::sincos)
            }

            fn par_sincos(&self) -> (Vec<$t>, Vec<$t>) {
                par_dual(self, kernels::$module::LANES, kernels::$module::sincos, scalar::sincos)
            }

            fn tan(&self) -> Vec<$t> {
                unary(self, kernels::$module::LANES, kernels::$module::tan, scalar::tan)
            }

            fn par_tan(&self) -> Vec<$t> {
                par_unary(self, kernels::$module::LANES, kernels::$module::tan, scalar::tan)
            }

            fn atan(&self) -> Vec<$t> {
                unary(self, kernels::$module::LANES, kernels::$module::atan, scalar::atan)
            }

            fn par_atan(&self) -> Vec<$t> {
                par_unary(self, kernels::$module::LANES, kernels::$module::atan, scalar::atan)
            }

            fn atan2(&self, x: &[$t]) -> Vec<$t> {
                binary(self, x, kernels::$module::LANES, kernels::$module::atan2, scalar::atan2)
            }

            fn par_atan2(&self, x: &[$t]) -> Vec<$t> {
                par_binary(self, x, kernels::$module::LANES, kernels::$module::atan2, scalar::atan2)
            }

            fn pow(&self, exponent: &[$t]) -> Vec<$t> {
                binary(self, exponent, kernels::$module::LANES, kernels::$module::pow, scalar::pow)
            }

            fn par_pow(&self, exponent: &[$t]) -> Vec<$t> {
                par_binary(self, exponent, kernels::$module::LANES, kernels::$module::pow, scalar::pow)
            }

            fn erf(&self) -> Vec<$t> {
                unary(self, kernels::$module::LANES, kernels::$module::erf, scalar::erf)
            }

            fn par_erf(&self) -> Vec<$t> {
                par_unary(self, kernels::$module::LANES, kernels::$module::erf, scalar::erf)
            }

            fn exp2(&self) -> Vec<$t> {
                unary(self, kernels::$module::LANES, kernels::$module::exp2, scalar::exp2)
            }

            fn par_exp2(&self) -> Vec<$t> {
                par_unary(self, kernels::$module::LANES, kernels::$module::exp2, scalar::exp2)
            }

            fn exp10(&self) -> Vec<$t> {
                unary(self, kernels::$module::LANES, kernels::$module::exp10, scalar::exp10)
            }

            fn par_exp10(&self) -> Vec<$t> {
                par_unary(self, kernels::$module::LANES, kernels::$module::exp10, scalar::exp10)
            }

            fn log2(&self) -> Vec<$t> {
                unary(self, kernels::$module::LANES, kernels::$module::log2, scalar::log2)
            }

            fn par_log2(&self) -> Vec<$t> {
                par_unary(self, kernels::$module::LANES, kernels::$module::log2, scalar::log2)
            }

            fn log10(&self) -> Vec<$t> {
                unary(self, kernels::$module::LANES, kernels::$module::log10, scalar::log10)
            }

            fn par_log10(&self) -> Vec<$t> {
                par_unary(self, kernels::$module::LANES, kernels::$module::log10, scalar::log10)
            }
        }
    };
}

impl_simd_math!(f32, f32);
impl_simd_math!(f64, f64);

#[cfg(test)]
mod tests {
    use crate::simd::SimdMath;

    #[test]
    fn test_tail_matches_body() {
        // Same value at a body position and at a tail position
        let data = vec![0.7f32; crate::F32_LANES * 2 + 3];
        let result = data.tan();
        let first = result[0];
        assert!(result.iter().all(|&v| v.to_bits() == first.to_bits()));
    }

    #[test]
    fn test_empty_input() {
        let data: Vec<f64> = Vec::new();
        assert!(data.exp2().is_empty());
        assert!(data.par_log10().is_empty());
        let (s, c) = data.sincos();
        assert!(s.is_empty() && c.is_empty());
        assert!(data.atan2(&[]).is_empty());
    }

    #[test]
    fn test_shorter_than_one_lane_group() {
        let data = [2.0f64];
        assert_eq!(data.log2(), vec![1.0]);
        assert!((data.exp10()[0] - 100.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "Input slices must be the same length")]
    fn test_binary_length_mismatch_panics() {
        let y = [1.0f32, 2.0, 3.0];
        let x = [1.0f32, 2.0];
        y.atan2(&x);
    }
}
