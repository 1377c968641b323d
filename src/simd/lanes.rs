//! Fixed-width lane groups and lane masks.
//!
//! A [`LaneGroup<T, N>`] holds `N` elements that every kernel processes in
//! lockstep. Element-wise loops over a `[T; N]` with a compile-time `N` are
//! unrolled and vectorized by LLVM into packed instructions of the target, so
//! the kernels are written once against this type and specialized per width
//! at compile time.
//!
//! Per-lane decisions never become control flow. Comparisons produce a
//! [`LaneMask<N>`] and [`LaneMask::select`] combines two fully computed
//! candidates, which lowers to blend/bit-select instructions.

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Neg, Not, Shl, Shr, Sub};

use super::float::LaneFloat;

/// `N` elements processed together by one kernel step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct LaneGroup<T, const N: usize>([T; N]);

/// Per-lane boolean produced by lane comparisons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct LaneMask<const N: usize>([bool; N]);

impl<T: Copy, const N: usize> LaneGroup<T, N> {
    /// The number of lanes in the group.
    pub const LANES: usize = N;

    /// Creates a group with every lane set to `value`.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    pub fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    /// Loads the first `N` elements of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds fewer than `N` elements.
    #[inline(always)]
    pub fn load(src: &[T]) -> Self {
        let src = &src[..N];
        Self(std::array::from_fn(|i| src[i]))
    }

    /// Stores the group into the first `N` elements of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` holds fewer than `N` elements.
    #[inline(always)]
    pub fn store(self, dst: &mut [T]) {
        dst[..N].copy_from_slice(&self.0);
    }

    /// Reads one lane.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= N`.
    #[inline(always)]
    pub fn extract(self, lane: usize) -> T {
        self.0[lane]
    }

    /// Applies `f` to every lane.
    #[inline(always)]
    pub fn map<U: Copy>(self, f: impl Fn(T) -> U) -> LaneGroup<U, N> {
        LaneGroup(std::array::from_fn(|i| f(self.0[i])))
    }

    #[inline(always)]
    fn compare(self, other: Self, f: impl Fn(T, T) -> bool) -> LaneMask<N> {
        LaneMask(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl<T: LaneFloat, const N: usize> LaneGroup<T, N> {
    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline(always)]
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        self.map(T::abs)
    }

    /// Rounds every lane to the nearest integer, ties to even.
    #[inline(always)]
    pub fn round_even(self) -> Self {
        self.map(T::round_even)
    }

    /// Clamps every lane into `[lo, hi]`. NaN lanes pass through unchanged.
    #[inline(always)]
    pub fn clamp(self, lo: T, hi: T) -> Self {
        let lo = Self::splat(lo);
        let hi = Self::splat(hi);
        let below = self.lt_elements(lo);
        let above = self.gt_elements(hi);
        above.select(hi, below.select(lo, self))
    }

    #[inline(always)]
    pub fn eq_elements(self, other: Self) -> LaneMask<N> {
        self.compare(other, |a, b| a == b)
    }

    #[inline(always)]
    pub fn lt_elements(self, other: Self) -> LaneMask<N> {
        self.compare(other, |a, b| a < b)
    }

    #[inline(always)]
    pub fn gt_elements(self, other: Self) -> LaneMask<N> {
        self.compare(other, |a, b| a > b)
    }

    #[inline(always)]
    pub fn ge_elements(self, other: Self) -> LaneMask<N> {
        self.compare(other, |a, b| a >= b)
    }

    /// Lanes holding NaN.
    #[inline(always)]
    pub fn is_nan(self) -> LaneMask<N> {
        self.compare(self, |a, b| a != b)
    }
}

impl<const N: usize> LaneMask<N> {
    #[inline(always)]
    pub fn splat(value: bool) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    pub fn from_array(lanes: [bool; N]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; N] {
        self.0
    }

    /// Picks `if_true` in lanes where the mask is set, `if_false` elsewhere.
    #[inline(always)]
    pub fn select<T: Copy>(
        self,
        if_true: LaneGroup<T, N>,
        if_false: LaneGroup<T, N>,
    ) -> LaneGroup<T, N> {
        LaneGroup(std::array::from_fn(|i| {
            if self.0[i] {
                if_true.0[i]
            } else {
                if_false.0[i]
            }
        }))
    }

    #[inline(always)]
    pub fn any(self) -> bool {
        self.0.iter().any(|&lane| lane)
    }

    #[inline(always)]
    pub fn all(self) -> bool {
        self.0.iter().all(|&lane| lane)
    }
}

impl<const N: usize> BitAnd for LaneMask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] & rhs.0[i]))
    }
}

impl<const N: usize> BitOr for LaneMask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] | rhs.0[i]))
    }
}

impl<const N: usize> Not for LaneMask<N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(std::array::from_fn(|i| !self.0[i]))
    }
}

macro_rules! lanewise_binary {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl<T: Copy + $trait<Output = T>, const N: usize> $trait for LaneGroup<T, N> {
                type Output = Self;

                #[inline(always)]
                fn $method(self, rhs: Self) -> Self {
                    Self(std::array::from_fn(|i| self.0[i].$method(rhs.0[i])))
                }
            }
        )*
    };
}

// Float lanes use the arithmetic ops, bit lanes (`LaneGroup<T::Bits, N>`)
// the integer and bitwise ones.
lanewise_binary!(Add::add, Sub::sub, Mul::mul, Div::div, BitAnd::bitand, BitOr::bitor);

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for LaneGroup<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0.map(|lane| -lane))
    }
}

impl<T: Copy + Not<Output = T>, const N: usize> Not for LaneGroup<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0.map(|lane| !lane))
    }
}

impl<T: Copy + Shl<u32, Output = T>, const N: usize> Shl<u32> for LaneGroup<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, shift: u32) -> Self {
        Self(self.0.map(|lane| lane << shift))
    }
}

impl<T: Copy + Shr<u32, Output = T>, const N: usize> Shr<u32> for LaneGroup<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, shift: u32) -> Self {
        Self(self.0.map(|lane| lane >> shift))
    }
}
