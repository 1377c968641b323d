//! Element types a [`LaneGroup`](super::LaneGroup) can carry through the kernels.
//!
//! [`LaneFloat`] is implemented for `f32` (IEEE-754 binary32) and `f64`
//! (binary64) only. Besides the arithmetic it inherits from
//! [`num::Float`]/[`num::traits::FloatConst`], it exposes the bit layout of the
//! format and the split constants used by the range reductions.

use std::fmt::Debug;
use std::ops::{Add, BitAnd, BitOr, Not, Shl, Shr, Sub};

use num::traits::{Float, FloatConst};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point lane element with a same-width unsigned bit view.
pub trait LaneFloat:
    Float + FloatConst + Default + Debug + Send + Sync + 'static + sealed::Sealed
{
    /// Same-width unsigned integer holding the raw IEEE-754 pattern.
    type Bits: Copy
        + Eq
        + Debug
        + Default
        + Send
        + Sync
        + 'static
        + Add<Output = Self::Bits>
        + Sub<Output = Self::Bits>
        + BitAnd<Output = Self::Bits>
        + BitOr<Output = Self::Bits>
        + Not<Output = Self::Bits>
        + Shl<u32, Output = Self::Bits>
        + Shr<u32, Output = Self::Bits>;

    /// Width of the stored mantissa field.
    const MANTISSA_BITS: u32;
    const SIGN_MASK: Self::Bits;
    const EXPONENT_MASK: Self::Bits;
    const MANTISSA_MASK: Self::Bits;
    /// Pattern of `1.0`: bias in the exponent field, empty mantissa.
    const ONE_BITS: Self::Bits;

    /// Smallest power of two with a normal encoding.
    const MIN_EXPONENT: Self;
    /// Largest power of two with a finite encoding.
    const MAX_EXPONENT: Self;

    /// `2π` split so that `k * TAU_HI` is exact for every `k` the trig
    /// reduction produces on moderately sized inputs.
    const TAU_HI: Self;
    const TAU_LO: Self;
    const FRAC_1_TAU: Self;

    /// `ln 2` split for the natural-log domain reduction of `exp`.
    const LN_2_HI: Self;
    const LN_2_LO: Self;

    /// `tan(π/8)`, the half-angle threshold of the arctangent reduction.
    const TAN_FRAC_PI_8: Self;

    /// Converts a literal to this precision.
    fn lit(value: f64) -> Self;

    fn to_raw_bits(self) -> Self::Bits;

    fn from_raw_bits(bits: Self::Bits) -> Self;

    /// Round to nearest integer, ties to even.
    fn round_even(self) -> Self;

    /// Biased exponent field value (not yet shifted) of `2^k` for an
    /// integral `k` in `[MIN_EXPONENT, MAX_EXPONENT]`.
    fn biased_exponent(k: Self) -> Self::Bits;

    /// Unbiased exponent of an exponent field already shifted down to bit 0.
    fn unbiased_exponent(field: Self::Bits) -> Self;
}

#[allow(clippy::excessive_precision)]
impl LaneFloat for f32 {
    type Bits = u32;

    const MANTISSA_BITS: u32 = 23;
    const SIGN_MASK: u32 = 0x8000_0000;
    const EXPONENT_MASK: u32 = 0x7f80_0000;
    const MANTISSA_MASK: u32 = 0x007f_ffff;
    const ONE_BITS: u32 = 0x3f80_0000;

    const MIN_EXPONENT: f32 = -126.0;
    const MAX_EXPONENT: f32 = 127.0;

    const TAU_HI: f32 = 6.28125;
    const TAU_LO: f32 = 1.935_307_179_586_476_9e-3;
    const FRAC_1_TAU: f32 = 0.159_154_943_091_895_35;

    const LN_2_HI: f32 = 0.693_359_375;
    const LN_2_LO: f32 = -2.121_944_400_546_905_8e-4;

    const TAN_FRAC_PI_8: f32 = 0.414_213_562_373_095_05;

    #[inline(always)]
    fn lit(value: f64) -> f32 {
        value as f32
    }

    #[inline(always)]
    fn to_raw_bits(self) -> u32 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_raw_bits(bits: u32) -> f32 {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn round_even(self) -> f32 {
        self.round_ties_even()
    }

    #[inline(always)]
    fn biased_exponent(k: f32) -> u32 {
        (k as i32 + 127) as u32
    }

    #[inline(always)]
    fn unbiased_exponent(field: u32) -> f32 {
        (field as i32 - 127) as f32
    }
}

#[allow(clippy::excessive_precision)]
impl LaneFloat for f64 {
    type Bits = u64;

    const MANTISSA_BITS: u32 = 52;
    const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
    const EXPONENT_MASK: u64 = 0x7ff0_0000_0000_0000;
    const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
    const ONE_BITS: u64 = 0x3ff0_0000_0000_0000;

    const MIN_EXPONENT: f64 = -1022.0;
    const MAX_EXPONENT: f64 = 1023.0;

    // High part keeps 24 significant bits
    const TAU_HI: f64 = 6.283_185_243_606_567;
    const TAU_LO: f64 = 6.357_301_909_411_278e-8;
    const FRAC_1_TAU: f64 = 0.159_154_943_091_895_35;

    const LN_2_HI: f64 = 6.931_471_803_691_238_164_90e-1;
    const LN_2_LO: f64 = 1.908_214_929_270_587_700_02e-10;

    const TAN_FRAC_PI_8: f64 = 0.414_213_562_373_095_05;

    #[inline(always)]
    fn lit(value: f64) -> f64 {
        value
    }

    #[inline(always)]
    fn to_raw_bits(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_raw_bits(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn round_even(self) -> f64 {
        self.round_ties_even()
    }

    #[inline(always)]
    fn biased_exponent(k: f64) -> u64 {
        (k as i64 + 1023) as u64
    }

    #[inline(always)]
    fn unbiased_exponent(field: u64) -> f64 {
        (field as i64 - 1023) as f64
    }
}
