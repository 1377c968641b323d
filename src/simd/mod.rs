//! Portable lane abstraction and the elementary-function kernels built on it.
//!
//! # Layout
//!
//! - [`lanes`]: [`LaneGroup`] and [`LaneMask`], the fixed-width unit of work
//!   and the branch-free select over it.
//! - [`float`]: [`LaneFloat`], the `f32`/`f64` element trait with the IEEE-754
//!   layout constants.
//! - [`bits`]: bit-pattern reinterpretation, `2^k` construction and
//!   exponent/mantissa decomposition.
//! - [`poly`]: Horner evaluation of coefficient tables.
//! - [`math`]: the function families.
//! - [`SimdMath`]: the slice-level convenience trait, single-threaded and
//!   rayon-parallel.
//!
//! Lane groups are plain arrays processed element-wise with no data-dependent
//! branches, which LLVM lowers to the host vector unit.

pub mod bits;
pub mod float;
pub mod lanes;
pub mod math;
pub mod poly;
mod slice;
pub mod traits;

pub use float::LaneFloat;
pub use lanes::{LaneGroup, LaneMask};
pub use traits::SimdMath;

use math::{AtanCoefficients, ExpCoefficients, LogCoefficients, TrigCoefficients};

/// Element types carrying every coefficient table, i.e. `f32` and `f64`.
pub trait Elementary:
    TrigCoefficients + AtanCoefficients + ExpCoefficients + LogCoefficients
{
}

impl<T> Elementary for T where
    T: TrigCoefficients + AtanCoefficients + ExpCoefficients + LogCoefficients
{
}
