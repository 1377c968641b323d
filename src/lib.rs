//! Branch-free elementary functions over flat `f32`/`f64` arrays.
//!
//! Every function is computed a lane group at a time: a fixed number of
//! elements flows through range reduction, a fixed polynomial and an
//! exponent-field reconstruction, with per-lane decisions made by masked
//! selects instead of branches.
//!
//! Three layers are exposed:
//!
//! - [`simd::math`]: the lane kernels, generic over the element type and the
//!   lane count `N` of a [`simd::LaneGroup`].
//! - [`kernels`]: array kernels that take input/output slices and process whole
//!   lane groups only. The caller routes any remainder elsewhere.
//! - [`simd::SimdMath`]: an allocating convenience trait on slices that runs the
//!   array kernels on the lane-aligned body, the [`scalar`] fallback on the tail,
//!   and offers rayon-parallel variants.
//!
//! ```rust
//! use lanemath::simd::SimdMath;
//!
//! let angles = vec![0.0f32, 0.5, 1.0, 1.5, 2.0];
//! let (sin, cos) = angles.sincos();
//! for (s, c) in sin.iter().zip(cos.iter()) {
//!     assert!((s * s + c * c - 1.0).abs() < 1e-5);
//! }
//! ```

pub mod error;
pub mod kernels;
pub mod scalar;
pub mod simd;

/// Lane width of the `f32` kernels.
#[cfg(wide_lanes)]
pub const F32_LANES: usize = 8;
/// Lane width of the `f32` kernels.
#[cfg(not(wide_lanes))]
pub const F32_LANES: usize = 4;

/// Lane width of the `f64` kernels.
#[cfg(wide_lanes)]
pub const F64_LANES: usize = 4;
/// Lane width of the `f64` kernels.
#[cfg(not(wide_lanes))]
pub const F64_LANES: usize = 2;

/// Inputs at or below this length run single-threaded in the `par_*` methods.
pub const PARALLEL_SIMD_THRESHOLD: usize = 262_144;

/// Elements per rayon task. A multiple of every lane width in use.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;
