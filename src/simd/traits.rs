/// Elementary functions over whole slices.
///
/// Implemented for `[f32]` and `[f64]`, so it is callable on slices, arrays
/// and `Vec`s alike. Each method allocates its result, runs the array kernels
/// on the lane-aligned body and the scalar fallback on the remaining
/// elements. The `par_*` variants split inputs longer than
/// [`PARALLEL_SIMD_THRESHOLD`](crate::PARALLEL_SIMD_THRESHOLD) into
/// lane-aligned chunks processed on the rayon pool; their results are
/// identical to the single-threaded methods.
///
/// # Example
///
/// ```rust
/// use lanemath::simd::SimdMath;
///
/// let y = vec![1.0f64, 1.0, -1.0, -1.0, 0.0];
/// let x = vec![1.0f64, -1.0, -1.0, 1.0, 0.0];
/// let angles = y.atan2(&x);
///
/// assert!((angles[0] - std::f64::consts::FRAC_PI_4).abs() < 1e-14);
/// assert!((angles[1] - 3.0 * std::f64::consts::FRAC_PI_4).abs() < 1e-14);
/// assert_eq!(angles[4], 0.0);
/// ```
pub trait SimdMath {
    type Element;

    fn sin(&self) -> Vec<Self::Element>;
    fn par_sin(&self) -> Vec<Self::Element>;

    fn cos(&self) -> Vec<Self::Element>;
    fn par_cos(&self) -> Vec<Self::Element>;

    /// Sine and cosine of every element from one shared reduction.
    fn sincos(&self) -> (Vec<Self::Element>, Vec<Self::Element>);
    fn par_sincos(&self) -> (Vec<Self::Element>, Vec<Self::Element>);

    /// Tangent, computed as `sin / cos`.
    fn tan(&self) -> Vec<Self::Element>;
    fn par_tan(&self) -> Vec<Self::Element>;

    fn atan(&self) -> Vec<Self::Element>;
    fn par_atan(&self) -> Vec<Self::Element>;

    /// Four-quadrant arctangent of `self[i] / x[i]`, with `atan2(0, 0) = 0`.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `self` differ in length.
    fn atan2(&self, x: &[Self::Element]) -> Vec<Self::Element>;
    fn par_atan2(&self, x: &[Self::Element]) -> Vec<Self::Element>;

    /// `self[i]^exponent[i]` computed as `2^(e·log₂|b|)`.
    ///
    /// `pow(0, e) = 0` and `pow(b, 0) = 1`, the latter winning for `pow(0, 0)`.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` and `self` differ in length.
    fn pow(&self, exponent: &[Self::Element]) -> Vec<Self::Element>;
    fn par_pow(&self, exponent: &[Self::Element]) -> Vec<Self::Element>;

    fn erf(&self) -> Vec<Self::Element>;
    fn par_erf(&self) -> Vec<Self::Element>;

    fn exp2(&self) -> Vec<Self::Element>;
    fn par_exp2(&self) -> Vec<Self::Element>;

    fn exp10(&self) -> Vec<Self::Element>;
    fn par_exp10(&self) -> Vec<Self::Element>;

    fn log2(&self) -> Vec<Self::Element>;
    fn par_log2(&self) -> Vec<Self::Element>;

    fn log10(&self) -> Vec<Self::Element>;
    fn par_log10(&self) -> Vec<Self::Element>;
}
