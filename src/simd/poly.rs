//! Horner evaluation of fixed coefficient tables.

use super::float::LaneFloat;
use super::lanes::LaneGroup;

/// Evaluates `c[0] + c[1]·x + … + c[n]·xⁿ` in Horner form on every lane.
///
/// The table length is a compile-time constant at every call site, so the loop
/// unrolls into a straight chain of multiply-adds. An empty table evaluates to
/// zero.
#[inline(always)]
pub fn horner<T: LaneFloat, const N: usize>(x: LaneGroup<T, N>, coeffs: &[T]) -> LaneGroup<T, N> {
    let Some((&last, rest)) = coeffs.split_last() else {
        return LaneGroup::zero();
    };

    rest.iter()
        .rev()
        .fold(LaneGroup::splat(last), |acc, &c| acc * x + LaneGroup::splat(c))
}
