//! Lane kernels of the elementary functions.
//!
//! Every function here takes whole [`LaneGroup`](super::LaneGroup)s and is
//! generic over the element type and lane count. Nothing branches on lane
//! values: all paths are computed for every lane and merged with
//! [`LaneMask::select`](super::LaneMask::select).
//!
//! | Function | Module   | Domain notes                                   |
//! |----------|----------|------------------------------------------------|
//! | `sin`, `cos`, `sincos`, `tan` | [`trig`] | accurate for moderate `|x|`     |
//! | `atan`, `atan2` | [`atan`] | `atan2(0, 0) = 0`                          |
//! | `exp2`, `exp10` | [`exp`]  | saturates at the normal exponent range     |
//! | `log2`, `log10` | [`log`]  | IEEE results for `0`, negatives, `∞`, NaN  |
//! | `pow`           | [`pow`]  | `pow(b, 0) = 1`, `pow(0, e) = 0`           |
//! | `erf`           | [`erf`]  | fixed rational approximation, `~1.5e-7`    |

pub mod atan;
pub mod erf;
pub mod exp;
pub mod log;
pub mod pow;
pub mod trig;

pub use atan::{atan, atan2, AtanCoefficients};
pub use erf::erf;
pub use exp::{exp10, exp2, ExpCoefficients};
pub use log::{log10, log2, LogCoefficients};
pub use pow::pow;
pub use trig::{cos, sin, sincos, tan, TrigCoefficients};
