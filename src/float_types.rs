//! Scalar type and the tolerances the construction is judged by.
//!
//! Every tolerance here is *relative*: it is multiplied by a length taken from the
//! geometry at hand, so a construction behaves the same at radius `1e-9` and `1e9`.

use std::sync::OnceLock;

#[cfg(feature = "f64")]
mod precision {
    pub type Real = f64;
    pub use core::f64::consts::{FRAC_PI_2, PI, TAU};

    pub const DEFAULT_TOLERANCE: Real = 1e-6;
    pub const VERTICAL_TOLERANCE: Real = 1e-9;
    pub const INVARIANT_TOLERANCE: Real = 1e-6;
}

#[cfg(feature = "f32")]
mod precision {
    pub type Real = f32;
    pub use core::f32::consts::{FRAC_PI_2, PI, TAU};

    pub const DEFAULT_TOLERANCE: Real = 1e-4;
    pub const VERTICAL_TOLERANCE: Real = 1e-6;
    pub const INVARIANT_TOLERANCE: Real = 1e-3;
}

/// `f64` unless the `f32` feature is selected.
pub use precision::Real;
pub use precision::{FRAC_PI_2, PI, TAU};

/// Largest `|dx| / |p2 - p1|` at which a line is snapped to vertical.
pub use precision::VERTICAL_TOLERANCE;

/// Relative tolerance for `|XM| == |MY|`.
pub use precision::INVARIANT_TOLERANCE;

static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Parse a tolerance override, clamped to at least `Real::EPSILON`.
fn parse_override(text: &str) -> Option<Real> {
    text.trim()
        .parse::<Real>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .map(|value| value.max(Real::EPSILON))
}

/// The relative comparison tolerance.
///
/// Resolved once: a value passed to [`set_tolerance`] wins, then the build-time
/// `BUTTERFLY_TOLERANCE` environment variable, then the precision default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        option_env!("BUTTERFLY_TOLERANCE")
            .and_then(parse_override)
            .unwrap_or(precision::DEFAULT_TOLERANCE)
    })
}

/// Fix the tolerance before first use; later calls are ignored.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// True when `value` is negligible next to the length `scale`.
#[inline]
pub fn is_negligible(value: Real, scale: Real) -> bool {
    value.abs() <= tolerance() * scale
}
