//! Closed-form intersections for the chord construction.
//!
//! Both routines are pure. Degenerate inputs are reported as
//! [`GeometryError`] values, never as NaN coordinates.
//!
//! Nothing here squares a coordinate: radii anywhere in the finite range
//! produce finite points, and every threshold is taken relative to a length
//! of the figure.

use crate::errors::GeometryError;
use crate::float_types::{Real, VERTICAL_TOLERANCE, is_negligible};
use nalgebra::Point2;

/// `√(r² − p²)` evaluated as `√(r − p)·√(r + p)`.
///
/// Exact for `p == 0` and free of overflow for any finite `r`. Callers ensure
/// `|p| <= r`.
#[inline]
pub(crate) fn half_chord(r: Real, p: Real) -> Real {
    (r - p).sqrt() * (r + p).sqrt()
}

/// Euclidean distance between two points without squaring either coordinate.
#[inline]
pub fn separation(a: &Point2<Real>, b: &Point2<Real>) -> Real {
    let v = b - a;
    v.x.hypot(v.y)
}

/// Intersect the line through `(0, m)` with direction `theta` (radians) and the
/// circle of radius `r` centered at the origin.
///
/// The line is parametrized as `(t·cosθ, m + t·sinθ)`, which turns `x² + y² = r²` into
/// `t² + (2·m·sinθ)·t + (m² − r²) = 0`. Its reduced discriminant
/// `Δ/4 = r² − (m·cosθ)²` is evaluated in the factored form
/// `(r − m·cosθ)(r + m·cosθ)`, and that is the value an [`GeometryError::OutOfDomain`]
/// carries.
///
/// The first returned point always comes from the `+√Δ` root and the second from
/// the `−√Δ` root, so endpoint labels move continuously with `theta`.
/// A tangent line (`Δ == 0`) yields the same point twice.
pub fn circle_line_intersection(
    theta: Real,
    m: Real,
    r: Real,
) -> Result<[Point2<Real>; 2], GeometryError> {
    let (sin, cos) = theta.sin_cos();

    let beta = m * sin;
    let along = m * cos;
    let (u, v) = (r - along, r + along);

    if u.is_nan() || v.is_nan() || u < 0.0 || v < 0.0 {
        return Err(GeometryError::OutOfDomain {
            angle_rad: theta,
            offset: m,
            radius: r,
            discriminant: u * v,
        });
    }

    let root = u.sqrt() * v.sqrt();
    let t1 = -beta + root;
    let t2 = -beta - root;

    Ok([
        Point2::new(t1 * cos, m + t1 * sin),
        Point2::new(t2 * cos, m + t2 * sin),
    ])
}

/// True when the line through `p1` and `p2` is vertical, i.e. its horizontal run
/// is at most [`VERTICAL_TOLERANCE`] times the segment length.
#[inline]
pub fn is_vertical(p1: &Point2<Real>, p2: &Point2<Real>) -> bool {
    let dx = p2.x - p1.x;
    dx.abs() <= VERTICAL_TOLERANCE * dx.hypot(p2.y - p1.y)
}

/// Intersect the line through `p1` and `p2` with the horizontal line `y = y_line`.
///
/// - A vertical line crosses at `(p1.x, y_line)`.
/// - A line whose rise is negligible next to `|p2 − p1|` has either no crossing
///   or infinitely many, both of which are reported as
///   [`GeometryError::UndefinedIntersection`]. So is `p1 == p2`.
pub fn line_horizontal_intersection(
    p1: &Point2<Real>,
    p2: &Point2<Real>,
    y_line: Real,
) -> Result<Point2<Real>, GeometryError> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if is_negligible(dy, dx.hypot(dy)) {
        return Err(GeometryError::UndefinedIntersection {
            p1: *p1,
            p2: *p2,
            y_line,
        });
    }

    if is_vertical(p1, p2) {
        return Ok(Point2::new(p1.x, y_line));
    }

    // Inverse slope; the fraction is formed first so huge coordinates stay finite
    let x = p1.x + (y_line - p1.y) / dy * dx;
    Ok(Point2::new(x, y_line))
}
