//! Circle centered at the origin

use crate::errors::{ConfigurationIssue, GeometryError};
use crate::float_types::Real;
use crate::intersection::{circle_line_intersection, half_chord};
use nalgebra::Point2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    radius: Real,
}

impl Circle {
    /// Create a circle of the given radius around the origin.
    pub fn new(radius: Real) -> Result<Self, GeometryError> {
        if !radius.is_finite() {
            return Err(GeometryError::InvalidConfiguration {
                issue: ConfigurationIssue::NonFiniteInput,
                radius,
                chord_offset: 0.0,
            });
        }
        if radius <= 0.0 {
            return Err(GeometryError::InvalidConfiguration {
                issue: ConfigurationIssue::NonPositiveRadius,
                radius,
                chord_offset: 0.0,
            });
        }
        Ok(Self { radius })
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    pub fn contains_strictly(&self, point: &Point2<Real>) -> bool {
        point.x.hypot(point.y) < self.radius
    }

    /// Endpoints of the horizontal chord `y = offset`, left endpoint first.
    pub fn horizontal_chord(&self, offset: Real) -> Result<[Point2<Real>; 2], GeometryError> {
        if !offset.is_finite() {
            return Err(GeometryError::InvalidConfiguration {
                issue: ConfigurationIssue::NonFiniteInput,
                radius: self.radius,
                chord_offset: offset,
            });
        }
        if offset.abs() >= self.radius {
            return Err(GeometryError::InvalidConfiguration {
                issue: ConfigurationIssue::OffsetOutsideCircle,
                radius: self.radius,
                chord_offset: offset,
            });
        }
        let half_length = half_chord(self.radius, offset);
        Ok([
            Point2::new(-half_length, offset),
            Point2::new(half_length, offset),
        ])
    }

    /// Endpoints of the chord through `(0, offset)` in direction `angle` (radians).
    /// See [`circle_line_intersection`] for the endpoint ordering.
    pub fn chord_through(
        &self,
        offset: Real,
        angle: Real,
    ) -> Result<[Point2<Real>; 2], GeometryError> {
        circle_line_intersection(angle, offset, self.radius)
    }
}
