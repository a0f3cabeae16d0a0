//! Inputs of a construction

use crate::circle::Circle;
use crate::errors::{ConfigurationIssue, GeometryError};
use crate::float_types::Real;

/// Which endpoints of the two movable chords are joined by the wing lines.
///
/// Both choices satisfy the theorem. [`WingPairing::Butterfly`] draws the
/// classical figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WingPairing {
    /// X on AD, Y on BC
    #[default]
    Butterfly,
    /// X on AC, Y on BD
    Crossed,
}

/// Radius, chord offset and the two chord directions (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    pub radius: Real,
    /// y-coordinate of M, the midpoint of the horizontal chord PQ
    pub chord_offset: Real,
    pub angle_ab: Real,
    pub angle_cd: Real,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pairing: WingPairing,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            radius: 160.0,
            chord_offset: 50.0,
            angle_ab: 60.0,
            angle_cd: 120.0,
            pairing: WingPairing::Butterfly,
        }
    }
}

impl Configuration {
    pub fn new(radius: Real, chord_offset: Real, angle_ab: Real, angle_cd: Real) -> Self {
        Self {
            radius,
            chord_offset,
            angle_ab,
            angle_cd,
            pairing: WingPairing::default(),
        }
    }

    pub const fn with_radius(mut self, radius: Real) -> Self {
        self.radius = radius;
        self
    }

    pub const fn with_chord_offset(mut self, chord_offset: Real) -> Self {
        self.chord_offset = chord_offset;
        self
    }

    /// Set both chord directions in degrees.
    pub const fn with_angles(mut self, angle_ab: Real, angle_cd: Real) -> Self {
        self.angle_ab = angle_ab;
        self.angle_cd = angle_cd;
        self
    }

    /// Set both chord directions in radians.
    pub fn with_angles_radians(self, angle_ab: Real, angle_cd: Real) -> Self {
        self.with_angles(angle_ab.to_degrees(), angle_cd.to_degrees())
    }

    pub const fn with_pairing(mut self, pairing: WingPairing) -> Self {
        self.pairing = pairing;
        self
    }

    /// The same configuration with the two movable chords exchanged.
    pub const fn swapped(self) -> Self {
        self.with_angles(self.angle_cd, self.angle_ab)
    }

    pub fn angle_ab_radians(&self) -> Real {
        self.angle_ab.to_radians()
    }

    pub fn angle_cd_radians(&self) -> Real {
        self.angle_cd.to_radians()
    }

    /// Check every input and return the circle the construction lives on.
    ///
    /// Angles may be any finite value; only the offset and radius are bounded.
    pub fn validate(&self) -> Result<Circle, GeometryError> {
        let invalid = |issue| GeometryError::InvalidConfiguration {
            issue,
            radius: self.radius,
            chord_offset: self.chord_offset,
        };

        if !(self.radius.is_finite()
            && self.chord_offset.is_finite()
            && self.angle_ab.is_finite()
            && self.angle_cd.is_finite())
        {
            return Err(invalid(ConfigurationIssue::NonFiniteInput));
        }
        if self.radius <= 0.0 {
            return Err(invalid(ConfigurationIssue::NonPositiveRadius));
        }
        if self.chord_offset.abs() >= self.radius {
            return Err(invalid(ConfigurationIssue::OffsetOutsideCircle));
        }

        Circle::new(self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let circle = Configuration::default().validate().unwrap();
        assert_eq!(circle.radius(), 160.0);
    }

    #[test]
    fn builder_sets_fields() {
        let config = Configuration::default()
            .with_radius(10.0)
            .with_chord_offset(-2.0)
            .with_angles(15.0, 75.0)
            .with_pairing(WingPairing::Crossed);
        assert_eq!(config.radius, 10.0);
        assert_eq!(config.chord_offset, -2.0);
        assert_eq!((config.angle_ab, config.angle_cd), (15.0, 75.0));
        assert_eq!(config.pairing, WingPairing::Crossed);
        assert_eq!(config.swapped().angle_ab, 75.0);
    }

    #[test]
    fn radians_are_stored_as_degrees() {
        let config = Configuration::default()
            .with_angles_radians(crate::float_types::FRAC_PI_2, crate::float_types::PI / 4.0);
        let tol = crate::float_types::tolerance();
        assert!((config.angle_ab - 90.0).abs() < tol * 90.0);
        assert!((config.angle_cd - 45.0).abs() < tol * 45.0);
    }

    #[test]
    fn rejects_each_issue() {
        let issue = |config: Configuration| match config.validate() {
            Err(GeometryError::InvalidConfiguration { issue, .. }) => Some(issue),
            _ => None,
        };
        let base = Configuration::default();
        assert_eq!(issue(base.with_radius(0.0)), Some(ConfigurationIssue::NonPositiveRadius));
        assert_eq!(issue(base.with_chord_offset(160.0)), Some(ConfigurationIssue::OffsetOutsideCircle));
        assert_eq!(issue(base.with_chord_offset(-170.0)), Some(ConfigurationIssue::OffsetOutsideCircle));
        assert_eq!(issue(base.with_angles(Real::NAN, 3.0)), Some(ConfigurationIssue::NonFiniteInput));
        assert_eq!(issue(base), None);
    }
}
