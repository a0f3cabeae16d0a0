//! Geometry errors

use crate::float_types::Real;
use nalgebra::Point2;

/// Why a [`Configuration`](crate::config::Configuration) was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationIssue {
    /// The circle radius is zero or negative
    NonPositiveRadius,
    /// An input is NaN or infinite
    NonFiniteInput,
    /// `|chord_offset| >= radius`, so M is not strictly inside the circle
    OffsetOutsideCircle,
}

impl std::fmt::Display for ConfigurationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationIssue::NonPositiveRadius => write!(f, "radius must be positive"),
            ConfigurationIssue::NonFiniteInput => write!(f, "inputs must be finite"),
            ConfigurationIssue::OffsetOutsideCircle => {
                write!(f, "chord offset must be strictly smaller than the radius")
            },
        }
    }
}

/// All the conditions the engine reports instead of producing a point
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (InvalidConfiguration) The fixed chord PQ cannot be constructed
    #[error("(InvalidConfiguration) {issue}: radius = {radius}, chord offset = {chord_offset}")]
    InvalidConfiguration {
        issue: ConfigurationIssue,
        radius: Real,
        chord_offset: Real,
    },
    /// (OutOfDomain) A chord direction does not meet the circle from its offset point
    #[error(
        "(OutOfDomain) line at {angle_rad} rad through (0, {offset}) misses circle of radius {radius} (discriminant {discriminant})"
    )]
    OutOfDomain {
        angle_rad: Real,
        offset: Real,
        radius: Real,
        discriminant: Real,
    },
    /// (UndefinedIntersection) A wing line is parallel to or coincident with PQ
    #[error("(UndefinedIntersection) line through {p1} and {p2} has no single crossing with y = {y_line}")]
    UndefinedIntersection {
        p1: Point2<Real>,
        p2: Point2<Real>,
        y_line: Real,
    },
}

/// Fieldless discriminant of [`GeometryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidConfiguration,
    OutOfDomain,
    UndefinedIntersection,
}

impl GeometryError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            GeometryError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            GeometryError::OutOfDomain { .. } => ErrorKind::OutOfDomain,
            GeometryError::UndefinedIntersection { .. } => ErrorKind::UndefinedIntersection,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::InvalidConfiguration => "InvalidConfiguration",
            ErrorKind::OutOfDomain => "OutOfDomain",
            ErrorKind::UndefinedIntersection => "UndefinedIntersection",
        };
        f.write_str(name)
    }
}
