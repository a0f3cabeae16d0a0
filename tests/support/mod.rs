//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use butterfly::{Configuration, ConstructionPoints, GeometryError, compute, float_types::Real};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Same as [`approx_eq`] for both coordinates.
pub fn points_close(a: &Point2<Real>, b: &Point2<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

/// Radii, offset fractions and angle grids shared by the property tests.
/// The radii span eighteen orders of magnitude; every check is relative to the radius.
pub const RADII: [Real; 6] = [1e-9, 1e-3, 1.0, 160.0, 1000.0, 1e9];
pub const OFFSET_FRACTIONS: [Real; 6] = [-0.9, -0.5, 0.0, 0.3, 0.75, 0.99];

pub fn angle_grid(start: u32, step: usize) -> impl Iterator<Item = Real> {
    (start..180).step_by(step).map(|deg| deg as Real)
}

/// Every configuration of the shared grid.
pub fn configuration_grid() -> Vec<Configuration> {
    let mut configs = Vec::new();
    for radius in RADII {
        for fraction in OFFSET_FRACTIONS {
            for angle_ab in angle_grid(0, 7) {
                for angle_cd in angle_grid(3, 11) {
                    configs.push(Configuration::new(radius, radius * fraction, angle_ab, angle_cd));
                }
            }
        }
    }
    configs
}

/// Compute, treating `UndefinedIntersection` as "skip this configuration".
pub fn compute_defined(config: &Configuration) -> Option<ConstructionPoints> {
    match compute(config) {
        Ok(points) => Some(points),
        Err(GeometryError::UndefinedIntersection { .. }) => None,
        Err(err) => panic!("unexpected error for {:?}: {}", config, err),
    }
}
