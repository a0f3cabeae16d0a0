//! Recompute the construction while one chord angle moves through a range.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use traits::SweepOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialSweep;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSweep;

use crate::config::Configuration;
use crate::construction::ConstructionPoints;
use crate::errors::GeometryError;
use crate::float_types::Real;

/// Which movable chord a sweep rotates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordSelector {
    Ab,
    Cd,
}

/// `steps` evenly spaced angles (degrees) from `start` to `end`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    pub start: Real,
    pub end: Real,
    pub steps: usize,
}

impl AngleRange {
    pub const fn new(start: Real, end: Real, steps: usize) -> Self {
        Self { start, end, steps }
    }

    /// The angle of sample `index`. A single-step range yields `start`.
    pub fn angle_at(&self, index: usize) -> Real {
        if self.steps <= 1 {
            return self.start;
        }
        let t = index as Real / (self.steps - 1) as Real;
        self.start + t * (self.end - self.start)
    }

    pub fn angles(&self) -> impl Iterator<Item = Real> + '_ {
        (0..self.steps).map(|i| self.angle_at(i))
    }
}

/// One evaluated step of a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSample {
    pub angle: Real,
    pub result: Result<ConstructionPoints, GeometryError>,
}

impl ChordSelector {
    /// `base` with the selected chord turned to `angle` degrees.
    pub const fn apply(self, base: Configuration, angle: Real) -> Configuration {
        match self {
            ChordSelector::Ab => base.with_angles(angle, base.angle_cd),
            ChordSelector::Cd => base.with_angles(base.angle_ab, angle),
        }
    }
}

/// Sweep with the default strategy for the enabled features.
pub fn sweep_angle(
    base: &Configuration,
    chord: ChordSelector,
    range: &AngleRange,
) -> Vec<SweepSample> {
    #[cfg(not(feature = "parallel"))]
    let ops = SerialSweep;
    #[cfg(feature = "parallel")]
    let ops = ParallelSweep;

    ops.sweep(base, chord, range)
}

/// Worst invariant residual among the successful samples, `None` if none succeeded.
pub fn max_residual(samples: &[SweepSample]) -> Option<Real> {
    samples
        .iter()
        .filter_map(|sample| sample.result.as_ref().ok())
        .map(ConstructionPoints::invariant_residual)
        .reduce(Real::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        let range = AngleRange::new(10.0, 20.0, 3);
        let angles: Vec<Real> = range.angles().collect();
        assert_eq!(angles, vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn degenerate_ranges() {
        assert_eq!(AngleRange::new(5.0, 9.0, 0).angles().count(), 0);
        assert_eq!(AngleRange::new(5.0, 9.0, 1).angles().collect::<Vec<_>>(), vec![5.0]);
    }

    #[test]
    fn selector_only_touches_one_angle() {
        let base = Configuration::default();
        let turned = ChordSelector::Cd.apply(base, 33.0);
        assert_eq!((turned.angle_ab, turned.angle_cd), (60.0, 33.0));
        let turned = ChordSelector::Ab.apply(base, 33.0);
        assert_eq!((turned.angle_ab, turned.angle_cd), (33.0, 120.0));
    }

    #[test]
    fn errors_do_not_abort_sweep() {
        let base = Configuration::default().with_angles(0.0, 90.0);
        let samples = sweep_angle(&base, ChordSelector::Cd, &AngleRange::new(0.0, 90.0, 4));
        assert_eq!(samples.len(), 4);
        assert!(samples[0].result.is_err());
        assert!(samples[1..].iter().all(|s| s.result.is_ok()));
        assert!(max_residual(&samples).unwrap() <= crate::float_types::INVARIANT_TOLERANCE);
    }
}
