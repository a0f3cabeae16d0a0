//! Traits defining sweep strategies

use super::{AngleRange, ChordSelector, SweepSample};
use crate::config::Configuration;

pub trait SweepOps {
    /// Evaluate the construction at every angle of `range`, in order.
    fn sweep(
        &self,
        base: &Configuration,
        chord: ChordSelector,
        range: &AngleRange,
    ) -> Vec<SweepSample>;
}
