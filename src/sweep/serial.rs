//! Serial sweep

use super::{AngleRange, ChordSelector, SweepSample, traits::SweepOps};
use crate::config::Configuration;
use crate::construction::compute;

pub struct SerialSweep;

impl SweepOps for SerialSweep {
    fn sweep(
        &self,
        base: &Configuration,
        chord: ChordSelector,
        range: &AngleRange,
    ) -> Vec<SweepSample> {
        range
            .angles()
            .map(|angle| SweepSample {
                angle,
                result: compute(&chord.apply(*base, angle)),
            })
            .collect()
    }
}
