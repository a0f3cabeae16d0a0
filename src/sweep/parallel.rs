//! Parallel sweep using rayon

use super::{AngleRange, ChordSelector, SweepSample, traits::SweepOps};
use crate::config::Configuration;
use crate::construction::compute;
use rayon::prelude::*;

pub struct ParallelSweep;

impl SweepOps for ParallelSweep {
    fn sweep(
        &self,
        base: &Configuration,
        chord: ChordSelector,
        range: &AngleRange,
    ) -> Vec<SweepSample> {
        // Indexed iteration keeps the output in angle order
        (0..range.steps)
            .into_par_iter()
            .map(|i| {
                let angle = range.angle_at(i);
                SweepSample {
                    angle,
                    result: compute(&chord.apply(*base, angle)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::serial::SerialSweep;

    #[test]
    fn matches_serial_sweep() {
        let base = Configuration::default();
        let range = AngleRange::new(1.0, 179.0, 64);
        let serial = SerialSweep.sweep(&base, ChordSelector::Ab, &range);
        let parallel = ParallelSweep.sweep(&base, ChordSelector::Ab, &range);
        assert_eq!(serial, parallel);
    }
}
