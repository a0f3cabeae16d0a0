use butterfly::{
    Configuration, ErrorKind,
    float_types::INVARIANT_TOLERANCE,
    sweep::{AngleRange, ChordSelector, SweepOps, max_residual, serial::SerialSweep, sweep_angle},
};

#[test]
fn full_slider_sweep_keeps_invariant() {
    let base = Configuration::default();
    for chord in [ChordSelector::Ab, ChordSelector::Cd] {
        let samples = sweep_angle(&base, chord, &AngleRange::new(0.0, 179.0, 180));
        assert_eq!(samples.len(), 180);
        assert!(samples.iter().all(|s| s.result.is_ok()));
        assert!(max_residual(&samples).unwrap() <= INVARIANT_TOLERANCE);
    }
}

#[test]
fn samples_are_in_angle_order() {
    let samples = sweep_angle(&Configuration::default(), ChordSelector::Ab, &AngleRange::new(170.0, 10.0, 9));
    let angles: Vec<_> = samples.iter().map(|s| s.angle).collect();
    assert_eq!(angles, vec![170.0, 150.0, 130.0, 110.0, 90.0, 70.0, 50.0, 30.0, 10.0]);
    for sample in &samples {
        let points = sample.result.as_ref().unwrap();
        assert!(points.a.y > points.m.y);
    }
}

#[test]
fn invalid_base_fails_every_sample() {
    let base = Configuration::default().with_chord_offset(500.0);
    let samples = SerialSweep.sweep(&base, ChordSelector::Cd, &AngleRange::new(0.0, 90.0, 5));
    assert!(samples.iter().all(|s| matches!(
        s.result.as_ref().map_err(|e| e.kind()),
        Err(ErrorKind::InvalidConfiguration)
    )));
    assert_eq!(max_residual(&samples), None);
}
