// butterfly_table.rs
//
// Prints XM and MY while chord CD turns through its slider range.
// `RUST_LOG=trace cargo run --example butterfly_table` also shows every evaluation.

use butterfly::{
    Configuration,
    sweep::{AngleRange, ChordSelector, max_residual, sweep_angle},
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let base = Configuration::default();
    log::info!(
        "radius = {}, chord offset = {}, angle AB = {}°",
        base.radius,
        base.chord_offset,
        base.angle_ab
    );

    let samples = sweep_angle(&base, ChordSelector::Cd, &AngleRange::new(0.0, 170.0, 18));

    println!("{:>8} {:>12} {:>12} {:>12}", "CD (°)", "XM", "MY", "residual");
    for sample in &samples {
        match &sample.result {
            Ok(points) => {
                let readouts = points.readouts();
                println!(
                    "{:>8.1} {:>12.4} {:>12.4} {:>12.2e}",
                    sample.angle, readouts.xm, readouts.my, readouts.residual
                );
            },
            Err(err) => println!("{:>8.1} {}", sample.angle, err.kind()),
        }
    }

    match max_residual(&samples) {
        Some(worst) => log::info!("worst relative |XM - MY| over the sweep: {:e}", worst),
        None => log::warn!("no configuration in the sweep could be constructed"),
    }
}
