//! Standalone plot of the ACS712 transfer function with output clamping.
//!
//! What it does
//! - Samples the ideal and the clamped transfer curve of the default
//!   ACS712-05B model over its full-scale input current range.
//! - Logs the linear input range and the largest sinusoidal RMS current
//!   that stays inside it.
//!
//! How to run
//! ```bash
//! RUST_LOG=info cargo run --example saturation_curve
//! ```

use scopefit::figure::{Figure, Series};
use scopefit::{run_figures, Acs712};

const CURRENT_STEP_A: f64 = 0.1;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let sensor = Acs712::default();

    let (lo, hi) = sensor.linear_current_range();
    log::info!(
        "linear range {:.3} A .. {:.3} A, max sinusoidal RMS {:.3} A",
        lo,
        hi,
        sensor.max_linear_rms()
    );

    let figure = Figure::new("ACS712-05B transfer function")
        .x_label("Input current [A]")
        .y_label("Sensor output [V]")
        .series(Series::line(
            "ideal transfer",
            sensor.transfer_curve(CURRENT_STEP_A),
        ))
        .series(Series::line(
            "with output clamp",
            sensor.saturated_curve(CURRENT_STEP_A),
        ));

    run_figures("ACS712 saturation curve", vec![figure]).map_err(|e| anyhow::anyhow!("{e}"))
}
