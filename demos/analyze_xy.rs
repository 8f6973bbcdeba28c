//! Analysis: XY saturation fit of the ACS712 current sensor.
//!
//! What it does
//! - Loads CH1 (voltage across the resistive load) and CH2 (sensor output
//!   behind a divider) for every configured run, plus CH3 for metadata
//!   completeness.
//! - Sweeps an integer sample-offset range, scoring each candidate by the
//!   total squared covariance of a CH1-vs-CH2 line fit, and keeps the best.
//! - Rescales both channels to physical units (amps in, sensor volts out),
//!   refits, and shows the XY figure (measured response, ideal gain,
//!   fitted line) plus the time-series overlay.
//!
//! How to run
//! ```bash
//! RUST_LOG=info cargo run --example analyze_xy
//! ```
//! Expects Tektronix run folders under `DATA/` (`ALL0040/F0040CH1.CSV`,
//! ...); run range and bench constants come from `bench.yaml` when present,
//! otherwise from the built-in defaults.

use std::path::Path;

use anyhow::Context;

use scopefit::export::FitReport;
use scopefit::figure::{Figure, GridMode, Series};
use scopefit::{
    best_offset_by_fit, fit_line, overlap, persistence, run_csv_path, run_figures, Acquisition,
    BenchConfig,
};

// Measured plateaus and saturation currents of this board, marked as fixed
// axis ticks on the figures.
const XY_Y_TICKS: [f64; 3] = [0.37, 2.5, 4.76];
const XY_X_TICKS: [f64; 3] = [-11.7, 0.0, 12.20];
const YT_Y_TICKS: [f64; 5] = [-15.0, -11.7, 0.0, 12.2, 15.0];

// Set to Some("fit_report.json") to also write the last run's fit summary.
const REPORT_PATH: Option<&str> = None;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cfg = persistence::load_config_or_default("bench.yaml")?;

    let mut figures = Vec::new();
    for run in cfg.runs() {
        let base = run_csv_path(&cfg.data_root, run, 1);
        let (figs, report) = analyze_acquisition(run, &base, &cfg)
            .with_context(|| format!("analyzing {}", base.display()))?;

        log::info!(
            "run {run}: offset {} samples, gain {:.4} V/A, offset voltage {:.4} V (score {:.3e})",
            report.offset,
            report.fit.slope,
            report.fit.intercept,
            report.covariance_score
        );
        if let Some(path) = REPORT_PATH {
            scopefit::export::write_fit_report_json(path, &report)
                .map_err(|e| anyhow::anyhow!("writing {path}: {e}"))?;
        }
        figures.extend(figs);
    }

    run_figures("ACS712 saturation analysis", figures).map_err(|e| anyhow::anyhow!("{e}"))
}

fn analyze_acquisition(
    run: u32,
    base: &Path,
    cfg: &BenchConfig,
) -> anyhow::Result<(Vec<Figure>, FitReport)> {
    let acq = Acquisition::load(base, cfg.channel_count, cfg.normalization)?;
    let ch1 = acq.channel(0);
    let ch2 = acq.channel(1);

    // Alignment is searched on the normalized traces, before any physical
    // rescaling, so the score is comparable between runs.
    let align = best_offset_by_fit(ch1.normalized(), ch2.normalized(), cfg.offset_sweep())?;

    let sensor = &cfg.sensor;
    let amps: Vec<f64> = ch1
        .normalized()
        .iter()
        .map(|v| v / cfg.load_ohms)
        .collect();
    let volts: Vec<f64> = ch2
        .normalized()
        .iter()
        .map(|v| v * cfg.divider_ratio + sensor.offset())
        .collect();
    let (ax, vy) = overlap(&amps, &volts, align.offset)?;
    let fit = fit_line(ax, vy)?;

    // Reference lines span the current the sensor could ideally indicate.
    let reach = sensor.offset() / sensor.sensitivity;
    let ideal = vec![
        [-reach, sensor.output_ideal(-reach)],
        [reach, sensor.output_ideal(reach)],
    ];
    let fitted = vec![[-reach, fit.eval(-reach)], [reach, fit.eval(reach)]];

    let xy = Figure::new(format!("ACS712-05B saturation XY (run {run})"))
        .x_label(format!("Load current [A] across {:.2} Ω", cfg.load_ohms))
        .y_label("Sensor output [V]")
        .x_ticks(XY_X_TICKS.to_vec())
        .y_ticks(XY_Y_TICKS.to_vec())
        .series(Series::scatter("sensor response", Series::points_from(ax, vy)).width(1.0))
        .series(Series::line("ideal gain", ideal))
        .series(Series::line(
            format!("fit {:.3}·x {:+.3}", fit.slope, fit.intercept),
            fitted,
        ));

    // Time-series overlay: sensor output converted to the input current it
    // indicates, against the current actually drawn by the load.
    let indicated: Vec<f64> = ch2
        .normalized()
        .iter()
        .map(|v| v * cfg.divider_ratio / sensor.sensitivity)
        .collect();
    let yt = Figure::new(format!("ACS712-05B saturation over time (run {run})"))
        .y_label("Current [A]")
        .x_ticks(Vec::new())
        .y_ticks(YT_Y_TICKS.to_vec())
        .grid(GridMode::YOnly)
        .series(Series::line(
            "indicated current (sensor)",
            Series::points_over_index(&indicated),
        ))
        .series(Series::line(
            format!("load current across {:.2} Ω", cfg.load_ohms),
            Series::points_over_index(&amps),
        ));

    let report = FitReport {
        base_file: base.display().to_string(),
        offset: align.offset,
        fit,
        covariance_score: align.score,
    };
    Ok((vec![xy, yt], report))
}
