//! Analysis: time-align CH1 and CH2 by their mean pointwise product and
//! overlay the aligned traces.
//!
//! What it does
//! - Loads the CH1/CH2 pair of every configured run.
//! - Searches shifts in `-max_shift..=max_shift` for the one maximizing the
//!   mean pointwise product of the overlapping regions (each candidate is
//!   logged at debug level).
//! - Shows the aligned normalized traces over the sample index.
//!
//! How to run
//! ```bash
//! RUST_LOG=debug cargo run --example align_overlay
//! ```

use anyhow::Context;

use scopefit::figure::{Figure, Series};
use scopefit::{
    best_offset_by_product, overlap, persistence, run_csv_path, run_figures, Acquisition,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cfg = persistence::load_config_or_default("bench.yaml")?;

    let mut figures = Vec::new();
    for run in cfg.runs() {
        let base = run_csv_path(&cfg.data_root, run, 1);
        let acq = Acquisition::load(&base, 2, cfg.normalization)
            .with_context(|| format!("loading {}", base.display()))?;
        let ch1 = acq.channel(0);
        let ch2 = acq.channel(1);

        let align = best_offset_by_product(ch1.normalized(), ch2.normalized(), cfg.max_shift)?;
        log::info!(
            "run {run}: best offset {} samples (mean product {:.4e})",
            align.offset,
            align.score
        );

        let (a, b) = overlap(ch1.normalized(), ch2.normalized(), align.offset)?;
        figures.push(
            Figure::new(format!("Aligned channels (run {run})"))
                .x_label("Sample")
                .y_label("Normalized amplitude")
                .series(Series::line("CH1", Series::points_over_index(a)))
                .series(Series::line(
                    format!("CH2, shifted {} samples", align.offset),
                    Series::points_over_index(b),
                )),
        );
    }

    run_figures("Channel alignment", figures).map_err(|e| anyhow::anyhow!("{e}"))
}
