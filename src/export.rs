//! Export of figure data and fit summaries to files.
//!
//! CSV rows are written long-form (`series,x,y`), one row per point, so the
//! output opens cleanly in any tabular tool regardless of how many series a
//! figure holds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::fit::LineFit;
use crate::figure::Figure;

/// Serializable summary of one acquisition analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    /// The CH1 export the acquisition was loaded from.
    pub base_file: String,
    /// Best alignment offset, in samples.
    pub offset: i64,
    /// Fit at the best offset, in physical units.
    pub fit: LineFit,
    /// Sum of squared covariance entries at the best offset.
    pub covariance_score: f64,
}

/// `<stem>_<local timestamp>.<ext>`, for save-dialog defaults.
pub fn default_export_name(stem: &str, ext: &str) -> String {
    let slug: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!(
        "{}_{}.{}",
        slug.trim_matches('_'),
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        ext
    )
}

/// Write every series of a figure as `series,x,y` rows.
pub fn write_figure_csv<P: AsRef<Path>>(path: P, figure: &Figure) -> std::io::Result<()> {
    use std::io::Write;
    let mut f = std::fs::File::create(path)?;
    writeln!(f, "series,x,y")?;
    for series in &figure.series {
        for p in &series.points {
            writeln!(f, "{},{:.9},{:.9}", series.name, p[0], p[1])?;
        }
    }
    Ok(())
}

/// Write a fit report as pretty-printed JSON.
pub fn write_fit_report_json<P: AsRef<Path>>(
    path: P,
    report: &FitReport,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = serde_json::to_string_pretty(report)?;
    std::fs::write(path, text)?;
    Ok(())
}
