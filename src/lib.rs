//! ScopeFit crate root: re-exports and module wiring.
//!
//! This crate post-processes Tektronix oscilloscope CSV exports and renders
//! diagnostic figures in interactive windows:
//! - `data`: capture loading, channel metadata, alignment, line fitting,
//!   and the ACS712 saturation model
//! - `figure`: declarative description of a plot window
//! - `app`: egui/eframe viewer showing one window per figure
//! - `config` / `persistence`: bench constants and their YAML/JSON override
//! - `export`: CSV/JSON export of figure data and fit summaries
//!
//! The runnable analyses live under `demos/` as example targets.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod figure;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_figures, run_figures_with_options, FigureApp};
pub use config::BenchConfig;
pub use data::acquisition::{run_csv_path, sibling_channel_path, Acquisition};
pub use data::align::{
    best_offset_by_fit, best_offset_by_product, overlap, FitAlignment, ProductAlignment,
};
pub use data::channel::{Channel, Normalization, TekMeta};
pub use data::fit::{fit_line, linear, LineFit};
pub use data::saturation::{saturate, Acs712};
pub use error::ScopeError;
pub use export::FitReport;
pub use figure::{Figure, GridMode, Series, SeriesKind};
