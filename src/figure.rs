//! Declarative figure model: what a diagnostic plot contains, independent
//! of how it is rendered.
//!
//! The numeric pipeline builds [`Figure`] values; the `app` module turns
//! each one into an interactive plot window. Keeping the description
//! separate from the rendering keeps the analyses testable.

use egui::Color32;

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Scatter,
}

/// One named series inside a figure.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub kind: SeriesKind,
    pub width: f32,
    /// Explicit color; `None` takes the next palette slot.
    pub color: Option<Color32>,
}

impl Series {
    /// A line series with default look.
    pub fn line<S: Into<String>>(name: S, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            points,
            kind: SeriesKind::Line,
            width: 1.5,
            color: None,
        }
    }

    /// A scatter series with default look.
    pub fn scatter<S: Into<String>>(name: S, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            points,
            kind: SeriesKind::Scatter,
            width: 2.0,
            color: None,
        }
    }

    /// Override the palette color.
    pub fn color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    /// Override the stroke width (line) or point radius (scatter).
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Zip equal-length x/y slices into plot points.
    pub fn points_from(xs: &[f64], ys: &[f64]) -> Vec<[f64; 2]> {
        xs.iter().zip(ys).map(|(x, y)| [*x, *y]).collect()
    }

    /// Plot points from values over their sample index.
    pub fn points_over_index(ys: &[f64]) -> Vec<[f64; 2]> {
        ys.iter()
            .enumerate()
            .map(|(i, y)| [i as f64, *y])
            .collect()
    }
}

/// Grid visibility of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridMode {
    #[default]
    Both,
    /// Horizontal grid lines only (`grid(axis='y')` in the original plots).
    YOnly,
    Off,
}

/// A complete plot window description.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Fixed x tick positions; `None` = automatic, empty = no ticks.
    pub x_ticks: Option<Vec<f64>>,
    /// Fixed y tick positions; `None` = automatic, empty = no ticks.
    pub y_ticks: Option<Vec<f64>>,
    pub grid: GridMode,
    pub legend: bool,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            legend: true,
            ..Default::default()
        }
    }

    pub fn x_label<S: Into<String>>(mut self, label: S) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label<S: Into<String>>(mut self, label: S) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn x_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.x_ticks = Some(ticks);
        self
    }

    pub fn y_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.y_ticks = Some(ticks);
        self
    }

    pub fn grid(mut self, grid: GridMode) -> Self {
        self.grid = grid;
        self
    }

    pub fn legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

/// Default trace palette, indexed per series slot.
pub fn palette_color(index: usize) -> Color32 {
    const PALETTE: [Color32; 8] = [
        Color32::from_rgb(0x5d, 0xa5, 0xda), // blue
        Color32::from_rgb(0xfa, 0xa4, 0x3a), // orange
        Color32::from_rgb(0x60, 0xbd, 0x68), // green
        Color32::from_rgb(0xf1, 0x5b, 0x54), // red
        Color32::from_rgb(0xb2, 0x76, 0xb2), // purple
        Color32::from_rgb(0xde, 0xcf, 0x3f), // yellow
        Color32::from_rgb(0x4d, 0x4d, 0x4d), // grey
        Color32::from_rgb(0xb1, 0x9c, 0x7d), // tan
    ];
    PALETTE[index % PALETTE.len()]
}
