//! Rendering of one [`Figure`] into an egui plot, plus its export button.

use eframe::egui;
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, Points};

use crate::export;
use crate::figure::{palette_color, Figure, GridMode, SeriesKind};

/// Render the figure body: a small toolbar and the plot itself.
pub(super) fn show(ui: &mut egui::Ui, figure: &Figure) {
    ui.horizontal(|ui| {
        let label = format!("{} Save CSV", egui_phosphor::regular::FLOPPY_DISK);
        if ui
            .button(label)
            .on_hover_text("Export every series of this figure as series,x,y rows")
            .clicked()
        {
            save_figure_csv(figure);
        }
    });
    ui.separator();

    let mut plot = Plot::new(egui::Id::new(("figure_plot", &figure.title)))
        .allow_scroll(false)
        .allow_boxed_zoom(true);

    if figure.legend {
        plot = plot.legend(Legend::default());
    }
    if !figure.x_label.is_empty() {
        plot = plot.x_axis_label(figure.x_label.clone());
    }
    if !figure.y_label.is_empty() {
        plot = plot.y_axis_label(figure.y_label.clone());
    }

    plot = match figure.grid {
        GridMode::Both => plot.show_grid(true),
        GridMode::YOnly => plot.show_grid(egui::Vec2b::new(false, true)),
        GridMode::Off => plot.show_grid(false),
    };

    // Fixed tick positions replace the automatic spacer; an empty list
    // suppresses ticks entirely.
    if let Some(ticks) = figure.x_ticks.clone() {
        plot = plot.x_grid_spacer(move |input| fixed_marks(&ticks, &input));
    }
    if let Some(ticks) = figure.y_ticks.clone() {
        plot = plot.y_grid_spacer(move |input| fixed_marks(&ticks, &input));
    }

    plot.show(ui, |plot_ui| {
        for (idx, series) in figure.series.iter().enumerate() {
            let color = series.color.unwrap_or_else(|| palette_color(idx));
            match series.kind {
                SeriesKind::Line => {
                    let line = Line::new(&series.name, series.points.clone())
                        .color(color)
                        .width(series.width);
                    plot_ui.line(line);
                }
                SeriesKind::Scatter => {
                    let points = Points::new(&series.name, series.points.clone())
                        .color(color)
                        .radius(series.width);
                    plot_ui.points(points);
                }
            }
        }
    });
}

fn fixed_marks(ticks: &[f64], _input: &GridInput) -> Vec<GridMark> {
    let span = match (
        ticks.iter().cloned().reduce(f64::min),
        ticks.iter().cloned().reduce(f64::max),
    ) {
        (Some(lo), Some(hi)) if hi > lo => hi - lo,
        _ => 1.0,
    };
    ticks
        .iter()
        .map(|&value| GridMark {
            value,
            step_size: span,
        })
        .collect()
}

fn save_figure_csv(figure: &Figure) {
    if let Some(path) = rfd::FileDialog::new()
        .set_file_name(export::default_export_name(&figure.title, "csv"))
        .add_filter("CSV", &["csv"])
        .save_file()
    {
        if let Err(e) = export::write_figure_csv(&path, figure) {
            log::error!("failed to export {}: {e}", path.display());
        } else {
            log::info!("figure `{}` exported to {}", figure.title, path.display());
        }
    }
}
