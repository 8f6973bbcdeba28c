//! Top-level entry point for showing figures in a native window.
//!
//! [`run_figures`] is what the analysis scripts call once their figures are
//! built. It opens a native window, shows every figure in its own movable
//! sub-window, and blocks until the user closes them.

use eframe::egui;

use crate::figure::Figure;

use super::figure_app::FigureApp;

/// Show the figures in a native window with default options.
///
/// The call blocks until the window is closed.
pub fn run_figures(title: &str, figures: Vec<Figure>) -> eframe::Result<()> {
    run_figures_with_options(title, figures, eframe::NativeOptions::default())
}

/// Show the figures with caller-provided native options.
pub fn run_figures_with_options(
    title: &str,
    figures: Vec<Figure>,
    mut opts: eframe::NativeOptions,
) -> eframe::Result<()> {
    // Set a bigger default window size if one is not provided.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1280.0, 840.0));
    }

    let app = FigureApp::new(figures);
    eframe::run_native(
        title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
