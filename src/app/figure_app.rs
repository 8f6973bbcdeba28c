//! The figure viewer application: one movable egui window per figure.

use eframe::egui;

use crate::figure::Figure;

use super::figure_window;

/// Shows a batch of [`Figure`]s, each in its own window, until the user
/// closes them. Closing every figure closes the application, matching the
/// show-then-exit flow of a batch analysis.
pub struct FigureApp {
    figures: Vec<FigureState>,
}

struct FigureState {
    figure: Figure,
    open: bool,
}

impl FigureApp {
    pub fn new(figures: Vec<Figure>) -> Self {
        Self {
            figures: figures
                .into_iter()
                .map(|figure| FigureState { figure, open: true })
                .collect(),
        }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label("Figures:");
                for st in &mut self.figures {
                    ui.toggle_value(&mut st.open, &st.figure.title);
                }
            });
        });

        for (idx, st) in self.figures.iter_mut().enumerate() {
            if !st.open {
                continue;
            }
            egui::Window::new(&st.figure.title)
                .id(egui::Id::new(("figure", idx)))
                .open(&mut st.open)
                .default_size(egui::vec2(760.0, 480.0))
                .default_pos(egui::pos2(40.0 + 32.0 * idx as f32, 60.0 + 32.0 * idx as f32))
                .show(ctx, |ui| {
                    figure_window::show(ui, &st.figure);
                });
        }

        if self.figures.iter().all(|st| !st.open) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
