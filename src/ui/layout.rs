use egui::{CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};
use crate::QuizApp;
use crate::model::AppState;

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // ----------- PESTAÑAS (no se muestran durante el quiz) -----------
            if app.shows_tab_bar() {
                let on_catalog = app.state == AppState::Catalog;
                if ui.selectable_label(on_catalog, "🧠 Quizzes").clicked() && !on_catalog {
                    app.back_to_catalog();
                }
                let on_results = app.state == AppState::Results;
                if ui.selectable_label(on_results, "🏆 Results").clicked() && !on_results {
                    app.open_results();
                }
            }

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui.button("🌙 Dark mode").clicked() {
                        ctx.set_visuals(Visuals::dark());
                        app.config.dark_mode = true;
                    }
                    if ui.button("☀ Light mode").clicked() {
                        ctx.set_visuals(Visuals::light());
                        app.config.dark_mode = false;
                    }
                }
            );
        });
    });
}

/// Panel centrado vertical y horizontalmente, con ancho máximo.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll para pantallas largas (catálogo, resultados).
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 20))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width().min(max_width));
                            inner(ui);
                        });
                });
            });
    });
}
