use egui::{Align, Button, CentralPanel, Context, ProgressBar, RichText};
use crate::QuizApp;
use crate::ui::helpers::{accent, option_button};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Sin quiz activo no hay nada que mostrar: de vuelta al catálogo
    app.ensure_active_quiz();
    let prompt = app.current_question().map(|q| q.text.clone());
    let (Some(header), Some(prompt)) = (app.question_header(), prompt) else {
        return;
    };
    let options = app.option_infos();
    let answered = app.session.is_current_answered();
    let can_check = app.can_check_answer();
    let next_label = app.next_button_label();

    let mut picked = None;
    let mut check = false;
    let mut next = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 560.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 20))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    // Cabecera con progreso
                    ui.add(ProgressBar::new(header.progress).desired_width(panel_width));
                    ui.add_space(6.0);
                    ui.label(header.position_label());
                    ui.label(RichText::new(&header.quiz_title).color(accent()).strong());
                    ui.add_space(16.0);

                    ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                        ui.label(RichText::new(&prompt).heading());
                    });
                    ui.add_space(12.0);

                    for info in &options {
                        if option_button(ui, info, panel_width, !answered) {
                            picked = Some(info.index);
                        }
                        ui.add_space(6.0);
                    }

                    ui.add_space(12.0);
                    if !answered {
                        let btn = Button::new("Check Answer").min_size([panel_width, 40.0].into());
                        check = ui.add_enabled(can_check, btn).clicked();
                    } else {
                        let btn = Button::new(format!("{next_label} ➡"))
                            .min_size([panel_width, 40.0].into());
                        next = ui.add(btn).clicked();
                    }

                    ui.add_space(8.0);
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
        });
    });

    if let Some(index) = picked {
        app.choose_option(index);
    }
    if check {
        app.check_answer();
    }
    if next {
        app.next();
    }
}
