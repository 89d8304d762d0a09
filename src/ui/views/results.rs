use crate::QuizApp;
use crate::ui::helpers::{accent, badge_color, band_color, big_list_button};
use crate::ui::layout::{centered_panel, scroll_panel};
use crate::view_models::ResultRow;
use egui::{Context, Frame, Grid, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(card) = app.score_card() else {
        ui_no_results(app, ctx);
        return;
    };
    let rows: Vec<ResultRow> = app.result_rows();
    let mut try_again = false;

    scroll_panel(ctx, 560.0, |ui| {
        let width = ui.available_width();
        ui.heading(RichText::new("🏆 Quiz Results").color(accent()).strong());
        ui.add_space(14.0);

        // Tarjeta de puntuación
        let color = band_color(card.band);
        Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(16, 14))
            .corner_radius(egui::CornerRadius::same(10))
            .show(ui, |ui| {
                ui.set_width(width - 32.0);
                ui.label(RichText::new(&card.quiz_title).strong());
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label("Your Score");
                        ui.label(RichText::new(card.score_label()).heading().strong());
                        ui.label(RichText::new(card.grade_label()).color(color));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        Frame::default()
                            .fill(color.gamma_multiply(0.2))
                            .inner_margin(egui::Margin::symmetric(12, 8))
                            .corner_radius(egui::CornerRadius::same(20))
                            .show(ui, |ui| {
                                let pct = RichText::new(card.percentage_label());
                                ui.label(pct.heading().color(color).strong());
                            });
                    });
                });
            });

        ui.add_space(16.0);
        ui.label(RichText::new("Question Summary").heading());
        ui.add_space(6.0);

        Grid::new("quiz_results_grid")
            .striped(true)
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for r in &rows {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("Question {}", r.number)).strong());
                        ui.label(&r.text);
                        ui.label(format!("Your answer: {}", r.your_answer_label()));
                        if !r.is_correct {
                            ui.label(format!("Correct answer: {}", r.correct_answer));
                        }
                    });
                    ui.label(RichText::new(r.badge()).color(badge_color(r.is_correct)));
                    ui.end_row();
                }
            });

        ui.add_space(18.0);
        try_again = big_list_button(ui, "Try Another Quiz ➡".to_owned(), width, 40.0, true);
    });

    if try_again {
        app.try_again();
    }
}

fn ui_no_results(app: &mut QuizApp, ctx: &Context) {
    let mut take_quiz = false;
    centered_panel(ctx, 200.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("🏆 No Results Yet").color(accent()));
            ui.add_space(10.0);
            ui.label("Complete a quiz to see your results!");
            ui.add_space(18.0);
            take_quiz = big_list_button(ui, "Take a Quiz ➡".to_owned(), 200.0, 40.0, true);
        });
    });
    if take_quiz {
        app.back_to_catalog();
    }
}
