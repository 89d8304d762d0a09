use egui::{Context, Frame, RichText};
use crate::QuizApp;
use crate::ui::helpers::{accent, big_list_button};
use crate::ui::layout::scroll_panel;
use crate::view_models::QuizCardInfo;

pub fn ui_catalog(app: &mut QuizApp, ctx: &Context) {
    let cards: Vec<QuizCardInfo> = app.quiz_cards();
    let mut chosen = None;

    scroll_panel(ctx, 520.0, |ui| {
        ui.heading(RichText::new("🧠 Available Quizzes").color(accent()).strong());
        ui.add_space(6.0);
        ui.label("Choose a quiz to test your knowledge");
        ui.add_space(18.0);

        let card_w = ui.available_width();
        for card in &cards {
            Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(14, 12))
                .corner_radius(egui::CornerRadius::same(10))
                .show(ui, |ui| {
                    ui.set_width(card_w - 28.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&card.title).heading().strong());
                        ui.label(&card.description);
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(card.count_label()).color(accent()));
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if big_list_button(ui, "Start ➡".to_owned(), 96.0, 30.0, true) {
                                    chosen = Some(card.id);
                                }
                            });
                        });
                    });
                });
            ui.add_space(10.0);
        }
    });

    // Se aplica fuera del panel para no mutar la app mientras se pinta
    if let Some(id) = chosen {
        app.start_quiz_by_id(id);
    }
}
