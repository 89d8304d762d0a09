// src/ui/helpers.rs
use egui::{Button, Color32, Ui, Vec2};
use crate::model::Band;
use crate::view_models::{OptionInfo, OptionState};

const GREEN: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
const YELLOW: Color32 = Color32::from_rgb(0xea, 0xb3, 0x08);
const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
const INDIGO: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1);

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

pub fn band_color(band: Band) -> Color32 {
    match band {
        Band::High => GREEN,
        Band::Medium => YELLOW,
        Band::Low => RED,
    }
}

pub fn badge_color(is_correct: bool) -> Color32 {
    if is_correct { GREEN } else { RED }
}

pub fn accent() -> Color32 {
    INDIGO
}

/// Botón de opción con el color según su estado. Devuelve true si se pulsó.
/// Una vez respondida la pregunta se pinta deshabilitado.
pub fn option_button(ui: &mut Ui, info: &OptionInfo, width: f32, enabled: bool) -> bool {
    let (fill, marker) = match info.state {
        OptionState::Idle => (None, ""),
        OptionState::Selected => (Some(INDIGO.gamma_multiply(0.35)), ""),
        OptionState::Correct => (Some(GREEN.gamma_multiply(0.35)), "  ✔"),
        OptionState::Incorrect => (Some(RED.gamma_multiply(0.35)), "  ✖"),
        OptionState::Neutral => (None, ""),
    };

    let mut button = Button::new(format!("{}{marker}", info.text)).min_size(Vec2::new(width, 44.0));
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    ui.add_enabled(enabled, button).clicked()
}
