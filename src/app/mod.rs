use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::model::AppState;
use crate::session::QuizSession;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{
    OptionInfo, OptionState, QuestionHeader, QuizCardInfo, ResultRow, ScoreCard,
};

/// Estado completo de la app: catálogo, intento en curso y pantalla actual.
pub struct QuizApp {
    pub catalog: Catalog,
    pub session: QuizSession,
    pub state: AppState,
    pub config: AppConfig,
    pub message: String,
}

impl QuizApp {
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        Self {
            catalog,
            session: QuizSession::new(),
            state: AppState::Catalog,
            config,
            message: String::new(),
        }
    }

    /// Constructor para eframe: aplica el tema configurado antes del primer frame.
    pub fn with_context(
        cc: &eframe::CreationContext<'_>,
        catalog: Catalog,
        config: AppConfig,
    ) -> Self {
        let visuals = if config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);
        Self::new(catalog, config)
    }
}
