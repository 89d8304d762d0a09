use super::*;
use crate::model::{Question, Quiz};
use std::sync::Arc;

impl QuizApp {
    pub fn quizzes(&self) -> &[Arc<Quiz>] {
        self.catalog.list_quizzes()
    }

    pub fn current_quiz(&self) -> Option<&Arc<Quiz>> {
        self.session.active_quiz()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    /// Hay algo seleccionado y la pregunta aún no está respondida
    pub fn can_check_answer(&self) -> bool {
        !self.session.is_current_answered() && self.session.pending_selection().is_some()
    }

    /// Pestañas Quizzes/Results: visibles fuera de la pantalla de preguntas
    pub fn shows_tab_bar(&self) -> bool {
        self.state != AppState::Quiz
    }

    pub fn next_button_label(&self) -> &'static str {
        if self.session.is_last_question() {
            "See Results"
        } else {
            "Next Question"
        }
    }
}
