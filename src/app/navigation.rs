use super::*;

impl QuizApp {
    /// Pulsar una tarjeta del catálogo: empieza el quiz y pasa a la pantalla de preguntas.
    /// Un id desconocido no cambia nada.
    pub fn start_quiz_by_id(&mut self, quiz_id: u32) {
        let Some(quiz) = self.catalog.find_quiz(quiz_id) else {
            log::warn!("quiz {quiz_id} not found in catalog");
            return;
        };
        log::info!("starting quiz {} ({})", quiz.id, quiz.title);
        self.session.start_quiz(quiz);
        self.message.clear();
        self.navigate(AppState::Quiz);
    }

    /// Resultados del intento actual; sin quiz activo la vista muestra "No Results Yet".
    pub fn open_results(&mut self) {
        self.message.clear();
        self.navigate(AppState::Results);
    }

    /// Vuelve al catálogo sin tocar la sesión.
    pub fn back_to_catalog(&mut self) {
        self.message.clear();
        self.navigate(AppState::Catalog);
    }

    /// La pantalla de preguntas sin quiz activo no tiene nada que mostrar.
    pub fn ensure_active_quiz(&mut self) {
        if self.state == AppState::Quiz && self.session.is_idle() {
            log::debug!("no active quiz, redirecting to catalog");
            self.navigate(AppState::Catalog);
        }
    }

    pub(crate) fn navigate(&mut self, to: AppState) {
        if self.state != to {
            log::info!("navigate {:?} -> {:?}", self.state, to);
        }
        self.state = to;
    }
}
