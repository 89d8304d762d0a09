use super::*;

impl QuizApp {
    /// "Try Another Quiz": borra el intento y vuelve al catálogo.
    pub fn try_again(&mut self) {
        self.session.reset();
        self.message.clear();
        self.navigate(AppState::Catalog);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use crate::model::AppState;
    use crate::session::QuizSession;

    #[test]
    fn try_again_resets_and_returns_to_catalog() {
        let mut app = app();
        app.start_quiz_by_id(1);
        app.choose_option(1);
        app.check_answer();
        app.try_again();
        assert_eq!(app.state, AppState::Catalog);
        assert_eq!(app.session, QuizSession::default());
        assert!(app.message.is_empty());
    }
}
