use super::*;

impl QuizApp {
    pub fn choose_option(&mut self, index: usize) {
        if self.session.is_current_answered() {
            return;
        }
        self.session.select_option(index);
    }

    /// "Check Answer": registra la selección y deja el mensaje de feedback.
    pub fn check_answer(&mut self) {
        if self.session.pending_selection().is_none() {
            self.message = "⚠ Select an option first.".into();
            return;
        }
        self.session.confirm_answer();

        let pointer = self.session.question_pointer();
        let recorded = self.session.recorded_answer(pointer);
        let correct = match (self.session.current_question(), recorded) {
            (Some(q), Some(answer)) => q.is_correct(answer),
            _ => return,
        };
        self.message = if correct {
            "✅ Correct!".into()
        } else {
            "❌ Incorrect".into()
        };
    }

    /// "Next Question" / "See Results": en la última pregunta se va a resultados.
    pub fn next(&mut self) {
        if self.session.is_idle() {
            return;
        }
        if self.session.is_last_question() {
            self.open_results();
        } else {
            self.session.advance_question();
            self.message.clear();
        }
    }
}
