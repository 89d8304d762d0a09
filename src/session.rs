use std::sync::Arc;

use crate::model::{Band, Question, Quiz};

/// Estado en memoria de un intento de quiz.
///
/// Solo cambia a través de las cinco transiciones; las precondiciones
/// incumplidas se ignoran sin error (la UI ya oculta esas acciones).
/// "Completo", la puntuación y el porcentaje se calculan bajo demanda.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    active_quiz: Option<Arc<Quiz>>,
    question_pointer: usize,
    pending_selection: Option<usize>,
    // Una entrada por pregunta; vacío cuando no hay quiz activo
    recorded_answers: Vec<Option<usize>>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ----------- Transiciones -----------

    /// Empieza (o reinicia) un quiz. Descarta cualquier intento anterior.
    pub fn start_quiz(&mut self, quiz: Arc<Quiz>) {
        let len = quiz.questions.len();
        self.recorded_answers = vec![None; len];
        self.active_quiz = Some(quiz);
        self.question_pointer = 0;
        self.pending_selection = None;
    }

    pub fn select_option(&mut self, index: usize) {
        let Some(question) = self.current_question() else {
            log::debug!("select_option({index}) ignored: no active quiz");
            return;
        };
        if index >= question.options.len() {
            log::debug!("select_option({index}) ignored: out of range");
            return;
        }
        if self.is_current_answered() {
            log::debug!(
                "select_option({index}) ignored: question {} already answered",
                self.question_pointer
            );
            return;
        }
        self.pending_selection = Some(index);
    }

    pub fn confirm_answer(&mut self) {
        if self.active_quiz.is_none() {
            log::debug!("confirm_answer ignored: no active quiz");
            return;
        }
        let Some(selection) = self.pending_selection else {
            log::debug!("confirm_answer ignored: nothing selected");
            return;
        };
        if let Some(slot) = self.recorded_answers.get_mut(self.question_pointer) {
            *slot = Some(selection);
        }
    }

    pub fn advance_question(&mut self) {
        let Some(quiz) = &self.active_quiz else {
            log::debug!("advance_question ignored: no active quiz");
            return;
        };
        if self.question_pointer >= quiz.last_index() {
            log::debug!("advance_question ignored: already at last question");
            return;
        }
        self.question_pointer += 1;
        self.pending_selection = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ----------- Consultas -----------

    pub fn active_quiz(&self) -> Option<&Arc<Quiz>> {
        self.active_quiz.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.active_quiz.is_none()
    }

    pub fn question_pointer(&self) -> usize {
        self.question_pointer
    }

    pub fn pending_selection(&self) -> Option<usize> {
        self.pending_selection
    }

    pub fn recorded_answer(&self, index: usize) -> Option<usize> {
        self.recorded_answers.get(index).copied().flatten()
    }

    pub fn recorded_answers(&self) -> &[Option<usize>] {
        &self.recorded_answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.active_quiz
            .as_ref()
            .and_then(|q| q.questions.get(self.question_pointer))
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.recorded_answer(index).is_some()
    }

    pub fn is_current_answered(&self) -> bool {
        self.is_answered(self.question_pointer)
    }

    pub fn is_last_question(&self) -> bool {
        self.active_quiz
            .as_ref()
            .is_some_and(|q| self.question_pointer == q.last_index())
    }

    /// En la última pregunta y ya respondida.
    pub fn is_complete(&self) -> bool {
        self.is_last_question() && self.is_current_answered()
    }

    pub fn answered_count(&self) -> usize {
        self.recorded_answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn score(&self) -> usize {
        let Some(quiz) = &self.active_quiz else {
            return 0;
        };
        quiz.questions
            .iter()
            .zip(&self.recorded_answers)
            .filter(|(q, answer)| answer.is_some_and(|a| q.is_correct(a)))
            .count()
    }

    /// `round(100 * score / total)`, redondeando las mitades hacia arriba.
    pub fn percentage(&self) -> u32 {
        let total = self.active_quiz.as_ref().map_or(0, |q| q.questions.len());
        if total == 0 {
            return 0;
        }
        let pct = (200 * self.score() + total) / (2 * total);
        u32::try_from(pct).unwrap_or(100)
    }

    pub fn band(&self) -> Band {
        Band::for_percentage(self.percentage())
    }
}
