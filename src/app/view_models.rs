use super::*;

impl QuizApp {
    pub fn quiz_cards(&self) -> Vec<QuizCardInfo> {
        self.catalog
            .list_quizzes()
            .iter()
            .map(|q| QuizCardInfo {
                id: q.id,
                title: q.title.clone(),
                description: q.description.clone(),
                question_count: q.questions.len(),
            })
            .collect()
    }

    pub fn question_header(&self) -> Option<QuestionHeader> {
        let quiz = self.session.active_quiz()?;
        let total = quiz.questions.len();
        let number = self.session.question_pointer() + 1;
        Some(QuestionHeader {
            quiz_title: quiz.title.clone(),
            number,
            total,
            progress: number as f32 / total.max(1) as f32,
        })
    }

    pub fn option_infos(&self) -> Vec<OptionInfo> {
        let Some(question) = self.session.current_question() else {
            return Vec::new();
        };
        let recorded = self.session.recorded_answer(self.session.question_pointer());
        let pending = self.session.pending_selection();

        question
            .options
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let state = match recorded {
                    None if pending == Some(index) => OptionState::Selected,
                    None => OptionState::Idle,
                    Some(_) if question.is_correct(index) => OptionState::Correct,
                    Some(answer) if answer == index => OptionState::Incorrect,
                    Some(_) => OptionState::Neutral,
                };
                OptionInfo {
                    index,
                    text: text.clone(),
                    state,
                }
            })
            .collect()
    }

    pub fn score_card(&self) -> Option<ScoreCard> {
        let quiz = self.session.active_quiz()?;
        Some(ScoreCard {
            quiz_title: quiz.title.clone(),
            score: self.session.score(),
            total: quiz.questions.len(),
            percentage: self.session.percentage(),
            band: self.session.band(),
        })
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        let Some(quiz) = self.session.active_quiz() else {
            return Vec::new();
        };
        quiz.questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let answer = self.session.recorded_answer(i);
                ResultRow {
                    number: i + 1,
                    text: q.text.clone(),
                    your_answer: answer.and_then(|a| q.option_text(a)).map(str::to_owned),
                    correct_answer: q.option_text(q.correct_answer).unwrap_or_default().to_owned(),
                    is_correct: answer.is_some_and(|a| q.is_correct(a)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app;
    use crate::model::Band;

    #[test]
    fn cards_follow_catalog_order() {
        let app = app();
        let cards = app.quiz_cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "JavaScript Fundamentals");
        assert_eq!(cards[0].count_label(), "5 Questions");
        assert_eq!(cards[1].id, 2);
    }

    #[test]
    fn header_tracks_position() {
        let mut app = app();
        assert!(app.question_header().is_none());
        app.start_quiz_by_id(1);
        app.next();
        let header = app.question_header().unwrap();
        assert_eq!(header.position_label(), "Question 2 of 5");
        assert!((header.progress - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn option_states_before_and_after_answer() {
        let mut app = app();
        app.start_quiz_by_id(1);
        app.choose_option(2);
        let states: Vec<OptionState> = app.option_infos().iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            vec![OptionState::Idle, OptionState::Idle, OptionState::Selected, OptionState::Idle]
        );

        app.check_answer();
        let states: Vec<OptionState> = app.option_infos().iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            vec![
                OptionState::Neutral,
                OptionState::Correct,
                OptionState::Incorrect,
                OptionState::Neutral
            ]
        );
    }

    #[test]
    fn results_mark_unanswered_questions() {
        let mut app = app();
        app.start_quiz_by_id(1);
        app.choose_option(1);
        app.check_answer();
        app.next();
        app.next();

        let rows = app.result_rows();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].is_correct);
        assert_eq!(rows[0].your_answer_label(), "object");
        assert!(!rows[1].is_correct);
        assert_eq!(rows[1].your_answer_label(), "Not answered");
        assert_eq!(rows[1].correct_answer, "pop()");

        let card = app.score_card().unwrap();
        assert_eq!(card.score_label(), "1 / 5");
        assert_eq!(card.percentage_label(), "20%");
        assert_eq!(card.band, Band::Low);
    }
}
