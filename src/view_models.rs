// src/view_models.rs

use crate::model::Band;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardInfo {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub question_count: usize,
}

impl QuizCardInfo {
    pub fn count_label(&self) -> String {
        if self.question_count == 1 {
            "1 Question".to_owned()
        } else {
            format!("{} Questions", self.question_count)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionHeader {
    pub quiz_title: String,
    pub number: usize, // 1-based
    pub total: usize,
    pub progress: f32, // 0.0..=1.0 para la barra
}

impl QuestionHeader {
    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}

/// Cómo se pinta una opción: antes de responder solo importa la selección,
/// después se marca la correcta y, si falló, la elegida.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Incorrect,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionInfo {
    pub index: usize,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreCard {
    pub quiz_title: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub band: Band,
}

impl ScoreCard {
    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }

    pub fn percentage_label(&self) -> String {
        format!("{}%", self.percentage)
    }

    pub fn grade_label(&self) -> String {
        format!("Grade: {}", self.band.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub number: usize,
    pub text: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl ResultRow {
    pub fn your_answer_label(&self) -> &str {
        self.your_answer.as_deref().unwrap_or("Not answered")
    }

    pub fn badge(&self) -> &'static str {
        if self.is_correct { "✔ Correct" } else { "✖ Incorrect" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let card = QuizCardInfo {
            id: 1,
            title: "T".into(),
            description: "D".into(),
            question_count: 5,
        };
        assert_eq!(card.count_label(), "5 Questions");

        let header = QuestionHeader {
            quiz_title: "T".into(),
            number: 2,
            total: 5,
            progress: 0.4,
        };
        assert_eq!(header.position_label(), "Question 2 of 5");

        let row = ResultRow {
            number: 1,
            text: "Q".into(),
            your_answer: None,
            correct_answer: "a".into(),
            is_correct: false,
        };
        assert_eq!(row.your_answer_label(), "Not answered");
        assert_eq!(row.badge(), "✖ Incorrect");

        let card = ScoreCard {
            quiz_title: "T".into(),
            score: 4,
            total: 5,
            percentage: 80,
            band: Band::High,
        };
        assert_eq!(card.score_label(), "4 / 5");
        assert_eq!(card.grade_label(), "Grade: high");
    }
}
