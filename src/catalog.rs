use std::collections::HashSet;
use std::sync::Arc;

use crate::data::read_quizzes_embedded;
use crate::error::CatalogError;
use crate::model::Quiz;

/// Conjunto fijo y de solo lectura de quizzes disponibles.
///
/// El orden de `list_quizzes` es el del YAML y no cambia entre llamadas.
#[derive(Debug, Clone)]
pub struct Catalog {
    quizzes: Vec<Arc<Quiz>>,
}

impl Catalog {
    /// Catálogo embebido en el binario, ya validado.
    pub fn embedded() -> Result<Self, CatalogError> {
        let catalog = Self::from_quizzes(read_quizzes_embedded()?)?;
        log::info!("loaded catalog with {} quizzes", catalog.quizzes.len());
        Ok(catalog)
    }

    pub fn from_quizzes(quizzes: Vec<Quiz>) -> Result<Self, CatalogError> {
        validate(&quizzes)?;
        Ok(Self {
            quizzes: quizzes.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn list_quizzes(&self) -> &[Arc<Quiz>] {
        &self.quizzes
    }

    pub fn find_quiz(&self, id: u32) -> Option<Arc<Quiz>> {
        self.quizzes.iter().find(|q| q.id == id).cloned()
    }
}

fn validate(quizzes: &[Quiz]) -> Result<(), CatalogError> {
    if quizzes.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut quiz_ids = HashSet::new();
    for quiz in quizzes {
        if !quiz_ids.insert(quiz.id) {
            return Err(CatalogError::DuplicateQuizId { id: quiz.id });
        }
        if quiz.questions.is_empty() {
            return Err(CatalogError::EmptyQuiz { quiz_id: quiz.id });
        }

        let mut question_ids = HashSet::new();
        for q in &quiz.questions {
            if !question_ids.insert(q.id) {
                return Err(CatalogError::DuplicateQuestionId {
                    quiz_id: quiz.id,
                    question_id: q.id,
                });
            }
            if q.options.is_empty() {
                return Err(CatalogError::NoOptions {
                    quiz_id: quiz.id,
                    question_id: q.id,
                });
            }
            if q.correct_answer >= q.options.len() {
                return Err(CatalogError::AnswerOutOfRange {
                    quiz_id: quiz.id,
                    question_id: q.id,
                    correct_answer: q.correct_answer,
                    options: q.options.len(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn question(id: u32, options: usize, correct_answer: usize) -> Question {
        Question {
            id,
            text: format!("Q{id}"),
            options: (0..options).map(|i| format!("opt {i}")).collect(),
            correct_answer,
        }
    }

    fn quiz(id: u32, questions: Vec<Question>) -> Quiz {
        Quiz {
            id,
            title: format!("Quiz {id}"),
            description: String::new(),
            questions,
        }
    }

    #[test]
    fn every_bundled_answer_is_in_bounds() {
        let catalog = Catalog::embedded().expect("bundled catalog is valid");
        for quiz in catalog.list_quizzes() {
            assert!(!quiz.questions.is_empty());
            for q in &quiz.questions {
                assert!(q.correct_answer < q.options.len(), "quiz {} q {}", quiz.id, q.id);
            }
        }
    }

    #[test]
    fn list_order_is_stable() {
        let catalog = Catalog::embedded().unwrap();
        let first: Vec<u32> = catalog.list_quizzes().iter().map(|q| q.id).collect();
        let second: Vec<u32> = catalog.list_quizzes().iter().map(|q| q.id).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn find_quiz_by_id() {
        let catalog = Catalog::embedded().unwrap();
        let quiz = catalog.find_quiz(2).expect("quiz 2 exists");
        assert_eq!(quiz.title, "React Native Basics");
        let answers: Vec<usize> = quiz.questions.iter().map(|q| q.correct_answer).collect();
        assert_eq!(answers, vec![2, 1, 1, 2, 1]);
        assert!(catalog.find_quiz(99).is_none());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(
            Catalog::from_quizzes(vec![]),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn rejects_duplicate_quiz_ids() {
        let quizzes = vec![quiz(1, vec![question(1, 2, 0)]), quiz(1, vec![question(1, 2, 0)])];
        assert!(matches!(
            Catalog::from_quizzes(quizzes),
            Err(CatalogError::DuplicateQuizId { id: 1 })
        ));
    }

    #[test]
    fn rejects_quiz_without_questions() {
        assert!(matches!(
            Catalog::from_quizzes(vec![quiz(3, vec![])]),
            Err(CatalogError::EmptyQuiz { quiz_id: 3 })
        ));
    }

    #[test]
    fn rejects_duplicate_question_ids() {
        let quizzes = vec![quiz(1, vec![question(4, 2, 0), question(4, 2, 1)])];
        assert!(matches!(
            Catalog::from_quizzes(quizzes),
            Err(CatalogError::DuplicateQuestionId { quiz_id: 1, question_id: 4 })
        ));
    }

    #[test]
    fn rejects_question_without_options() {
        let quizzes = vec![quiz(1, vec![question(1, 0, 0)])];
        assert!(matches!(
            Catalog::from_quizzes(quizzes),
            Err(CatalogError::NoOptions { quiz_id: 1, question_id: 1 })
        ));
    }

    #[test]
    fn rejects_answer_out_of_range() {
        let quizzes = vec![quiz(1, vec![question(1, 3, 3)])];
        assert!(matches!(
            Catalog::from_quizzes(quizzes),
            Err(CatalogError::AnswerOutOfRange { correct_answer: 3, options: 3, .. })
        ));
    }
}
