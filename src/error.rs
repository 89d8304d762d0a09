use thiserror::Error;

/// Fallos al cargar o validar el banco de quizzes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("could not parse quiz catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("quiz catalog is empty")]
    Empty,

    #[error("duplicate quiz id {id}")]
    DuplicateQuizId { id: u32 },

    #[error("quiz {quiz_id} has no questions")]
    EmptyQuiz { quiz_id: u32 },

    #[error("quiz {quiz_id} repeats question id {question_id}")]
    DuplicateQuestionId { quiz_id: u32, question_id: u32 },

    #[error("question {question_id} of quiz {quiz_id} has no options")]
    NoOptions { quiz_id: u32, question_id: u32 },

    #[error(
        "question {question_id} of quiz {quiz_id} marks option {correct_answer} as correct but only has {options}"
    )]
    AnswerOutOfRange {
        quiz_id: u32,
        question_id: u32,
        correct_answer: usize,
        options: usize,
    },
}
