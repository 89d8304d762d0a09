// src/data.rs

use crate::error::CatalogError;
use crate::model::Quiz;

const EMBEDDED_QUIZZES: &str = include_str!("data/quizzes.yaml");

/// Carga el banco de quizzes desde el YAML embebido (sin validar)
pub fn read_quizzes_embedded() -> Result<Vec<Quiz>, CatalogError> {
    read_quizzes_from_str(EMBEDDED_QUIZZES)
}

pub fn read_quizzes_from_str(content: &str) -> Result<Vec<Quiz>, CatalogError> {
    let quizzes: Vec<Quiz> = serde_yaml::from_str(content)?;
    log::debug!("parsed {} quizzes from YAML", quizzes.len());
    Ok(quizzes)
}
