use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: String, // Enunciado
    pub options: Vec<String>, // Opciones en orden de pantalla
    pub correct_answer: usize, // Índice dentro de `options`
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_answer == option
    }

    pub fn option_text(&self, option: usize) -> Option<&str> {
        self.options.get(option).map(String::as_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Índice de la última pregunta (el catálogo garantiza al menos una)
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}

/// Pantalla a la que la app pide navegar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Catalog,
    Quiz,
    Results,
}

/// Nivel de nota para mostrar; los umbrales son cotas inferiores inclusivas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    High,
    Medium,
    Low,
}

impl Band {
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Band::High
        } else if percentage >= 60 {
            Band::Medium
        } else {
            Band::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::High => "high",
            Band::Medium => "medium",
            Band::Low => "low",
        }
    }
}
