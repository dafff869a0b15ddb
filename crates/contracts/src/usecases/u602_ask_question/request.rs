use serde::{Deserialize, Serialize};

/// Вопрос к проиндексированному документу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

impl QueryRequest {
    /// Builds a request from raw input. Returns `None` when nothing but
    /// whitespace was typed.
    pub fn from_input(input: &str) -> Option<Self> {
        let question = input.trim();
        if question.is_empty() {
            return None;
        }
        Some(Self {
            question: question.to_string(),
        })
    }
}
