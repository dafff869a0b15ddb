//! Query panel state machine.

use contracts::usecases::u602_ask_question::{QueryRequest, QueryResponse};

pub const ERROR_ANSWER: &str = "Error retrieving answer. Please try again.";

/// Widths of the shimmer bars shown while an answer is pending.
pub const PLACEHOLDER_WIDTHS: [&str; 3] = ["75%", "50%", "83%"];

/// What a keydown in the question box should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    /// Plain Enter: suppress the newline and ask (if the question allows it).
    Ask,
    /// Leave the key to the textarea; Shift+Enter inserts a newline there.
    PassThrough,
}

impl KeyAction {
    /// Classifies a keydown without touching panel state.
    pub fn from_key(key: &str, shift: bool) -> Self {
        if key == "Enter" && !shift {
            KeyAction::Ask
        } else {
            KeyAction::PassThrough
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    question: String,
    answer: String,
    loading: bool,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.question.trim().is_empty()
    }

    /// The answer card is visible while loading or once an answer exists.
    pub fn show_answer_panel(&self) -> bool {
        self.loading || !self.answer.is_empty()
    }

    /// Starts a query. Blank questions and a query already in flight are
    /// no-ops.
    pub fn begin(&mut self) -> Option<QueryRequest> {
        if self.loading {
            return None;
        }
        let request = QueryRequest::from_input(&self.question)?;
        self.loading = true;
        self.answer.clear();
        Some(request)
    }

    pub fn finish(&mut self, outcome: Result<QueryResponse, String>) {
        self.answer = match outcome {
            Ok(resp) => resp.answer,
            Err(_) => ERROR_ANSWER.to_string(),
        };
        self.loading = false;
    }
}
