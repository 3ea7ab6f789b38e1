// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A task held by the session ledger.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub text: String,
    /// Canonical date string (`YYYY-MM-DD` or `D Month`), never validated.
    pub due: Option<String>,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.text)?;
        if let Some(due) = &self.due {
            write!(f, " (due: {})", due)?;
        }
        Ok(())
    }
}

/// One question/answer pair of the FAQ corpus.
///
/// The short `q`/`a` keys are accepted as well as the long ones.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(alias = "q")]
    pub question: String,
    #[serde(alias = "a")]
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
