// File: ./src/model/intent.rs
//! Rule-based intent detection.
//!
//! Classification is a two stage affair:
//!
//! 1. Exact matches on the trimmed, lower-cased input for the control words
//!    (`exit`, `quit`, `bye` and `help`, `h`, `?`).
//! 2. An ordered rule table, evaluated top to bottom. The first rule whose
//!    pattern matches anywhere in the text wins, so an utterance containing
//!    several action verbs always resolves to the earliest rule:
//!
//!    | order | intent        | pattern                                   |
//!    |-------|---------------|-------------------------------------------|
//!    | 1     | `show_tasks`  | show/list/view ... task(s)                |
//!    | 2     | `add_task`    | add/create/new ... task                   |
//!    | 3     | `delete_task` | delete/remove ... task, or `delete <id>`  |
//!
//! Anything left over is handed to the FAQ matcher.
use once_cell::sync::Lazy;
use regex::Regex;
use strum::{AsRefStr, Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    Exit,
    Help,
    ShowTasks,
    AddTask,
    DeleteTask,
    Faq,
}

pub const EXIT_WORDS: &[&str] = &["exit", "quit", "bye"];
pub const HELP_WORDS: &[&str] = &["help", "h", "?"];

/// Ordered (intent, pattern) table. Order is part of the contract.
static RULES: Lazy<Vec<(Intent, Regex)>> = Lazy::new(|| {
    let table: &[(Intent, &str)] = &[
        (Intent::ShowTasks, r"(?i)\b(show|list|view)\b.*\btasks?\b"),
        (Intent::AddTask, r"(?i)\b(add|create|new)\b.*\btask\b"),
        (
            Intent::DeleteTask,
            r"(?i)\b(delete|remove)\b.*\btask\b|^\s*(delete|remove)\s+\d+\s*$",
        ),
    ];
    table
        .iter()
        .map(|(intent, pattern)| {
            // Patterns are compile-time literals; a failure here is a programming error.
            (*intent, Regex::new(pattern).expect("invalid intent pattern"))
        })
        .collect()
});

/// Maps an utterance to exactly one intent. Never fails.
pub fn classify(utterance: &str) -> Intent {
    let normalized = utterance.trim().to_lowercase();

    if EXIT_WORDS.contains(&normalized.as_str()) {
        return Intent::Exit;
    }
    if HELP_WORDS.contains(&normalized.as_str()) {
        return Intent::Help;
    }

    let intent = RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(utterance))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Faq);

    log::debug!("Classified '{}' as {}", utterance, intent);
    intent
}
