// File: src/controller.rs
//! Applies interpreted utterances to the session.
//! The chat loop delegates every turn here so replies and ledger updates stay
//! consistent regardless of the front end.
use crate::help::{GOODBYE_TEXT, render_help};
use crate::model::FaqMatcher;
use crate::pipeline::{Interpretation, interpret};
use crate::store::TaskLedger;

pub const EMPTY_INPUT_REPLY: &str = "Type something, or type 'help' to see what I can do.";
pub const NO_TASKS_REPLY: &str = "You have no tasks yet. Try: add task: Finish lab 6 by 25 Jan";
pub const ADD_FAILED_REPLY: &str =
    "I couldn't parse that. Try: add task: Submit essay by 2026-01-25";
pub const DELETE_MISSING_ID_REPLY: &str = "Tell me which one to delete. Example: delete task 2";
pub const DELETE_NOT_FOUND_REPLY: &str = "I couldn't find that task number.";
pub const FAQ_NO_MATCH_REPLY: &str = "I’m not sure. Try asking another way, or type 'help'.";

/// Result of one turn: the text to show and whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }
}

/// Owns the session state: the ledger, the fitted FAQ matcher and the threshold.
#[derive(Debug)]
pub struct ChatController {
    pub ledger: TaskLedger,
    faq: FaqMatcher,
    threshold: f32,
}

impl ChatController {
    pub fn new(faq: FaqMatcher, threshold: f32) -> Self {
        Self {
            ledger: TaskLedger::new(),
            faq,
            threshold,
        }
    }

    /// Interprets one line of input and applies it.
    pub fn handle(&mut self, input: &str) -> Reply {
        let input = input.trim();
        if input.is_empty() {
            return Reply::say(EMPTY_INPUT_REPLY);
        }
        let interpretation = interpret(input, &self.faq, self.threshold);
        log::debug!("Turn intent: {}", interpretation.intent());
        self.apply(interpretation)
    }

    pub fn apply(&mut self, interpretation: Interpretation) -> Reply {
        match interpretation {
            Interpretation::Exit => Reply {
                text: GOODBYE_TEXT.to_string(),
                exit: true,
            },
            Interpretation::Help => Reply::say(render_help()),
            Interpretation::ShowTasks => {
                let tasks = self.ledger.list();
                if tasks.is_empty() {
                    return Reply::say(NO_TASKS_REPLY);
                }
                let mut text = String::from("Here are your tasks:");
                for task in tasks {
                    text.push_str(&format!("\n  {}", task));
                }
                Reply::say(text)
            }
            Interpretation::AddTask(None) => Reply::say(ADD_FAILED_REPLY),
            Interpretation::AddTask(Some(parsed)) => {
                let id = self.ledger.add(&parsed.description, parsed.due.clone());
                let due_msg = parsed
                    .due
                    .map(|d| format!(" (due: {})", d))
                    .unwrap_or_default();
                Reply::say(format!("Added task #{} ✅{}", id, due_msg))
            }
            Interpretation::DeleteTask(None) => Reply::say(DELETE_MISSING_ID_REPLY),
            Interpretation::DeleteTask(Some(id)) => {
                if self.ledger.delete(id) {
                    Reply::say("Deleted ✅")
                } else {
                    Reply::say(DELETE_NOT_FOUND_REPLY)
                }
            }
            Interpretation::Faq(Some(answer)) => Reply::say(answer),
            Interpretation::Faq(None) => Reply::say(FAQ_NO_MATCH_REPLY),
        }
    }
}
