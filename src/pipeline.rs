// File: ./src/pipeline.rs
//! Single entry point of the interpretation pipeline.
//!
//! `interpret` classifies one utterance and runs whatever the intent needs:
//! the task extractors for add/delete, the FAQ matcher for everything that
//! fell through the rule table. It never touches the ledger; applying the
//! result is the controller's job.
use crate::model::{
    FaqMatcher, Intent, ParsedTaskCreate, classify, parse_add_task, parse_delete_task,
};

/// Outcome of interpreting one utterance.
///
/// `None` payloads mean "recognized the intent, could not parse the rest"
/// (or, for `Faq`, "no confident match").
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Exit,
    Help,
    ShowTasks,
    AddTask(Option<ParsedTaskCreate>),
    DeleteTask(Option<u32>),
    Faq(Option<String>),
}

impl Interpretation {
    pub fn intent(&self) -> Intent {
        match self {
            Interpretation::Exit => Intent::Exit,
            Interpretation::Help => Intent::Help,
            Interpretation::ShowTasks => Intent::ShowTasks,
            Interpretation::AddTask(_) => Intent::AddTask,
            Interpretation::DeleteTask(_) => Intent::DeleteTask,
            Interpretation::Faq(_) => Intent::Faq,
        }
    }
}

pub fn interpret(utterance: &str, faq: &FaqMatcher, threshold: f32) -> Interpretation {
    match classify(utterance) {
        Intent::Exit => Interpretation::Exit,
        Intent::Help => Interpretation::Help,
        Intent::ShowTasks => Interpretation::ShowTasks,
        Intent::AddTask => Interpretation::AddTask(parse_add_task(utterance)),
        Intent::DeleteTask => Interpretation::DeleteTask(parse_delete_task(utterance)),
        Intent::Faq => Interpretation::Faq(faq.answer(utterance, threshold).map(str::to_string)),
    }
}
