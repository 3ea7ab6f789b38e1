// File: ./src/help.rs
//! Help and greeting text shown by the chat loop.

#[derive(Clone, Debug)]
pub struct HelpItem {
    pub keys: String,
    pub desc: String,
    pub example: String,
}

#[derive(Clone, Debug)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<HelpItem>,
}

pub const WELCOME_TEXT: &str = "Hi! I'm your study assistant. I can keep a task list and answer common questions.\nType 'help' to see what I can do, or 'exit' to leave.";

pub const GOODBYE_TEXT: &str = "Bye! Good luck with your studies 👋";

fn item(keys: &str, desc: &str, example: &str) -> HelpItem {
    HelpItem {
        keys: keys.to_string(),
        desc: desc.to_string(),
        example: example.to_string(),
    }
}

pub fn get_command_help() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Tasks".to_string(),
            items: vec![
                item(
                    "add task: <text> [by <date>]",
                    "Add a task, optionally with a due date",
                    "add task: Finish lab 6 by 25 Jan",
                ),
                item("show tasks", "List your tasks", "list my tasks"),
                item("delete task <n>", "Delete task number n", "delete task 2"),
            ],
        },
        HelpSection {
            title: "Dates".to_string(),
            items: vec![
                item("YYYY-MM-DD", "ISO date", "by 2026-01-25"),
                item("D/M/YYYY", "Day first numeric date", "by 25/1/2026"),
                item("D Month", "Day and month name", "by 3 March"),
            ],
        },
        HelpSection {
            title: "Questions".to_string(),
            items: vec![item(
                "<anything else>",
                "Ask a study question and I'll look for an answer",
                "when is the library open?",
            )],
        },
        HelpSection {
            title: "Session".to_string(),
            items: vec![
                item("help, h, ?", "Show this help", "help"),
                item("exit, quit, bye", "Leave the chat", "bye"),
            ],
        },
    ]
}

/// Renders the help sections as plain text.
pub fn render_help() -> String {
    let mut out = String::from("Here's what I can do:");
    for section in get_command_help() {
        out.push_str(&format!("\n\n{}:", section.title));
        for it in section.items {
            out.push_str(&format!(
                "\n  {:<30} {} (e.g. {})",
                it.keys, it.desc, it.example
            ));
        }
    }
    out
}
