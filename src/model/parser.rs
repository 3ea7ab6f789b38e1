// File: src/model/parser.rs
use crate::model::date::extract_due_date;
use once_cell::sync::Lazy;
use regex::Regex;

/// A task-creation command that parsed cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTaskCreate {
    pub description: String,
    pub due: Option<String>,
}

static ADD_COMMAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:add(?:\s+a)?|create|new)\s+task\b\s*:?\s*(.*)")
        .expect("invalid add-task pattern")
});

static BY_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bby\b\s+(.+)$").expect("invalid due suffix pattern"));

static DELETE_COMMAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:delete|remove)\s+task\s+(\d+)\b").expect("invalid delete pattern")
});

static DELETE_BARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:delete|remove)\s+(\d+)\s*$").expect("invalid bare delete pattern")
});

/// Extracts the description and optional due date from an add-task command.
///
/// Accepts `add task`, `add a task`, `create task` and `new task`, each
/// optionally followed by a colon. Only the first line of the body is read.
/// A trailing `by <date>` clause is cut from the description and normalized.
/// Returns `None` when no description is left.
pub fn parse_add_task(text: &str) -> Option<ParsedTaskCreate> {
    let caps = ADD_COMMAND.captures(text)?;
    let mut body = caps.get(1)?.as_str().trim().to_string();
    if body.is_empty() {
        return None;
    }

    let mut due = None;
    if let Some(by) = BY_SUFFIX.captures(&body) {
        let tail = by.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        due = extract_due_date(tail);
        body = BY_SUFFIX.replace(&body, "").trim().to_string();
    }

    if body.is_empty() {
        log::warn!("Add-task command '{}' has no description", text);
        return None;
    }

    Some(ParsedTaskCreate {
        description: body,
        due,
    })
}

/// Extracts the task id from `delete task <n>` or a bare `delete <n>` line.
///
/// Ids that do not fit or are zero count as unparsable.
pub fn parse_delete_task(text: &str) -> Option<u32> {
    let digits = DELETE_COMMAND
        .captures(text)
        .or_else(|| DELETE_BARE.captures(text))?
        .get(1)?
        .as_str()
        .to_string();

    match digits.parse::<u32>() {
        Ok(0) | Err(_) => {
            log::warn!("Rejecting task id '{}'", digits);
            None
        }
        Ok(id) => Some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_clause_without_a_date_keeps_no_due() {
        let parsed = parse_add_task("add task: call mum by tonight").unwrap();
        assert_eq!(parsed.description, "call mum");
        assert_eq!(parsed.due, None);
    }

    #[test]
    fn overflowing_id_is_unparsable() {
        assert_eq!(parse_delete_task("delete task 99999999999999999999"), None);
        assert_eq!(parse_delete_task("delete task 0"), None);
    }
}
