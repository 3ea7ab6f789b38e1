// File: src/store.rs
use crate::model::Task;

/// In-memory task list for one chat session.
///
/// Ids start at 1 and only ever grow; a deleted id is never handed out again.
#[derive(Debug, Clone)]
pub struct TaskLedger {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Default for TaskLedger {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task and returns its id.
    pub fn add(&mut self, text: &str, due: Option<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: text.trim().to_string(),
            due,
        });
        log::info!("Added task #{}", id);
        id
    }

    /// Tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Removes the task with `id`. Returns false if there was none.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            log::info!("Deleted task #{}", id);
        }
        removed
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
