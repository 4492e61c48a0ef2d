//! Task model and the command reducer.
//!
//! The list is an ordered `Vec<Task>`, newest first. Every mutation goes
//! through `apply`, which leaves its input untouched and returns the next
//! list.

use serde::{Deserialize, Serialize};

/// A single todo task. The title doubles as the identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(title: String) -> Self {
        Task { title, done: false }
    }
}

/// Commands accepted by the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTask { title: String },
    DeleteTask { title: String },
    EditTask { old_title: String, new_title: String },
    ClearCompleted,
    ToggleDone { title: String },
}

/// Reduce one command over the current list and return the next list.
///
/// Title matching here is exact and case-sensitive; the case-insensitive
/// uniqueness rule lives in validation, not in the reducer. Commands naming
/// an unknown title leave the list unchanged.
pub fn apply(current: &[Task], command: &Command) -> Vec<Task> {
    match command {
        Command::AddTask { title } => {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.push(Task::new(title.clone()));
            next.extend(current.iter().cloned());
            next
        }
        Command::DeleteTask { title } => current
            .iter()
            .filter(|task| task.title != *title)
            .cloned()
            .collect(),
        Command::EditTask {
            old_title,
            new_title,
        } => current
            .iter()
            .map(|task| {
                if task.title == *old_title {
                    Task {
                        title: new_title.clone(),
                        done: task.done,
                    }
                } else {
                    task.clone()
                }
            })
            .collect(),
        Command::ClearCompleted => current
            .iter()
            .filter(|task| !task.done)
            .cloned()
            .collect(),
        Command::ToggleDone { title } => current
            .iter()
            .map(|task| {
                if task.title == *title {
                    Task {
                        title: task.title.clone(),
                        done: !task.done,
                    }
                } else {
                    task.clone()
                }
            })
            .collect(),
    }
}

/// Owns the task list. The only mutation path is `dispatch`.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(initial: Vec<Task>) -> Self {
        Self { tasks: initial }
    }

    /// Read-only snapshot of the current list.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn dispatch(&mut self, command: &Command) {
        self.tasks = apply(&self.tasks, command);
    }

    /// Exact, case-sensitive title lookup, matching the reducer's rules.
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title == title)
    }
}
