//! Application state: the task store wired to its persistence sync.
//!
//! Construction hydrates the store once. Every dispatch runs the reducer
//! first and the persistence hook second, so the stored blob always trails
//! the in-memory list by at most one command.

use tracing::debug;

use crate::sync::StorageSync;
use crate::task::{Command, Task, TaskStore};

pub struct App {
    store: TaskStore,
    sync: StorageSync,
}

impl App {
    /// Build the application by hydrating the task list from `sync`.
    pub fn init(sync: StorageSync) -> Self {
        let tasks = sync.load();
        debug!("hydrated {} task(s)", tasks.len());
        Self {
            store: TaskStore::new(tasks),
            sync,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.store.contains_title(title)
    }

    /// Run one command through the reducer, then persist the new list.
    pub fn dispatch(&mut self, command: &Command) {
        self.store.dispatch(command);
        self.sync.persist(self.store.tasks());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{FileKvStore, MemoryKvStore};
    use tempfile::TempDir;

    fn app_for(temp: &TempDir) -> App {
        let store = FileKvStore::new(temp.path().to_path_buf());
        App::init(StorageSync::new(Box::new(store)))
    }

    fn add(title: &str) -> Command {
        Command::AddTask {
            title: title.to_string(),
        }
    }

    #[test]
    fn init_with_an_empty_store_starts_empty() {
        let app = App::init(StorageSync::new(Box::new(MemoryKvStore::new())));
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn dispatched_commands_survive_a_restart() {
        let temp = TempDir::new().unwrap();

        let mut app = app_for(&temp);
        app.dispatch(&add("Walk dog"));
        app.dispatch(&add("Buy groceries"));
        app.dispatch(&Command::ToggleDone {
            title: "Walk dog".to_string(),
        });
        drop(app);

        let app = app_for(&temp);
        assert_eq!(app.tasks().len(), 2);
        assert_eq!(app.tasks()[0].title, "Buy groceries");
        assert!(!app.tasks()[0].done);
        assert_eq!(app.tasks()[1].title, "Walk dog");
        assert!(app.tasks()[1].done);
    }

    #[test]
    fn emptying_the_list_does_not_overwrite_the_stored_blob() {
        let temp = TempDir::new().unwrap();

        let mut app = app_for(&temp);
        app.dispatch(&add("Walk dog"));
        app.dispatch(&Command::DeleteTask {
            title: "Walk dog".to_string(),
        });
        assert!(app.tasks().is_empty());
        drop(app);

        // The delete emptied the list, so nothing was written; the add's
        // blob is still there and hydrates on the next start.
        let app = app_for(&temp);
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].title, "Walk dog");
    }
}
