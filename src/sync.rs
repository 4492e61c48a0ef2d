//! Persistence sync between the in-memory list and the key-value store.
//!
//! The whole list lives under one key as a compact JSON array. Two
//! long-standing rules: an empty list is never written (whatever was stored
//! before stays), and persistence failures never abort the invocation; the
//! session degrades to in-memory.

use tracing::warn;

use crate::kv::KvStore;
use crate::task::Task;

/// Key holding the serialized task list.
pub const TASKS_KEY: &str = "todos";

pub struct StorageSync {
    store: Box<dyn KvStore>,
}

impl StorageSync {
    pub fn new(store: Box<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Hydrate the task list. Absent, unreadable, or corrupt data yields an
    /// empty list rather than an error.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.store.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("could not read persisted tasks: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("persisted tasks are not valid JSON, starting empty: {err}");
                Vec::new()
            }
        }
    }

    /// Persist the list under [`TASKS_KEY`]. An empty list is skipped;
    /// failures are logged and swallowed.
    pub fn persist(&mut self, tasks: &[Task]) {
        if tasks.is_empty() {
            return;
        }

        let json = match serde_json::to_string(tasks) {
            Ok(json) => json,
            Err(err) => {
                warn!("could not serialize tasks: {err}");
                return;
            }
        };

        if let Err(err) = self.store.set(TASKS_KEY, &json) {
            warn!("could not persist tasks: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::kv::{FileKvStore, MemoryKvStore};
    use tempfile::TempDir;

    fn file_sync(temp: &TempDir) -> StorageSync {
        StorageSync::new(Box::new(FileKvStore::new(temp.path().to_path_buf())))
    }

    fn memory_sync() -> StorageSync {
        StorageSync::new(Box::new(MemoryKvStore::new()))
    }

    fn seeded_memory_sync(raw: &str) -> StorageSync {
        let mut store = MemoryKvStore::new();
        store.set(TASKS_KEY, raw).unwrap();
        StorageSync::new(Box::new(store))
    }

    fn task(title: &str, done: bool) -> Task {
        Task {
            title: title.to_string(),
            done,
        }
    }

    #[test]
    fn persist_then_load_round_trips() {
        let mut sync = memory_sync();

        let tasks = vec![task("Walk dog", false), task("Water plants", true)];
        sync.persist(&tasks);
        assert_eq!(sync.load(), tasks);
    }

    #[test]
    fn the_stored_value_is_a_compact_json_array() {
        let temp = TempDir::new().unwrap();
        let mut sync = file_sync(&temp);

        sync.persist(&[task("Walk dog", false)]);
        let raw = std::fs::read_to_string(temp.path().join("todos.json")).unwrap();
        assert_eq!(raw, r#"[{"title":"Walk dog","done":false}]"#);
    }

    #[test]
    fn loading_with_nothing_stored_yields_an_empty_list() {
        assert!(memory_sync().load().is_empty());
    }

    #[test]
    fn an_empty_list_is_never_written() {
        let temp = TempDir::new().unwrap();
        let mut sync = file_sync(&temp);

        sync.persist(&[]);
        assert!(!temp.path().join("todos.json").exists());

        let tasks = vec![task("Walk dog", false)];
        sync.persist(&tasks);
        sync.persist(&[]);
        // The earlier value stays put.
        assert_eq!(sync.load(), tasks);
    }

    #[test]
    fn a_corrupt_blob_hydrates_as_empty() {
        let sync = seeded_memory_sync("{not json");
        assert!(sync.load().is_empty());
    }

    #[test]
    fn a_blob_of_the_wrong_shape_hydrates_as_empty() {
        let sync = seeded_memory_sync(r#"{"title":"x"}"#);
        assert!(sync.load().is_empty());
    }

    struct BrokenKvStore;

    impl KvStore for BrokenKvStore {
        fn get(&self, _key: &str) -> crate::error::Result<Option<String>> {
            Err(Error::OperationFailed("store offline".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> crate::error::Result<()> {
            Err(Error::OperationFailed("store offline".to_string()))
        }
    }

    #[test]
    fn store_failures_are_swallowed() {
        let mut sync = StorageSync::new(Box::new(BrokenKvStore));
        sync.persist(&[task("Walk dog", false)]);
        assert!(sync.load().is_empty());
    }
}
