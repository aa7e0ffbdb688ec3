//! Task Store
//!
//! Ordered task collection persisted to local storage after every mutation.
//! Invalid input and unknown ids are silent no-ops; malformed persisted data
//! is discarded on load.

use std::collections::HashSet;

use crate::models::{Task, TaskFilter, TaskStats};
use crate::storage::{KeyValueStore, StorageError};

type TaskListener = Box<dyn Fn(&[Task]) + Send + Sync>;

pub struct TaskStore<S> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
    /// Largest id ever issued or loaded
    last_id: u64,
    listeners: Vec<TaskListener>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Rehydrate from `key`, starting empty if the value is absent or invalid
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = match storage.read::<Vec<Task>>(&key) {
            Ok(Some(tasks)) => match validate(&tasks) {
                Ok(()) => tasks,
                Err(reason) => {
                    log::warn!("[TASKS] discarding stored tasks: {}", reason);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("[TASKS] discarding stored tasks: {}", e);
                Vec::new()
            }
        };
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        log::info!("[TASKS] loaded {} tasks from `{}`", tasks.len(), key);

        Self {
            storage,
            key,
            tasks,
            last_id,
            listeners: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Register a listener called with the full collection after each mutation
    pub fn subscribe(&mut self, listener: impl Fn(&[Task]) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Append a new active task; returns its id, or `None` for blank text
    /// or when no larger id is left
    pub fn add_task(&mut self, text: &str) -> Option<u64> {
        self.add_task_at(text, chrono::Utc::now().timestamp_millis())
    }

    fn add_task_at(&mut self, text: &str, now_ms: i64) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let Some(id) = self.next_id(now_ms) else {
            log::warn!("[TASKS] id space exhausted, not adding task");
            return None;
        };
        self.tasks.push(Task::new(id, text, now_ms));
        log::debug!("[TASKS] added #{}", id);
        self.commit();
        Some(id)
    }

    /// Flip `completed`; returns false if no task has `id`
    pub fn toggle_task(&mut self, id: u64) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.commit();
        true
    }

    /// Remove the task with `id`; returns false if absent
    pub fn delete_task(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        log::debug!("[TASKS] deleted #{}", id);
        self.commit();
        true
    }

    /// Remove every completed task; returns how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            log::debug!("[TASKS] cleared {} completed", removed);
            self.commit();
        }
        removed
    }

    pub fn filtered_view(&self, filter: TaskFilter) -> Vec<Task> {
        filter.apply(&self.tasks)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Timestamp-derived and strictly increasing, so ids are never reused
    fn next_id(&mut self, now_ms: i64) -> Option<u64> {
        let candidate = u64::try_from(now_ms).unwrap_or(0);
        self.last_id = candidate.max(self.last_id.checked_add(1)?);
        Some(self.last_id)
    }

    fn commit(&self) {
        if let Err(e) = self.persist() {
            log::warn!("[TASKS] failed to persist: {}", e);
        }
        for listener in &self.listeners {
            listener(&self.tasks);
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.write(&self.key, &self.tasks)
    }
}

/// Shape checks the JSON schema alone cannot express
fn validate(tasks: &[Task]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for task in tasks {
        if task.text.trim().is_empty() {
            return Err(format!("task #{} has empty text", task.id));
        }
        if !seen.insert(task.id) {
            return Err(format!("duplicate task id #{}", task.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const KEY: &str = "tasks";

    fn setup() -> (TaskStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (TaskStore::load(storage.clone(), KEY), storage)
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let (mut store, storage) = setup();
        for text in ["", "   ", "\t\n", " \u{3000} "] {
            assert_eq!(store.add_task(text), None);
        }
        assert!(store.tasks().is_empty());
        assert!(storage.get_raw(KEY).is_none());
    }

    #[test]
    fn test_add_appends_active_task() {
        let (mut store, _) = setup();
        store.add_task("First").unwrap();
        let id = store.add_task("  Second  ").unwrap();

        let all = store.filtered_view(TaskFilter::All);
        assert_eq!(all.len(), 2);
        let last = all.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "Second");
        assert!(!last.completed);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let (mut store, _) = setup();
        let a = store.add_task_at("a", 1_000).unwrap();
        let b = store.add_task_at("b", 1_000).unwrap();
        let c = store.add_task_at("c", 500).unwrap();
        assert!(a < b && b < c);

        // deleting the newest task must not free its id
        store.delete_task(c);
        let d = store.add_task_at("d", 500).unwrap();
        assert!(d > c);
    }

    #[test]
    fn test_toggle_is_involution() {
        let (mut store, _) = setup();
        let id = store.add_task("Flip me").unwrap();

        assert!(store.toggle_task(id));
        assert!(store.tasks()[0].completed);
        assert!(store.toggle_task(id));
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let (mut store, storage) = setup();
        let id = store.add_task("Keep").unwrap();
        let snapshot = storage.get_raw(KEY);

        assert!(!store.toggle_task(id + 1));
        assert!(!store.delete_task(id + 1));
        assert_eq!(ids(store.tasks()), vec![id]);
        assert_eq!(storage.get_raw(KEY), snapshot);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (mut store, _) = setup();
        let a = store.add_task("a").unwrap();
        let b = store.add_task("b").unwrap();
        let c = store.add_task("c").unwrap();

        assert!(store.delete_task(b));
        assert_eq!(ids(store.tasks()), vec![a, c]);
    }

    #[test]
    fn test_active_and_completed_partition_all() {
        let (mut store, _) = setup();
        let ids_added: Vec<u64> = (0..6).map(|i| store.add_task(&format!("t{}", i)).unwrap()).collect();
        store.toggle_task(ids_added[1]);
        store.toggle_task(ids_added[4]);

        let all: HashSet<u64> = ids(&store.filtered_view(TaskFilter::All)).into_iter().collect();
        let active = store.filtered_view(TaskFilter::Active);
        let completed = store.filtered_view(TaskFilter::Completed);
        let union: HashSet<u64> = ids(&active).into_iter().chain(ids(&completed)).collect();

        assert_eq!(union, all);
        assert_eq!(active.len() + completed.len(), all.len());
        assert_eq!(ids(&completed), vec![ids_added[1], ids_added[4]]);
    }

    #[test]
    fn test_clear_completed() {
        let (mut store, _) = setup();
        let a = store.add_task("a").unwrap();
        let b = store.add_task("b").unwrap();
        store.toggle_task(a);

        assert_eq!(store.clear_completed(), 1);
        assert_eq!(ids(store.tasks()), vec![b]);
        assert_eq!(store.clear_completed(), 0);
        assert_eq!(store.stats().completed, 0);
    }

    #[test]
    fn test_reload_round_trips() {
        let (mut store, storage) = setup();
        let a = store.add_task("Buy milk").unwrap();
        store.add_task("Walk dog").unwrap();
        store.toggle_task(a);

        let reloaded = TaskStore::load(storage, KEY);
        assert_eq!(reloaded.tasks(), store.tasks());
    }

    #[test]
    fn test_reload_continues_id_sequence() {
        let storage = MemoryStorage::new();
        storage.write(KEY, &vec![Task::new(i64::MAX as u64, "far future", 0)]).unwrap();

        let mut store = TaskStore::load(storage, KEY);
        let id = store.add_task("next").unwrap();
        assert_eq!(id, i64::MAX as u64 + 1);
    }

    #[test]
    fn test_add_stops_when_ids_are_exhausted() {
        let storage = MemoryStorage::new();
        storage.insert_raw(
            KEY,
            r#"[{"id":18446744073709551615,"text":"x","completed":false,"createdAt":0}]"#,
        );
        let mut store = TaskStore::load(storage.clone(), KEY);
        assert_eq!(store.tasks().len(), 1);
        let snapshot = storage.get_raw(KEY);

        assert_eq!(store.add_task("next"), None);
        assert_eq!(ids(store.tasks()), vec![u64::MAX]);
        assert_eq!(storage.get_raw(KEY), snapshot);
    }

    /// Storage whose writes always fail, like a full quota
    struct FullStorage;

    impl KeyValueStore for FullStorage {
        fn read<T: serde::de::DeserializeOwned>(&self, _key: &str) -> StorageResult<Option<T>> {
            Ok(None)
        }

        fn write<T: serde::Serialize + ?Sized>(&self, _key: &str, _value: &T) -> StorageResult<()> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_failed_write_still_updates_and_notifies() {
        let mut store = TaskStore::load(FullStorage, KEY);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        store.subscribe(move |tasks| {
            assert_eq!(tasks.len(), 1);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let id = store.add_task("unsaved").unwrap();
        assert_eq!(ids(store.tasks()), vec![id]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_malformed_storage_is_discarded() {
        let storage = MemoryStorage::new();
        storage.insert_raw(KEY, r#"[{"id":1,"text":"no flag"}]"#);
        assert!(TaskStore::load(storage.clone(), KEY).tasks().is_empty());

        storage.insert_raw(KEY, "not json at all");
        assert!(TaskStore::load(storage.clone(), KEY).tasks().is_empty());

        storage.insert_raw(KEY, r#"{"id":1}"#);
        assert!(TaskStore::load(storage, KEY).tasks().is_empty());
    }

    #[test]
    fn test_invalid_shape_is_discarded() {
        let storage = MemoryStorage::new();
        storage.write(KEY, &vec![Task::new(1, "ok", 0), Task::new(1, "dup", 0)]).unwrap();
        assert!(TaskStore::load(storage.clone(), KEY).tasks().is_empty());

        storage.write(KEY, &vec![Task::new(1, "  ", 0)]).unwrap();
        assert!(TaskStore::load(storage, KEY).tasks().is_empty());
    }

    #[test]
    fn test_listeners_see_every_mutation() {
        let (mut store, _) = setup();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let id = store.add_task("a").unwrap();
        store.add_task(" ");
        store.toggle_task(id);
        store.toggle_task(id + 99);
        store.toggle_task(id);
        store.clear_completed();
        store.delete_task(id);

        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
