//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The fields mirror
//! the core stores and are written only by their subscriptions.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskFilter, TaskStats};

/// Reactive snapshot rendered by the views
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks in insertion order
    pub tasks: Vec<Task>,
    /// Selected task filter
    pub filter: TaskFilter,
    /// Theme flag shared by every component
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, dark_mode: bool) -> Self {
        Self {
            tasks,
            filter: TaskFilter::All,
            dark_mode,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Derived Views
// ========================

/// Tasks matching the selected filter
pub fn visible_tasks(store: AppStore) -> Vec<Task> {
    let filter = store.filter().get();
    store.tasks().with(|tasks| filter.apply(tasks))
}

pub fn task_stats(store: AppStore) -> TaskStats {
    store.tasks().with(|tasks| TaskStats::from_tasks(tasks))
}
