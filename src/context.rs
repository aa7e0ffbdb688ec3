//! Application Context
//!
//! Owns the core stores and exposes their mutation API to components.
//! Every mutation persists through the store and is mirrored into the
//! reactive `AppState` by a subscription set up here.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::models::TaskFilter;
use crate::storage::AppStorage;
use crate::store::{AppState, AppStateStoreFields, AppStore};
use crate::tasks::TaskStore;
use crate::theme::ThemeStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    tasks: StoredValue<TaskStore<AppStorage>>,
    theme: StoredValue<ThemeStore<AppStorage>>,
    config: StoredValue<AppConfig>,
    /// Reactive mirror of the stores
    pub store: AppStore,
}

impl AppContext {
    /// Load the stores, wire their subscriptions and provide the context
    /// to the component tree
    pub fn provide(config: AppConfig) -> Self {
        let storage = AppStorage::detect();
        let mut tasks = TaskStore::load(storage.clone(), config.tasks_key.clone());
        let mut theme = ThemeStore::load(storage, config.theme_key.clone());

        let store = Store::new(AppState::new(tasks.tasks().to_vec(), theme.is_dark_mode()));
        tasks.subscribe(move |tasks| {
            *store.tasks().write() = tasks.to_vec();
        });
        theme.subscribe(move |dark| {
            *store.dark_mode().write() = dark;
        });

        let ctx = Self {
            tasks: StoredValue::new(tasks),
            theme: StoredValue::new(theme),
            config: StoredValue::new(config),
            store,
        };
        provide_context(ctx);
        ctx
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    // ========================
    // Tasks
    // ========================

    /// Returns false when the text was blank
    pub fn add_task(&self, text: &str) -> bool {
        self.tasks
            .try_update_value(|tasks| tasks.add_task(text))
            .flatten()
            .is_some()
    }

    pub fn toggle_task(&self, id: u64) {
        self.tasks.update_value(|tasks| {
            tasks.toggle_task(id);
        });
    }

    pub fn delete_task(&self, id: u64) {
        self.tasks.update_value(|tasks| {
            tasks.delete_task(id);
        });
    }

    pub fn clear_completed(&self) {
        self.tasks.update_value(|tasks| {
            let removed = tasks.clear_completed();
            log::info!("[APP] cleared {} completed tasks", removed);
        });
    }

    pub fn set_filter(&self, filter: TaskFilter) {
        *self.store.filter().write() = filter;
    }

    // ========================
    // Theme
    // ========================

    pub fn toggle_theme(&self) {
        self.theme.update_value(|theme| {
            theme.toggle();
        });
    }

    pub fn is_dark_mode(&self) -> bool {
        self.store.dark_mode().get()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
