//! Theme Store
//!
//! Global dark/light flag. Light until the user toggles; the choice is
//! persisted and broadcast to subscribers.

use serde::Deserialize;

use crate::storage::KeyValueStore;

type ThemeListener = Box<dyn Fn(bool) + Send + Sync>;

/// Accepted shapes of the persisted flag
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTheme {
    Flag(bool),
    Name(String),
}

impl StoredTheme {
    fn is_dark(&self) -> Option<bool> {
        match self {
            StoredTheme::Flag(dark) => Some(*dark),
            StoredTheme::Name(name) => match name.as_str() {
                "dark" => Some(true),
                "light" => Some(false),
                _ => None,
            },
        }
    }
}

pub struct ThemeStore<S> {
    storage: S,
    key: String,
    is_dark: bool,
    listeners: Vec<ThemeListener>,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let is_dark = match storage.read::<StoredTheme>(&key) {
            Ok(Some(stored)) => stored.is_dark().unwrap_or_else(|| {
                log::warn!("[THEME] unknown stored theme, using light");
                false
            }),
            Ok(None) => false,
            Err(e) => {
                log::warn!("[THEME] discarding stored theme: {}", e);
                false
            }
        };
        log::info!("[THEME] starting in {} mode", mode_name(is_dark));

        Self {
            storage,
            key,
            is_dark,
            listeners: Vec::new(),
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark
    }

    pub fn subscribe(&mut self, listener: impl Fn(bool) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Flip the theme; returns the new value
    pub fn toggle(&mut self) -> bool {
        let dark = !self.is_dark;
        self.set(dark);
        dark
    }

    /// Persist and notify only when the value changes
    pub fn set(&mut self, dark: bool) {
        if dark == self.is_dark {
            return;
        }
        self.is_dark = dark;
        log::debug!("[THEME] switched to {} mode", mode_name(dark));
        if let Err(e) = self.storage.write(&self.key, &dark) {
            log::warn!("[THEME] failed to persist: {}", e);
        }
        for listener in &self.listeners {
            listener(dark);
        }
    }
}

fn mode_name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::{Arc, Mutex};

    const KEY: &str = "theme";

    #[test]
    fn test_defaults_to_light() {
        let store = ThemeStore::load(MemoryStorage::new(), KEY);
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = ThemeStore::load(MemoryStorage::new(), KEY);
        assert!(store.toggle());
        assert!(!store.toggle());
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_survives_reload() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::load(storage.clone(), KEY);
        store.toggle();
        assert_eq!(storage.get_raw(KEY).as_deref(), Some("true"));

        let reloaded = ThemeStore::load(storage, KEY);
        assert!(reloaded.is_dark_mode());
    }

    #[test]
    fn test_accepts_named_values() {
        let storage = MemoryStorage::new();
        storage.insert_raw(KEY, r#""dark""#);
        assert!(ThemeStore::load(storage.clone(), KEY).is_dark_mode());

        storage.insert_raw(KEY, r#""light""#);
        assert!(!ThemeStore::load(storage, KEY).is_dark_mode());
    }

    #[test]
    fn test_garbage_falls_back_to_light() {
        let storage = MemoryStorage::new();
        for raw in ["dark", r#""purple""#, "42", "{"] {
            storage.insert_raw(KEY, raw);
            assert!(!ThemeStore::load(storage.clone(), KEY).is_dark_mode(), "{}", raw);
        }
    }

    #[test]
    fn test_subscribers_are_notified() {
        let mut store = ThemeStore::load(MemoryStorage::new(), KEY);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |dark| sink.lock().unwrap().push(dark));

        store.toggle();
        store.set(true);
        store.set(false);

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }
}
