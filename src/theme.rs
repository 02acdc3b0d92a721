//! Light/dark theme preference, persisted in a single localStorage slot.
//!
//! The slot may hold either a JSON value (`true`/`false`) or a bare keyword
//! (`dark`/`light`). Whatever shape was found is kept when toggling, so the
//! stored string round-trips after two toggles.

use log::{debug, warn};
use serde_json::Value;
use yew::prelude::*;

use crate::config;

/// Where preferences are read from and written to.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Every failure is swallowed: a missing theme is cosmetic.
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn write(&self, key: &str, value: &str) {
        let written = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|storage| storage.set_item(key, value).is_ok())
            .unwrap_or(false);
        if !written {
            warn!("Could not persist {}={} to localStorage", key, value);
        }
    }
}

/// A persisted value as it was found in storage.
#[derive(Clone, Debug, PartialEq)]
pub enum StoredValue {
    Text(String),
    Structured(Value),
}

impl StoredValue {
    /// Parses a raw slot value. JSON strings and unparsable input are both text.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::String(text)) => StoredValue::Text(text),
            Ok(value) => StoredValue::Structured(value),
            Err(_) => StoredValue::Text(raw.to_string()),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            StoredValue::Text(text) => text.clone(),
            StoredValue::Structured(value) => value.to_string(),
        }
    }

    pub fn load(store: &impl PreferenceStore, key: &str, default: StoredValue) -> Self {
        match store.read(key) {
            Some(raw) => StoredValue::parse(&raw),
            None => default,
        }
    }

    pub fn save(&self, store: &impl PreferenceStore, key: &str) {
        store.write(key, &self.encode());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemePreference(StoredValue);

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference(StoredValue::Structured(Value::Bool(false)))
    }
}

impl ThemePreference {
    pub fn load(store: &impl PreferenceStore, key: &str) -> Self {
        ThemePreference(StoredValue::load(store, key, Self::default().0))
    }

    pub fn save(&self, store: &impl PreferenceStore, key: &str) {
        self.0.save(store, key);
    }

    pub fn stored(&self) -> &StoredValue {
        &self.0
    }

    /// Anything other than `true` or `dark` renders light.
    pub fn mode(&self) -> ThemeMode {
        match &self.0 {
            StoredValue::Structured(Value::Bool(true)) => ThemeMode::Dark,
            StoredValue::Text(text) if text == "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        let next = self.mode().flipped();
        match &self.0 {
            StoredValue::Text(_) => ThemePreference(StoredValue::Text(next.keyword().to_string())),
            StoredValue::Structured(_) => {
                ThemePreference(StoredValue::Structured(Value::Bool(next.is_dark())))
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub mode: ThemeMode,
    pub toggle: Callback<MouseEvent>,
}

/// Reads the stored preference once and writes it back on every change.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let preference = use_state(|| ThemePreference::load(&LocalStore, config::THEME_STORAGE_KEY));

    use_effect_with_deps(
        move |preference: &ThemePreference| {
            debug!("Persisting theme preference {:?}", preference.stored());
            preference.save(&LocalStore, config::THEME_STORAGE_KEY);
            || ()
        },
        (*preference).clone(),
    );

    let toggle = {
        let preference = preference.clone();
        Callback::from(move |_: MouseEvent| {
            preference.set(preference.toggled());
        })
    };

    ThemeHandle {
        mode: preference.mode(),
        toggle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = MemoryStore::default();
            store.write(key, value);
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.get(key)
        }

        fn write(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn unparsable_value_resolves_to_raw_string() {
        for raw in ["dark", "light", "not json at all", "{broken", ""] {
            let store = MemoryStore::with("theme", raw);
            let loaded = StoredValue::load(&store, "theme", StoredValue::Text("fallback".into()));
            assert_eq!(loaded, StoredValue::Text(raw.to_string()), "raw value {raw:?}");
        }
    }

    #[test]
    fn missing_value_resolves_to_default() {
        let store = MemoryStore::default();
        let default = StoredValue::Structured(Value::Bool(false));
        assert_eq!(StoredValue::load(&store, "theme", default.clone()), default);
        assert_eq!(ThemePreference::load(&store, "theme").mode(), ThemeMode::Light);
    }

    #[test]
    fn json_string_is_stored_back_as_plain_text() {
        let value = StoredValue::parse("\"dark\"");
        assert_eq!(value, StoredValue::Text("dark".into()));
        assert_eq!(value.encode(), "dark");
    }

    #[test]
    fn mode_resolution() {
        let cases = [
            ("true", ThemeMode::Dark),
            ("false", ThemeMode::Light),
            ("dark", ThemeMode::Dark),
            ("light", ThemeMode::Light),
            ("42", ThemeMode::Light),
            ("purple", ThemeMode::Light),
        ];
        for (raw, expected) in cases {
            let store = MemoryStore::with("theme", raw);
            assert_eq!(ThemePreference::load(&store, "theme").mode(), expected, "raw value {raw:?}");
        }
    }

    #[test]
    fn toggling_twice_restores_mode_and_persisted_value() {
        for raw in ["true", "false", "dark", "light"] {
            let store = MemoryStore::with("theme", raw);
            let original = ThemePreference::load(&store, "theme");

            let once = original.toggled();
            once.save(&store, "theme");
            assert_ne!(once.mode(), original.mode());

            let twice = once.toggled();
            twice.save(&store, "theme");
            assert_eq!(twice.mode(), original.mode());
            assert_eq!(store.get("theme").as_deref(), Some(raw));
        }
    }

    #[test]
    fn toggle_keeps_textual_shape() {
        let light = ThemePreference(StoredValue::Text("light".into()));
        assert_eq!(light.toggled().stored().encode(), "dark");
        assert_eq!(ThemePreference::default().toggled().stored().encode(), "true");
    }
}
