use std::{fmt, str::FromStr};

use tracing::debug;

// local storage key holding the raw "light"/"dark" string
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemePreference::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    // a stored value always wins; the environment is only asked when there is
    // nothing usable in storage.  unknown strings are treated as nothing, there
    // are no older formats to migrate
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.map(str::parse::<ThemePreference>) {
            Some(Ok(pref)) => pref,
            _ if prefers_dark => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            _ => Err(anyhow::Error::msg(format!("unknown theme: {s}"))),
        }
    }
}

// raw string persistence, implemented over browser local storage by the webapp
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str);
}

// ThemeState
//
// the in-memory preference together with where it is persisted.  loaded once per
// page load and written back straight away, so the system setting seen on the
// first visit sticks until the visitor toggles
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState<S: PreferenceStore> {
    preference: ThemePreference,
    store: S,
}

impl<S: PreferenceStore> ThemeState<S> {
    pub fn load(store: S, prefers_dark: bool) -> Self {
        let stored = store.load(THEME_KEY);
        let preference = ThemePreference::resolve(stored.as_deref(), prefers_dark);

        debug!(
            "theme resolved to {preference} (stored: {stored:?}, prefers dark: {prefers_dark})"
        );

        store.save(THEME_KEY, preference.as_str());

        ThemeState { preference, store }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn set(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.store.save(THEME_KEY, preference.as_str());
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.set(self.preference.toggled());
        self.preference
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use super::*;

    // shared so that a "reload" can be simulated by loading a second state from
    // the same backing map
    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
        }
    }

    #[test]
    fn stored_value_wins_over_system() {
        assert_eq!(ThemePreference::resolve(Some("light"), true), ThemePreference::Light);
        assert_eq!(ThemePreference::resolve(Some("dark"), false), ThemePreference::Dark);
    }

    #[test]
    fn system_used_when_nothing_stored() {
        assert_eq!(ThemePreference::resolve(None, true), ThemePreference::Dark);
        assert_eq!(ThemePreference::resolve(None, false), ThemePreference::Light);
        assert_eq!(ThemePreference::resolve(Some("sepia"), true), ThemePreference::Dark);
        assert_eq!(ThemePreference::resolve(Some(""), false), ThemePreference::Light);
    }

    #[test]
    fn toggle_persists_and_survives_reload() {
        let store = MemoryStore::default();

        let mut theme = ThemeState::load(store.clone(), false);
        assert_eq!(theme.preference(), ThemePreference::Light);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));

        assert_eq!(theme.toggle(), ThemePreference::Dark);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("dark"));

        let reloaded = ThemeState::load(store.clone(), false);
        assert_eq!(reloaded.preference(), ThemePreference::Dark);
    }

    #[test]
    fn first_load_pins_system_preference() {
        let store = MemoryStore::default();

        let theme = ThemeState::load(store.clone(), true);
        assert_eq!(theme.preference(), ThemePreference::Dark);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("dark"));

        // the system has since switched to light, the stored value still wins
        let reloaded = ThemeState::load(store.clone(), false);
        assert_eq!(reloaded.preference(), ThemePreference::Dark);
    }

    #[test]
    fn unknown_stored_value_is_replaced() {
        let store = MemoryStore::default();
        store.save(THEME_KEY, "sepia");

        let theme = ThemeState::load(store.clone(), false);
        assert_eq!(theme.preference(), ThemePreference::Light);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn set_overwrites_stored_value() {
        let store = MemoryStore::default();
        store.save(THEME_KEY, "dark");

        let mut theme = ThemeState::load(store.clone(), false);
        theme.set(ThemePreference::Light);

        assert_eq!(store.load(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(ThemeState::load(store, true).preference(), ThemePreference::Light);
    }

    #[test]
    fn parses_only_known_values() {
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }
}
