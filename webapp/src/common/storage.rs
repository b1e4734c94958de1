use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use site::theme::PreferenceStore;

// browser local storage, raw strings only
//
// values are written without the json quoting gloo_storage would add, so the stored
// theme reads back as plain "dark" or "light".  failures only go to the console;
// callers treat an unreadable key the same as a missing one
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        })
    }

    fn save(&self, key: &str, value: &str) {
        LocalStorage::raw()
            .set_item(key, value)
            .unwrap_or_else(|err| {
                console_error!(format!("Failed to set local storage {key}: {err:?}"))
            })
    }
}
