// document-level glue for the pages, everything here is a no-op outside a browser window
use gloo_console::error as console_error;
use tracing::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use site::theme::ThemePreference;

const DARK_CLASS: &str = "dark";

// what the operating system asks for, consulted only when nothing is stored
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

// the stylesheets key everything off a "dark" class on <html>
pub fn apply_theme(preference: ThemePreference) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let result = match preference {
        ThemePreference::Dark => classes.add_1(DARK_CLASS),
        ThemePreference::Light => classes.remove_1(DARK_CLASS),
    };

    match result {
        Ok(()) => debug!("applied {preference} theme"),
        Err(err) => console_error!(format!("Failed to apply theme: {err:?}")),
    }
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
