use dioxus::prelude::*;
use tracing::debug;

use site::theme::ThemeState;

use crate::common::storage::LocalStore;

// flips the site-wide theme; App applies the change to the document
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeState<LocalStore>>>();
    let dark = theme.read().preference().is_dark();

    rsx! {
        button {
            class: "icon-button theme-toggle",
            r#type: "button",
            aria_label: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                let now = theme.write().toggle();
                debug!("theme toggled to {now}");
            },
            if dark {
                "☀"
            } else {
                "☾"
            }
        }
    }
}
