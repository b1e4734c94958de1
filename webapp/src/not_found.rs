use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    debug!("no route for /{path}");

    rsx! {
        div { class: "notice",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-indigo", "Back Home" }
        }
    }
}
