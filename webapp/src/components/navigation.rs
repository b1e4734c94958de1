use chrono::{Datelike, Local};
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::config::SiteConfig;

use crate::Route;
use crate::components::theme_toggle::ThemeToggle;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

// every route is flat, so "active" is plain equality; is_child_of() would light
// up Home on every page
#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                Link { to: Route::Home {}, class: "logo",
                    span { class: "accent", "{config.profile.name}" }
                    " / portfolio"
                }

                nav { class: "nav-links",
                    NavBarButton { name: "Home".to_owned(), target: Route::Home {} }
                    NavBarButton {
                        name: "Projects".to_owned(),
                        target: Route::Projects {},
                    }
                    NavBarButton {
                        name: "Contact".to_owned(),
                        target: Route::Contact {},
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let year = Local::now().year();

    rsx! {
        footer { class: "app-footer",
            div { class: "container",
                p { "© {year} {config.profile.name} • {config.profile.location}" }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        main { Outlet::<Route> {} }
        Footer {}
    }
}
