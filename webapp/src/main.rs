#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod projects;
use projects::Projects;

mod contact;
use contact::Contact;

mod register;
use register::Register;

mod not_found;
use not_found::PageNotFound;

use crate::common::{dom::prefers_dark, site_config, storage::LocalStore};
use site::theme::ThemeState;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // fail before anything renders rather than halfway through a page
    let config = site_config().expect("failed to load site config");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/projects")]
        Projects {},
        #[route("/contact")]
        Contact {},
        #[route("/register")]
        Register {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // the theme outlives any one page, so it lives here and is handed down as context
    let theme = use_context_provider(|| Signal::new(ThemeState::load(LocalStore, prefers_dark())));

    use_effect(move || common::dom::apply_theme(theme.read().preference()));

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        style { "{common::style::PAGE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
