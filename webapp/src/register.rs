use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::register::RegistrationDemo;

use crate::Route;

// client-only demo linked from the projects page; nothing is sent anywhere
#[component]
pub fn Register() -> Element {
    let mut demo = use_signal(RegistrationDemo::default);
    let mut result = use_signal(|| None::<Result<String, String>>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let outcome = {
            let demo = demo.read();
            demo.check().map(|_| demo.greeting()).map_err(|err| err.to_string())
        };
        result.set(Some(outcome));
    };

    let body = match result() {
        Some(Ok(greeting)) => rsx! {
            div { class: "sent-panel",
                div { class: "sent-icon", "✔" }
                h3 { "{greeting}" }
                p { "This was only a demo, no account was created." }
                Link { to: Route::Projects {}, class: "btn btn-indigo", "Back to Projects" }
            }
        },
        failed => rsx! {
            if let Some(Err(reason)) = failed {
                div { class: "alert-error",
                    p { "{reason}" }
                }
            }

            form { class: "form-stack", onsubmit,
                div {
                    label { class: "form-label", r#for: "reg-name", "Name" }
                    input {
                        class: "form-input",
                        id: "reg-name",
                        r#type: "text",
                        value: "{demo.read().name}",
                        oninput: move |evt| demo.write().name = evt.value(),
                    }
                }
                div {
                    label { class: "form-label", r#for: "reg-email", "Email" }
                    input {
                        class: "form-input",
                        id: "reg-email",
                        r#type: "email",
                        value: "{demo.read().email}",
                        oninput: move |evt| demo.write().email = evt.value(),
                    }
                }
                div {
                    label { class: "form-label", r#for: "reg-password", "Password" }
                    input {
                        class: "form-input",
                        id: "reg-password",
                        r#type: "password",
                        value: "{demo.read().password}",
                        oninput: move |evt| demo.write().password = evt.value(),
                    }
                }
                div {
                    label { class: "form-label", r#for: "reg-confirm", "Confirm password" }
                    input {
                        class: "form-input",
                        id: "reg-confirm",
                        r#type: "password",
                        value: "{demo.read().confirm}",
                        oninput: move |evt| demo.write().confirm = evt.value(),
                    }
                }
                button { class: "btn btn-indigo btn-block", r#type: "submit", "Register" }
            }
        },
    };

    rsx! {
        div { class: "page",
            div { class: "container",
                div { class: "page-header fade-in-up",
                    h1 { class: "page-title",
                        "Registration "
                        span { class: "accent", "Demo" }
                    }
                    p { class: "page-lead",
                        "A small sign-up form. Everything stays in your browser."
                    }
                }

                div { class: "card narrow-card fade-in-up", {body} }
            }
        }
    }
}
