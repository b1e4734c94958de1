use std::{rc::Rc, time::Duration};

use async_trait::async_trait;
use dioxus::prelude::*;
use tracing::warn;

use api::{
    contact::{ContactForm, Delay, Field, FormCell, submit},
    email::EmailJsMailer,
};
use site::config::SiteConfig;

// the page's form state lives in a signal; submit() reaches it through this
#[derive(Clone, Copy)]
struct FormSignal(Signal<ContactForm>);

impl FormCell for FormSignal {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut self.0.write())
    }
}

struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn delay(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

#[derive(Clone, PartialEq, Props)]
struct ContactFieldProps {
    form: Signal<ContactForm>,
    field: Field,
    id: &'static str,
    name: &'static str,
    kind: &'static str,
    placeholder: &'static str,
}

// a labelled, required single-line input bound to one field of the form
#[component]
fn ContactField(props: ContactFieldProps) -> Element {
    let mut form = props.form;
    let field = props.field;
    let value = form.read().input.get(field).to_owned();

    rsx! {
        div {
            label { class: "form-label", r#for: props.id, "{field.label()}" }
            input {
                class: "form-input",
                r#type: props.kind,
                id: props.id,
                name: props.name,
                value: "{value}",
                placeholder: props.placeholder,
                required: true,
                oninput: move |evt| form.write().input.set(field, evt.value()),
            }
        }
    }
}

#[component]
fn ContactInfo() -> Element {
    let config = use_context::<SiteConfig>();
    let profile = &config.profile;

    rsx! {
        div { class: "card panel",
            h2 { class: "panel-title", "Contact Information" }

            div { class: "contact-item",
                div { class: "contact-icon", "✉" }
                div {
                    h3 { "Email" }
                    p { "{profile.email}" }
                }
            }
            div { class: "contact-item",
                div { class: "contact-icon", "☎" }
                div {
                    h3 { "Phone" }
                    p { "{profile.phone}" }
                }
            }
            div { class: "contact-item",
                div { class: "contact-icon", "⌖" }
                div {
                    h3 { "Location" }
                    p { "{profile.location}" }
                }
            }

            if !profile.availability.is_empty() {
                div { class: "availability",
                    h3 { "Availability" }
                    for line in profile.availability.iter() {
                        p { key: "{line}", "{line}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();

    // dropped with the page, which also drops any submission still in flight
    let mut contact = use_signal(ContactForm::default);
    let mailer = use_hook(|| Rc::new(EmailJsMailer::new(config.emailjs.clone())));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let mailer = mailer.clone();
        spawn(async move {
            let mut cell = FormSignal(contact);
            if let Err(err) = submit(&mut cell, &*mailer, &TimerDelay).await {
                warn!("contact form not sent: {err}");
            }
        });
    };

    let state = contact.read().state.clone();
    let message = contact.read().input.message.clone();

    rsx! {
        div { class: "page",
            div { class: "container narrow",
                div { class: "page-header fade-in-up",
                    h1 { class: "page-title",
                        "Get in "
                        span { class: "accent", "Touch" }
                    }
                    p { class: "page-lead",
                        "Have a project in mind or want to collaborate? Feel free to reach out through the form below."
                    }
                }

                div { class: "contact-layout",
                    div { class: "fade-in-left", style: "animation-delay: 0.2s;", ContactInfo {} }

                    div { class: "fade-in-right", style: "animation-delay: 0.4s;",
                        div { class: "card panel",
                            if let Some(error) = state.error() {
                                div { class: "alert-error",
                                    p { "{error}" }
                                }
                            }

                            if state.is_sent() {
                                div { class: "sent-panel",
                                    div { class: "sent-icon", "✔" }
                                    h3 { "Message Sent Successfully!" }
                                    p {
                                        "Thank you for your message. I'll get back to you as soon as possible."
                                    }
                                }
                            } else {
                                form { class: "form-stack", onsubmit,
                                    div { class: "form-grid two-up",
                                        ContactField {
                                            form: contact,
                                            field: Field::FromName,
                                            id: "name",
                                            name: "from_name",
                                            kind: "text",
                                            placeholder: "Your name",
                                        }
                                        ContactField {
                                            form: contact,
                                            field: Field::ReplyTo,
                                            id: "email",
                                            name: "reply_to",
                                            kind: "email",
                                            placeholder: "Your email address",
                                        }
                                    }

                                    ContactField {
                                        form: contact,
                                        field: Field::Subject,
                                        id: "subject",
                                        name: "subject",
                                        kind: "text",
                                        placeholder: "Subject of your message",
                                    }

                                    div {
                                        label { class: "form-label", r#for: "message", "{Field::Message.label()}" }
                                        textarea {
                                            class: "form-textarea",
                                            id: "message",
                                            name: "message",
                                            rows: "6",
                                            value: "{message}",
                                            placeholder: "Your message",
                                            required: true,
                                            oninput: move |evt| contact.write().input.set(Field::Message, evt.value()),
                                        }
                                    }

                                    button {
                                        class: "btn btn-indigo btn-block",
                                        r#type: "submit",
                                        disabled: state.is_sending(),
                                        if state.is_sending() {
                                            span { class: "spinner" }
                                            "Sending..."
                                        } else {
                                            "➤ Send Message"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
