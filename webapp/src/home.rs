use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{config::SiteConfig, content::HIGHLIGHTS};

use crate::Route;
use crate::common::{dom::scroll_to_section, entrance_delay};

const HIGHLIGHTS_ID: &str = "highlights";

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    let profile = &config.profile;
    let mailto = profile.mailto();

    rsx! {
        div { class: "home-container",
            // Hero section
            section { class: "hero",
                div { class: "hero-content fade-in-up",
                    div { class: "avatar",
                        img { src: "{profile.avatar}", alt: "{profile.name} Profile" }
                    }

                    h1 { class: "hero-title",
                        span { class: "accent", "Hello, I'm" }
                        " {profile.name}"
                    }
                    p { class: "hero-subtitle", "{profile.tagline}" }

                    div { class: "social-links",
                        a {
                            class: "icon-button",
                            href: "{profile.github}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "GitHub",
                            "GH"
                        }
                        a {
                            class: "icon-button",
                            href: "{profile.linkedin}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "LinkedIn",
                            "in"
                        }
                        a {
                            class: "icon-button",
                            href: "{mailto}",
                            aria_label: "Email",
                            "✉"
                        }
                    }

                    div { class: "hero-actions",
                        Link {
                            to: Route::Projects {},
                            class: "btn btn-primary btn-grow",
                            "View Projects"
                        }
                        Link {
                            to: Route::Contact {},
                            class: "btn btn-outline btn-grow",
                            "Contact Me"
                        }
                    }
                }

                div { class: "scroll-hint",
                    button {
                        class: "icon-button",
                        r#type: "button",
                        aria_label: "Scroll down",
                        onclick: move |_| scroll_to_section(HIGHLIGHTS_ID),
                        "↓"
                    }
                }
            }

            // Highlights section
            section { id: HIGHLIGHTS_ID, class: "highlights",
                div { class: "container",
                    div { class: "section-header fade-in",
                        h2 { class: "section-title",
                            "My "
                            span { class: "accent", "Expertise" }
                        }
                        p { class: "section-lead",
                            "Here are some of the areas I specialize in, combining both design and technical skills."
                        }
                    }

                    div { class: "highlight-grid",
                        for (i , item) in HIGHLIGHTS.iter().enumerate() {
                            div {
                                key: "{item.title}",
                                class: "highlight-card fade-in-up",
                                style: entrance_delay(i, 0.2),
                                div { class: "highlight-icon", "{item.icon}" }
                                h3 { class: "highlight-title", "{item.title}" }
                                p { class: "highlight-desc", "{item.description}" }
                            }
                        }
                    }
                }
            }

            // Call to action
            section { class: "cta",
                div { class: "container fade-in",
                    h2 { class: "cta-title", "Interested in working together?" }
                    p { class: "cta-lead",
                        "Let's discuss how I can help you achieve your goals with my technical expertise and creative problem-solving skills."
                    }
                    Link { to: Route::Contact {}, class: "btn btn-grow", "Get in Touch" }
                }
            }
        }
    }
}
