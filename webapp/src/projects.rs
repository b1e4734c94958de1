use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::content::{GRID_TAG_LIMIT, ProjectEntry, featured_project, grid_projects};

use crate::Route;
use crate::common::entrance_delay;

#[derive(Clone, PartialEq, Props)]
struct ProjectLinksProps {
    project: &'static ProjectEntry,
}

#[component]
fn ProjectLinks(props: ProjectLinksProps) -> Element {
    let project = props.project;

    rsx! {
        div { class: "project-links",
            a {
                href: project.github_url,
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "GitHub repository",
                "Code"
            }
            a {
                href: project.demo_url,
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "Live demo",
                "Demo ↗"
            }
        }
    }
}

// the large card at the top, showing every tag
#[derive(Clone, PartialEq, Props)]
struct FeaturedProjectProps {
    project: &'static ProjectEntry,
}

#[component]
fn FeaturedProject(props: FeaturedProjectProps) -> Element {
    let project = props.project;
    let image = project.image_src(0);

    rsx! {
        div { class: "card featured fade-in", style: entrance_delay(1, 0.2),
            div { class: "featured-body",
                div { class: "featured-image",
                    img { src: "{image}", alt: project.title }
                }
                div { class: "featured-info",
                    div { class: "project-heading",
                        h2 { class: "project-title", "{project.title}" }
                        ProjectLinks { project }
                    }
                    p { class: "project-desc", "{project.description}" }
                    div { class: "tag-list", style: "margin-bottom: var(--space-6);",
                        for tech in project.technologies.iter() {
                            span { key: "{tech}", class: "tag", "{tech}" }
                        }
                    }
                    Link {
                        to: Route::Register {},
                        class: "btn btn-indigo",
                        "View Registration Demo"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: &'static ProjectEntry,
    // slot in the grid, drives the entrance stagger and the placeholder number
    index: usize,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let image = project.image_src(props.index + 1);
    let tags = project.tag_summary(GRID_TAG_LIMIT);

    rsx! {
        div {
            class: "card fade-in-up",
            style: entrance_delay(props.index, 0.1),
            div { class: "project-image",
                img { src: "{image}", alt: project.title }
            }
            div { class: "project-info",
                div { class: "project-heading",
                    h3 { class: "project-title", "{project.title}" }
                    ProjectLinks { project }
                }
                p { class: "project-desc", "{project.description}" }
                div { class: "tag-list",
                    for tech in tags.shown.iter() {
                        span { key: "{tech}", class: "tag tag-sm", "{tech}" }
                    }
                    if let Some(hidden) = tags.overflow {
                        span { class: "tag tag-sm", "+{hidden}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        div { class: "page",
            div { class: "container",
                div { class: "page-header fade-in-up",
                    h1 { class: "page-title",
                        "My "
                        span { class: "accent", "Projects" }
                    }
                    p { class: "page-lead",
                        "Here's a selection of my recent work that showcases my skills and passion for building exceptional web applications."
                    }
                }

                if let Some(project) = featured_project() {
                    FeaturedProject { project }
                }

                div { class: "project-grid",
                    for (index , project) in grid_projects().iter().enumerate() {
                        ProjectCard { key: "{project.id}", project, index }
                    }
                }

                div { class: "closing fade-in",
                    p {
                        "Interested in seeing how I build a registration form? Check out my live demo:"
                    }
                    Link { to: Route::Register {}, class: "btn btn-indigo", "Go to Registration Form" }
                }
            }
        }
    }
}
