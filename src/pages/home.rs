//! Home page - the whole single-page portfolio.
//!
//! Hero, experience accordion, about and contact sections, all reachable via
//! anchor navigation. The page owns the scroll container and feeds its
//! offset to the navigation components.

use dioxus::document;
use dioxus::prelude::*;

use crate::components::{HorizontalAccordion, NavHeader};
use crate::content;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let tabs = content::nav_tabs();
    let mut current_tab: Signal<Option<usize>> = use_signal(|| Some(0));
    let mut scroll_y = use_signal(|| 0.0f64);

    rsx! {
        div {
            id: "page",
            class: "page",
            onscroll: move |_| {
                spawn(async move {
                    match document::eval("return document.getElementById('page').scrollTop;").await {
                        Ok(value) => {
                            if let Some(y) = value.as_f64() {
                                scroll_y.set(y);
                            }
                        }
                        Err(e) => tracing::debug!("scroll offset eval failed: {e:?}"),
                    }
                });
            },

            NavHeader {
                tabs: tabs.clone(),
                current: current_tab(),
                on_select: move |idx| current_tab.set(Some(idx)),
                scroll_y,
            }

            main {
                section { id: "home", class: "hero",
                    h1 { class: "hero-name", "Jordan Vale" }
                    p { class: "hero-tagline", "software engineer · systems, tools, and the web" }
                    a { class: "hero-cta", href: "#experience", "see my work" }
                }

                section { id: "experience", class: "page-section",
                    h2 { class: "section-header", "Experience" }
                    HorizontalAccordion { sections: crate::get_sections() }
                }

                section { id: "about", class: "page-section",
                    h2 { class: "section-header", "About" }
                    p { class: "body-text",
                        "I build software that earns its keep: data pipelines that stay up, "
                        "tools that stay out of the way, and interfaces that explain themselves. "
                        "Away from a keyboard I climb, bake bread badly, and read more RFCs "
                        "than is strictly healthy."
                    }
                }

                section { id: "contact", class: "page-section",
                    h2 { class: "section-header", "Contact" }
                    div { class: "contact-links",
                        a { class: "contact-link", href: "mailto:hello@jordanvale.dev", "email" }
                        a { class: "contact-link", href: "https://github.com/jordanvale", "github" }
                        a { class: "contact-link", href: "https://linkedin.com/in/jordanvale", "linkedin" }
                    }
                }
            }

            footer { class: "page-footer",
                p { "built with Rust and Dioxus" }
            }
        }
    }
}
