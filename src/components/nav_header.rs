//! Navigation Header Component
//!
//! Desktop: fixed top bar with the site title and anchor tabs, the active
//! tab underlined by a CSS transition.
//! Mobile: hidden, replaced by the hamburger-driven MobileNav.

use dioxus::prelude::*;

use crate::components::mobile_nav::MobileNav;
use crate::content::NavTab;

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Tabs in page order
    pub tabs: Vec<NavTab>,
    /// Index of the active tab, if any
    pub current: Option<usize>,
    /// Callback when a tab is chosen
    pub on_select: EventHandler<usize>,
    /// Vertical scroll offset of the page, fed by the page's own handler
    pub scroll_y: ReadOnlySignal<f64>,
}

/// Navigation header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    h1 { class: "app-title", "Folio" }
                }

                nav { class: "nav-links",
                    for (idx, tab) in props.tabs.iter().enumerate() {
                        a {
                            key: "{tab.id}",
                            href: "#{tab.id}",
                            class: if props.current == Some(idx) { "nav-link active" } else { "nav-link" },
                            onclick: move |_| on_select.call(idx),
                            "{tab.label}"
                        }
                    }
                }
            }
        }

        // Mobile navigation (hidden on desktop via CSS)
        MobileNav {
            tabs: props.tabs.clone(),
            current: props.current,
            on_select: props.on_select,
            scroll_y: props.scroll_y,
        }
    }
}
