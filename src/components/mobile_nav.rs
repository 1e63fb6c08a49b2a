//! Mobile Navigation Component
//!
//! Hamburger button that opens a slide-in menu with a dimmed backdrop. The
//! hamburger hides while the page scrolls down and reappears on the first
//! upward scroll; both behaviors are owned by `folio_core::NavMenu`, fed by
//! a `ScrollWatcher` scoped to this component's lifetime.

use dioxus::prelude::*;
use folio_core::{NavMenu, ScrollWatcher};

use crate::content::NavTab;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Tabs in page order
    pub tabs: Vec<NavTab>,
    /// Index of the active tab, if any
    pub current: Option<usize>,
    /// Callback when a tab is chosen
    pub on_select: EventHandler<usize>,
    /// Vertical scroll offset of the page
    pub scroll_y: ReadOnlySignal<f64>,
}

/// Slide-in mobile navigation menu
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let mut menu = use_signal(NavMenu::new);
    let mut watcher = use_signal(ScrollWatcher::new);
    let scroll_y = props.scroll_y;
    let on_select = props.on_select;

    // Re-runs on every scroll offset the page reports; the watcher turns
    // offsets into directions, the menu turns directions into icon state.
    use_effect(move || {
        let offset = scroll_y();
        if let Some(direction) = watcher.write().observe(offset) {
            menu.write().on_scroll(direction);
        }
    });

    let state = menu();

    rsx! {
        if state.icon_visible() && !state.is_open() {
            button {
                class: "hamburger",
                "aria-label": "open navigation menu",
                onclick: move |_| menu.write().open(),
                {hamburger_icon()}
            }
        }

        if state.is_open() {
            div {
                class: "mobile-backdrop",
                "aria-label": "backdrop",
                onclick: move |_| menu.write().close(),
            }
            nav { class: "mobile-menu", "aria-label": "mobile navigation",
                button {
                    class: "mobile-menu-close",
                    "aria-label": "close navigation menu",
                    onclick: move |_| menu.write().close(),
                    {close_icon()}
                }
                for (idx, tab) in props.tabs.iter().enumerate() {
                    a {
                        key: "{tab.id}",
                        href: "#{tab.id}",
                        class: if props.current == Some(idx) { "mobile-tab active" } else { "mobile-tab" },
                        onclick: move |_| {
                            menu.write().close();
                            on_select.call(idx);
                        },
                        h3 { "{tab.label}" }
                    }
                }
            }
        }
    }
}

fn hamburger_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "22",
            height: "22",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M4 6h16" }
            path { d: "M4 12h16" }
            path { d: "M4 18h16" }
        }
    }
}

fn close_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
