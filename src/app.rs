use dioxus::prelude::*;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// A single-page portfolio: everything lives on `/`, in-page navigation is
/// anchor-based.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
