//! Horizontal Accordion Component
//!
//! Renders the view-model derived by `folio_core::AccordionController`:
//! a collapsed rail of sections that expands an in-rail detail panel on
//! desktop and tablet, and a full-screen swipeable carousel on small
//! screens. All interaction state lives in the controller; this component
//! only forwards events and draws whatever the view-model says. Animation
//! timing is entirely CSS.

use std::time::Instant;

use dioxus::prelude::*;
use folio_core::{
    AccordionController, Breakpoints, FolioError, ListItem, ScreenClass, Section, SectionView,
};

#[derive(Props, Clone, PartialEq)]
pub struct HorizontalAccordionProps {
    /// Accordion content, in rail order
    pub sections: Vec<Section>,
}

/// Horizontal accordion of portfolio sections
#[component]
pub fn HorizontalAccordion(props: HorizontalAccordionProps) -> Element {
    let mut controller: Signal<Result<AccordionController, FolioError>> =
        use_signal(|| AccordionController::new(props.sections.clone()));
    let mut width = use_signal(|| 1280.0f64);
    // Drag origin of an in-flight carousel gesture: (x, start time)
    let mut drag_origin: Signal<Option<(f64, Instant)>> = use_signal(|| None);

    let screen = Breakpoints::default().classify(width());

    // Snapshot the derived state before building the tree; handlers below
    // re-enter the controller through the signal.
    let snapshot = {
        let guard = controller.read();
        match guard.as_ref() {
            Ok(ctrl) => Some((
                ctrl.view_model(screen),
                ctrl.sections().to_vec(),
                ctrl.active_index()
                    .and_then(|i| ctrl.section(i).cloned().map(|s| (i, s))),
                ctrl.is_expanded(),
                ctrl.last_direction(),
            )),
            Err(e) => {
                tracing::error!(error = %e, "accordion has no sections to render");
                None
            }
        }
    };
    let Some((views, sections, active_section, expanded, last_direction)) = snapshot else {
        return rsx! {};
    };

    let mut select = move |index: usize| {
        if let Ok(ctrl) = controller.write().as_mut() {
            if let Err(e) = ctrl.select_or_toggle(index) {
                tracing::error!(error = %e, index, "section select rejected");
            }
        }
    };
    let mut paginate = move |direction: i8| {
        if let Ok(ctrl) = controller.write().as_mut() {
            if let Err(e) = ctrl.paginate(direction) {
                tracing::error!(error = %e, direction, "pagination rejected");
            }
        }
    };

    let slide = active_section
        .as_ref()
        .map(|(i, _)| slide_class(last_direction, &views, *i))
        .unwrap_or_default();
    let small_carousel = screen == ScreenClass::Small && active_section.is_some();
    let hide_rail = screen == ScreenClass::Small && expanded;

    rsx! {
        div {
            class: "accordion",
            onresize: move |evt| {
                match evt.data().get_border_box_size() {
                    Ok(size) => width.set(size.width),
                    Err(e) => tracing::debug!("resize report unreadable: {e:?}"),
                }
            },
            onvisible: move |evt| {
                let visible = evt.data().is_intersecting().unwrap_or(false);
                if let Ok(ctrl) = controller.write().as_mut() {
                    ctrl.set_visible(visible);
                }
            },

            if small_carousel {
                if let Some((index, ref section)) = active_section {
                    button {
                        class: "carousel-arrow left",
                        "aria-label": "previous section",
                        onclick: move |_| paginate(-1),
                        {arrow_icon(false)}
                    }
                    div {
                        key: "{index}",
                        class: "carousel-card {slide}",
                        onpointerdown: move |evt| {
                            drag_origin.set(Some((evt.data().client_coordinates().x, Instant::now())));
                        },
                        onpointerup: move |evt| {
                            let Some((start_x, started)) = drag_origin() else { return };
                            drag_origin.set(None);
                            let offset = evt.data().client_coordinates().x - start_x;
                            let elapsed = started.elapsed().as_secs_f64().max(1e-3);
                            let velocity = offset / elapsed;
                            if let Ok(ctrl) = controller.write().as_mut() {
                                if let Err(e) = ctrl.end_swipe(offset, velocity) {
                                    tracing::error!(error = %e, "swipe report rejected");
                                }
                            }
                        },
                        div { class: "carousel-image-frame",
                            img {
                                class: "section-image",
                                src: "{section.image}",
                                alt: "{section.title}",
                                draggable: false,
                            }
                        }
                    }
                    button {
                        class: "carousel-arrow right",
                        "aria-label": "next section",
                        onclick: move |_| paginate(1),
                        {arrow_icon(true)}
                    }
                    button {
                        class: "carousel-close",
                        "aria-label": "close section",
                        onclick: move |_| {
                            if let Ok(ctrl) = controller.write().as_mut() {
                                ctrl.close();
                            }
                        },
                        {close_icon()}
                    }
                }
            }

            if !hide_rail {
                div { class: "accordion-rail",
                    for (view, section) in views.iter().zip(sections.iter()) {
                        {
                            let index = view.index;
                            let view = view.clone();
                            let section = section.clone();
                            rsx! {
                                div {
                                    key: "{index}",
                                    class: "{section_classes(&view)}",

                                    if view.active && screen != ScreenClass::Small {
                                        div { class: "section-content",
                                            h2 { class: "title-main", "{section.title}" }
                                            if let Some(ref subtitle) = section.subtitle {
                                                h3 { class: "title-sub", "{subtitle}" }
                                            }
                                            SectionContentList { items: section.items.clone() }
                                        }
                                    }

                                    div {
                                        class: "section-image-frame",
                                        onclick: move |_| select(index),
                                        img {
                                            class: "section-image",
                                            src: "{section.image}",
                                            alt: "{section.title}",
                                            draggable: false,
                                        }
                                    }
                                    div { class: "section-name",
                                        h6 { "{view.display_title}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        // Small screens show the active section's text below the carousel
        if small_carousel {
            if let Some((_, ref section)) = active_section {
                div { class: "carousel-content",
                    h2 { class: "title-main", "{section.title}" }
                    if let Some(ref subtitle) = section.subtitle {
                        h3 { class: "title-sub", "{subtitle}" }
                    }
                    SectionContentList { items: section.items.clone() }
                }
            }
        }
    }
}

/// Detail list of the expanded section
#[component]
fn SectionContentList(items: Vec<ListItem>) -> Element {
    rsx! {
        ul { class: "content-list",
            for (i, item) in items.iter().enumerate() {
                li { key: "{i}", class: "content-list-item",
                    if let Some(ref title) = item.title {
                        h3 { class: "title-line-item", "{title}" }
                    }
                    "{item.description}"
                }
            }
        }
    }
}

/// CSS classes for one rail section, straight from its view-model flags
fn section_classes(view: &SectionView) -> String {
    let mut classes = String::from("accordion-section");
    if view.active {
        classes.push_str(" active");
    }
    if view.focused {
        classes.push_str(" focused");
    }
    if view.shift_left {
        classes.push_str(" shift-left");
    }
    if view.is_last {
        classes.push_str(" is-last");
    }
    classes
}

/// Which side the carousel card slides in from
///
/// Pagination direction wins; a direct selection falls back to the
/// positional split of the rail.
fn slide_class(last_direction: i8, views: &[SectionView], active_index: usize) -> &'static str {
    if last_direction > 0 {
        "slide-from-right"
    } else if last_direction < 0 {
        "slide-from-left"
    } else if views.get(active_index).is_some_and(|v| v.is_last) {
        "slide-from-left"
    } else {
        "slide-from-right"
    }
}

fn arrow_icon(forward: bool) -> Element {
    let d = if forward { "m9 18 6-6-6-6" } else { "m15 18-6-6 6-6" };
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "28",
            height: "28",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "{d}" }
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
