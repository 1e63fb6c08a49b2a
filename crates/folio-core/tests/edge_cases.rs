//! End-to-end scenarios for the accordion interaction contract

use folio_core::{AccordionController, Breakpoints, ListItem, ScreenClass, Section};

fn work_history() -> Vec<Section> {
    vec![
        Section::new("Orbital Dynamics Ltd", "Orbital", "images/orbital.webp")
            .with_subtitle("Systems Engineer, 2018-2020")
            .with_item(ListItem::new("Built telemetry ingestion")),
        Section::new("Nimbus Analytics", "Nimbus", "images/nimbus.webp")
            .with_item(ListItem::new("Dashboard platform").with_title("Platform")),
        Section::new("Freelance Consulting", "Freelance", "images/freelance.webp"),
        Section::new("Open Source", "OSS", "images/oss.webp"),
    ]
}

#[test]
fn select_then_paginate_forward_wraps_to_start() {
    // 4 sections: select 1, three forward steps land on 0
    let mut ctrl = AccordionController::new(work_history()).unwrap();

    ctrl.select_or_toggle(1).unwrap();
    assert_eq!(ctrl.active_index(), Some(1));
    assert!(ctrl.is_expanded());

    ctrl.paginate(1).unwrap();
    assert_eq!(ctrl.active_index(), Some(2));
    assert_eq!(ctrl.last_direction(), 1);

    ctrl.paginate(1).unwrap();
    ctrl.paginate(1).unwrap();
    assert_eq!(ctrl.active_index(), Some(0));
}

#[test]
fn rail_split_for_five_sections() {
    let mut five = work_history();
    five.push(Section::new("Teaching", "Teaching", "images/teaching.webp"));
    let ctrl = AccordionController::new(five).unwrap();

    let views = ctrl.view_model(ScreenClass::Large);
    let split: Vec<bool> = views.iter().map(|v| v.is_last).collect();
    assert_eq!(split, vec![false, false, false, true, true]);
}

#[test]
fn leaving_viewport_closes_expanded_panel() {
    let mut ctrl = AccordionController::new(work_history()).unwrap();
    ctrl.select_or_toggle(2).unwrap();

    ctrl.set_visible(false);
    assert_eq!(ctrl.active_index(), None);
    assert!(!ctrl.is_expanded());
}

#[test]
fn swipe_power_threshold_boundary() {
    let mut ctrl = AccordionController::new(work_history()).unwrap();
    ctrl.select_or_toggle(1).unwrap();

    // 900 x 12 = 10800 over the threshold, leftward: advance
    ctrl.end_swipe(-900.0, -12.0).unwrap();
    assert_eq!(ctrl.active_index(), Some(2));

    // 900 x 10 = 9000 under the threshold: spring back, no pagination
    ctrl.end_swipe(-900.0, -10.0).unwrap();
    assert_eq!(ctrl.active_index(), Some(2));
}

#[test]
fn swipe_before_any_selection_is_ignored() {
    let mut ctrl = AccordionController::new(work_history()).unwrap();

    ctrl.end_swipe(-1500.0, -20.0).unwrap();
    assert_eq!(ctrl.active_index(), None);
    assert!(!ctrl.is_expanded());
}

#[test]
fn active_section_content_follows_pagination() {
    let mut ctrl = AccordionController::new(work_history()).unwrap();
    ctrl.select_or_toggle(0).unwrap();
    assert_eq!(ctrl.active_section().unwrap().title, "Orbital Dynamics Ltd");

    ctrl.paginate(-1).unwrap();
    assert_eq!(ctrl.active_section().unwrap().title, "Open Source");
}

#[test]
fn titles_shorten_below_the_large_breakpoint() {
    let ctrl = AccordionController::new(work_history()).unwrap();
    let bp = Breakpoints::default();

    let desktop = ctrl.view_model(bp.classify(1920.0));
    assert_eq!(desktop[0].display_title, "Orbital Dynamics Ltd");

    let tablet = ctrl.view_model(bp.classify(1280.0));
    assert_eq!(tablet[0].display_title, "Orbital");

    let phone = ctrl.view_model(bp.classify(390.0));
    assert_eq!(phone[3].display_title, "OSS");
}

#[test]
fn direct_selection_direction_is_relative_position() {
    let mut ctrl = AccordionController::new(work_history()).unwrap();

    ctrl.select_or_toggle(3).unwrap();
    assert_eq!(ctrl.last_direction(), 0);

    ctrl.select_or_toggle(0).unwrap();
    assert_eq!(ctrl.last_direction(), -1);

    ctrl.select_or_toggle(2).unwrap();
    assert_eq!(ctrl.last_direction(), 1);
}
