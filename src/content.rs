//! Portfolio content
//!
//! The built-in sections shown in the accordion, the navigation tabs, and
//! loading of a user-supplied JSON content file.

use std::fs;
use std::path::Path;

use folio_core::{ListItem, Section};

/// One entry in the top navigation bar, pointing at an in-page anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    /// Anchor id of the target page section
    pub id: &'static str,
    /// Label shown in the tab
    pub label: &'static str,
}

/// Navigation tabs, in page order
pub fn nav_tabs() -> Vec<NavTab> {
    vec![
        NavTab { id: "home", label: "Home" },
        NavTab { id: "experience", label: "Experience" },
        NavTab { id: "about", label: "About" },
        NavTab { id: "contact", label: "Contact" },
    ]
}

/// Built-in portfolio sections
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("Meridian Systems", "Meridian", "assets/images/meridian.webp")
            .with_subtitle("Senior Software Engineer · 2021 — present")
            .with_item(
                ListItem::new(
                    "Designed and shipped the ingestion pipeline that consolidated three \
                     legacy ETL stacks into one streaming service.",
                )
                .with_title("Data Platform"),
            )
            .with_item(ListItem::new(
                "Led the migration of the billing service to event sourcing, cutting \
                 reconciliation incidents to near zero.",
            ))
            .with_item(ListItem::new(
                "Mentored four engineers through their first production launches.",
            )),
        Section::new("Halcyon Labs", "Halcyon", "assets/images/halcyon.webp")
            .with_subtitle("Software Engineer · 2018 — 2021")
            .with_item(
                ListItem::new(
                    "Built the realtime collaboration layer behind the shared whiteboard \
                     product.",
                )
                .with_title("Collaboration"),
            )
            .with_item(ListItem::new(
                "Introduced contract testing between the web client and the API, catching \
                 breaking changes before release.",
            )),
        Section::new("Crane & Porter Consulting", "Consulting", "assets/images/crane.webp")
            .with_subtitle("Contract work · 2016 — 2018")
            .with_item(ListItem::new(
                "Delivered bespoke inventory and booking systems for small businesses, \
                 from first call to deployment.",
            ))
            .with_item(ListItem::new(
                "Rescued a stalled warehouse-management rollout and brought it live in \
                 eight weeks.",
            )),
        Section::new("Open Source & Side Projects", "Open Source", "assets/images/oss.webp")
            .with_item(
                ListItem::new(
                    "Maintainer of a terminal-based time tracker with a small but loyal \
                     user base.",
                )
                .with_title("Maintainer"),
            )
            .with_item(ListItem::new(
                "Regular contributor to parser and CLI tooling libraries.",
            )),
    ]
}

/// Load sections from a JSON file (an array of section objects)
pub fn load_sections(path: &Path) -> anyhow::Result<Vec<Section>> {
    let raw = fs::read_to_string(path)?;
    let sections: Vec<Section> = serde_json::from_str(&raw)?;
    anyhow::ensure!(!sections.is_empty(), "content file contains no sections");
    Ok(sections)
}
