//! Section content types
//!
//! A `Section` is one entry in the horizontal accordion (a job, a project),
//! with a full and a shortened title, an image reference, and an ordered list
//! of detail items. Sections are supplied by the caller at controller
//! construction and are immutable from the core's perspective; a section's
//! identity is its position in the supplied sequence.

use serde::{Deserialize, Serialize};

/// One line in a section's detail list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Optional heading shown above the description
    #[serde(default)]
    pub title: Option<String>,
    /// Body text of the item
    pub description: String,
}

impl ListItem {
    /// Create an item with only a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: description.into(),
        }
    }

    /// Set the item heading
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// One accordion entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Full title, shown on large screens
    pub title: String,
    /// Shortened title, shown on the collapsed rail of smaller screens
    pub short_title: String,
    /// Optional subtitle under the title in the expanded panel
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Opaque image reference (asset path or URL), resolved by the renderer
    pub image: String,
    /// Ordered detail items
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl Section {
    /// Create a section with the required fields
    pub fn new(
        title: impl Into<String>,
        short_title: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            short_title: short_title.into(),
            subtitle: None,
            image: image.into(),
            items: Vec::new(),
        }
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Append a detail item
    pub fn with_item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builders() {
        let section = Section::new("Acme Corp", "Acme", "images/acme.webp")
            .with_subtitle("Senior Engineer, 2021-2024")
            .with_item(ListItem::new("Shipped the billing pipeline"))
            .with_item(ListItem::new("Owned the on-call rotation").with_title("Operations"));

        assert_eq!(section.title, "Acme Corp");
        assert_eq!(section.short_title, "Acme");
        assert_eq!(section.subtitle.as_deref(), Some("Senior Engineer, 2021-2024"));
        assert_eq!(section.items.len(), 2);
        assert!(section.items[0].title.is_none());
        assert_eq!(section.items[1].title.as_deref(), Some("Operations"));
    }

    #[test]
    fn test_section_json_optional_fields() {
        // Content files may omit subtitle and items entirely
        let json = r#"{ "title": "Side Projects", "short_title": "Projects", "image": "images/projects.webp" }"#;
        let section: Section = serde_json::from_str(json).unwrap();

        assert!(section.subtitle.is_none());
        assert!(section.items.is_empty());
    }
}
