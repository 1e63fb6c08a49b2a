//! Renderer-facing view-model
//!
//! A `SectionView` describes one section's current visual state, derived from
//! the controller's interaction state and the current screen class. The
//! renderer treats each derived sequence as fully replacing the previous one.

use crate::screen::ScreenClass;
use crate::section::Section;

/// Derived visual state for one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// Position in the section sequence
    pub index: usize,
    /// This section is the expanded/selected one
    pub active: bool,
    /// Some section's detail panel is open (true for every view while
    /// expanded, so inactive sections can dim and slide aside)
    pub focused: bool,
    /// Positioned before the active section, pushed aside leftward
    pub shift_left: bool,
    /// In the latter half of the rail; its detail panel opens to the left
    pub is_last: bool,
    /// Title to show on the collapsed rail for the current screen class
    pub display_title: String,
}

impl SectionView {
    pub(crate) fn derive(
        index: usize,
        section: &Section,
        count: usize,
        active_index: Option<usize>,
        expanded: bool,
        screen: ScreenClass,
    ) -> Self {
        let display_title = if screen.uses_short_title() {
            section.short_title.clone()
        } else {
            section.title.clone()
        };
        Self {
            index,
            active: active_index == Some(index),
            focused: expanded,
            shift_left: active_index.is_some_and(|a| index < a),
            is_last: index >= count.div_ceil(2),
            display_title,
        }
    }
}
