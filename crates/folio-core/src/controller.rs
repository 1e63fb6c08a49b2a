//! Accordion interaction state machine
//!
//! `AccordionController` is the single authoritative owner of the accordion's
//! interaction state. Every mutation goes through its action methods, all of
//! them synchronous and invoked from the hosting UI's event loop; the
//! renderer re-derives the view-model after each one. Transition timing
//! (fades, slides, spring-back of a non-committal drag) lives entirely in
//! the renderer's CSS layer.

use crate::error::{FolioError, FolioResult};
use crate::pagination::paginate_index;
use crate::screen::ScreenClass;
use crate::section::Section;
use crate::view::SectionView;

/// Minimum swipe power (|drag offset| x release velocity) that commits a
/// gesture to pagination. Anything weaker is a non-committal drag and the
/// view springs back. Tunable, independent of viewport size.
pub const SWIPE_CONFIDENCE_THRESHOLD: f64 = 10_000.0;

/// Scalar combining drag distance and velocity; sign follows the velocity
pub fn swipe_power(offset: f64, velocity: f64) -> f64 {
    offset.abs() * velocity
}

/// Mutable interaction state, owned exclusively by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct InteractionState {
    /// Currently expanded section, if any
    active_index: Option<usize>,
    /// Whether a detail panel is visible
    expanded: bool,
    /// Sign of the most recent navigation step; picks the carousel
    /// slide-in side for the next active section
    last_direction: i8,
}

/// Owner of all accordion interaction state
///
/// Constructed once with the (immutable) section content; discarded when the
/// hosting component unmounts.
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionController {
    sections: Vec<Section>,
    state: InteractionState,
}

impl AccordionController {
    /// Create a controller at rest (nothing active, nothing expanded)
    ///
    /// Fails with [`FolioError::NoSections`] for an empty sequence, since
    /// pagination is meaningless over zero sections.
    pub fn new(sections: Vec<Section>) -> FolioResult<Self> {
        if sections.is_empty() {
            return Err(FolioError::NoSections);
        }
        Ok(Self {
            sections,
            state: InteractionState::default(),
        })
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; the constructor rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The section content, in rail order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The section content at `index`, if in range
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Content of the currently active section, if any
    pub fn active_section(&self) -> Option<&Section> {
        self.state.active_index.and_then(|i| self.sections.get(i))
    }

    /// Currently active section index
    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index
    }

    /// Whether a detail panel is visible
    pub fn is_expanded(&self) -> bool {
        self.state.expanded
    }

    /// Sign of the most recent navigation step (-1, 0, +1)
    pub fn last_direction(&self) -> i8 {
        self.state.last_direction
    }

    /// Select a section, or close it if it is already the active one
    ///
    /// Selecting records the travel direction relative to the previously
    /// active section (0 when nothing was active; the slide-in side then
    /// falls to the positional `is_last` split in the view-model).
    /// Re-selecting the active index is the defined way to close and never
    /// fails; an out-of-range index does.
    pub fn select_or_toggle(&mut self, index: usize) -> FolioResult<()> {
        let count = self.sections.len();
        if index >= count {
            return Err(FolioError::IndexOutOfRange { index, count });
        }

        match self.state.active_index {
            Some(active) if active == index => {
                tracing::debug!(index, "toggled active section closed");
                self.close();
            }
            previous => {
                self.state.last_direction = match previous {
                    Some(p) if index > p => 1,
                    Some(_) => -1,
                    None => 0,
                };
                self.state.active_index = Some(index);
                self.state.expanded = true;
                tracing::debug!(index, ?previous, "selected section");
            }
        }
        Ok(())
    }

    /// Step the active section by a unit direction, wrapping at both ends
    ///
    /// No-op when nothing is active. Fails only on a non-unit direction.
    pub fn paginate(&mut self, direction: i8) -> FolioResult<()> {
        if direction != -1 && direction != 1 {
            return Err(FolioError::InvalidDirection(direction));
        }
        let Some(active) = self.state.active_index else {
            return Ok(());
        };

        let next = paginate_index(active, direction, self.sections.len())?;
        self.state.active_index = Some(next);
        self.state.last_direction = direction;
        tracing::debug!(from = active, to = next, direction, "paginated");
        Ok(())
    }

    /// Close the detail panel and deactivate immediately
    pub fn close(&mut self) {
        self.state.expanded = false;
        self.state.active_index = None;
    }

    /// Visibility-observer hook: leaving the viewport closes the accordion
    ///
    /// Prevents an expanded panel from lingering once scrolled away. The
    /// only externally triggered mutation; entering the viewport changes
    /// nothing.
    pub fn set_visible(&mut self, visible: bool) {
        if !visible && (self.state.expanded || self.state.active_index.is_some()) {
            tracing::debug!("container left viewport, auto-closing");
            self.close();
        }
    }

    /// Gesture-end hook for the small-screen carousel
    ///
    /// The renderer measures cumulative horizontal drag offset and release
    /// velocity and forwards them once per gesture. A swipe power beyond the
    /// confidence threshold paginates (leftward swipe advances); anything
    /// else, including non-finite measurements, is a no-op.
    pub fn end_swipe(&mut self, offset: f64, velocity: f64) -> FolioResult<()> {
        let power = swipe_power(offset, velocity);
        if !power.is_finite() {
            tracing::debug!(offset, velocity, "ignoring non-finite swipe report");
            return Ok(());
        }

        if power < -SWIPE_CONFIDENCE_THRESHOLD {
            self.paginate(1)
        } else if power > SWIPE_CONFIDENCE_THRESHOLD {
            self.paginate(-1)
        } else {
            Ok(())
        }
    }

    /// Derive the per-section view-model for the given screen class
    ///
    /// Pure: no side effects, identical output for identical state.
    pub fn view_model(&self, screen: ScreenClass) -> Vec<SectionView> {
        let count = self.sections.len();
        self.sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                SectionView::derive(
                    index,
                    section,
                    count,
                    self.state.active_index,
                    self.state.expanded,
                    screen,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::ListItem;

    fn sections(n: usize) -> Vec<Section> {
        (0..n)
            .map(|i| {
                Section::new(format!("Section {i}"), format!("S{i}"), format!("img/{i}.webp"))
                    .with_item(ListItem::new(format!("detail {i}")))
            })
            .collect()
    }

    fn controller(n: usize) -> AccordionController {
        AccordionController::new(sections(n)).unwrap()
    }

    #[test]
    fn test_starts_at_rest() {
        let ctrl = controller(4);
        assert_eq!(ctrl.active_index(), None);
        assert!(!ctrl.is_expanded());
        assert_eq!(ctrl.last_direction(), 0);
    }

    #[test]
    fn test_rejects_empty_sections() {
        assert_eq!(
            AccordionController::new(Vec::new()).unwrap_err(),
            FolioError::NoSections
        );
    }

    #[test]
    fn test_select_activates_and_expands() {
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(1).unwrap();

        assert_eq!(ctrl.active_index(), Some(1));
        assert!(ctrl.is_expanded());
        // First selection has no previous index to travel from
        assert_eq!(ctrl.last_direction(), 0);
    }

    #[test]
    fn test_reselect_closes() {
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(1).unwrap();
        ctrl.select_or_toggle(1).unwrap();

        assert_eq!(ctrl.active_index(), None);
        assert!(!ctrl.is_expanded());
    }

    #[test]
    fn test_select_records_travel_direction() {
        let mut ctrl = controller(5);
        ctrl.select_or_toggle(1).unwrap();
        ctrl.select_or_toggle(4).unwrap();
        assert_eq!(ctrl.last_direction(), 1);

        ctrl.select_or_toggle(0).unwrap();
        assert_eq!(ctrl.last_direction(), -1);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut ctrl = controller(4);
        assert_eq!(
            ctrl.select_or_toggle(4).unwrap_err(),
            FolioError::IndexOutOfRange { index: 4, count: 4 }
        );
        // A failed action never corrupts state
        assert_eq!(ctrl.active_index(), None);
        assert!(!ctrl.is_expanded());
    }

    #[test]
    fn test_paginate_without_active_is_noop() {
        let mut ctrl = controller(4);
        ctrl.paginate(1).unwrap();

        assert_eq!(ctrl.active_index(), None);
        assert_eq!(ctrl.last_direction(), 0);
    }

    #[test]
    fn test_paginate_wraps_scenario() {
        // select 1, then three forward steps: 2, 3, wrap to 0
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(1).unwrap();
        assert!(ctrl.is_expanded());

        ctrl.paginate(1).unwrap();
        assert_eq!(ctrl.active_index(), Some(2));
        assert_eq!(ctrl.last_direction(), 1);

        ctrl.paginate(1).unwrap();
        assert_eq!(ctrl.active_index(), Some(3));

        ctrl.paginate(1).unwrap();
        assert_eq!(ctrl.active_index(), Some(0));
        assert!(ctrl.is_expanded());
    }

    #[test]
    fn test_paginate_rejects_non_unit_direction() {
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(0).unwrap();

        assert_eq!(ctrl.paginate(0).unwrap_err(), FolioError::InvalidDirection(0));
        assert_eq!(ctrl.paginate(-2).unwrap_err(), FolioError::InvalidDirection(-2));
        assert_eq!(ctrl.active_index(), Some(0));
    }

    #[test]
    fn test_visibility_leave_closes() {
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(2).unwrap();

        ctrl.set_visible(false);
        assert_eq!(ctrl.active_index(), None);
        assert!(!ctrl.is_expanded());
    }

    #[test]
    fn test_visibility_enter_is_noop() {
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(2).unwrap();

        ctrl.set_visible(true);
        assert_eq!(ctrl.active_index(), Some(2));
        assert!(ctrl.is_expanded());
    }

    #[test]
    fn test_swipe_beyond_threshold_paginates() {
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(1).unwrap();

        // leftward fling: offset -900px at -12px/ms equivalent
        ctrl.end_swipe(-900.0, -12.0).unwrap();
        assert_eq!(ctrl.active_index(), Some(2));
        assert_eq!(ctrl.last_direction(), 1);

        // rightward fling steps back
        ctrl.end_swipe(800.0, 14.0).unwrap();
        assert_eq!(ctrl.active_index(), Some(1));
        assert_eq!(ctrl.last_direction(), -1);
    }

    #[test]
    fn test_weak_swipe_is_noop() {
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(1).unwrap();

        // 900 x 10 = 9000, under the 10000 threshold
        ctrl.end_swipe(-900.0, -10.0).unwrap();
        assert_eq!(ctrl.active_index(), Some(1));
    }

    #[test]
    fn test_non_finite_swipe_is_noop() {
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(1).unwrap();

        ctrl.end_swipe(f64::NAN, 20.0).unwrap();
        ctrl.end_swipe(-900.0, f64::NEG_INFINITY).unwrap();
        assert_eq!(ctrl.active_index(), Some(1));
        assert!(ctrl.is_expanded());
    }

    #[test]
    fn test_view_model_flags() {
        let mut ctrl = controller(4);
        ctrl.select_or_toggle(2).unwrap();

        let views = ctrl.view_model(ScreenClass::Large);
        assert_eq!(views.len(), 4);

        assert!(views[2].active);
        assert!(views.iter().all(|v| v.focused));
        assert!(views[0].shift_left && views[1].shift_left);
        assert!(!views[2].shift_left && !views[3].shift_left);
        assert_eq!(views[0].display_title, "Section 0");

        let views = ctrl.view_model(ScreenClass::Medium);
        assert_eq!(views[0].display_title, "S0");
    }

    #[test]
    fn test_view_model_at_rest() {
        let ctrl = controller(4);
        let views = ctrl.view_model(ScreenClass::Large);

        assert!(views.iter().all(|v| !v.active && !v.focused && !v.shift_left));
        // 4 sections: rail splits after index 1
        assert_eq!(
            views.iter().map(|v| v.is_last).collect::<Vec<_>>(),
            vec![false, false, true, true]
        );
    }
}
