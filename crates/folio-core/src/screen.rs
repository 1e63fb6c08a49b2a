//! Viewport width classification
//!
//! Maps a viewport width to a discrete [`ScreenClass`] using max-width
//! breakpoint semantics. Pure and stateless: the renderer calls
//! [`Breakpoints::classify`] on every resize event and the class is never
//! stored anywhere else.

use crate::error::{FolioError, FolioResult};

/// Discrete responsive-layout tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenClass {
    /// Phone-sized: full-screen carousel for the active section
    Small,
    /// Tablet / small laptop: collapsed rail with shortened titles
    Medium,
    /// Desktop: full rail with full titles
    Large,
}

impl ScreenClass {
    /// Whether the collapsed rail shows the shortened section title
    pub fn uses_short_title(&self) -> bool {
        !matches!(self, ScreenClass::Large)
    }
}

/// Max-width breakpoint thresholds, in CSS pixels
///
/// A width at or below `small_max` is `Small`, at or below `medium_max` is
/// `Medium`, anything wider (including a non-finite width from a malformed
/// resize report) is `Large`. The fallback-to-`Large` choice mirrors the
/// original layout, which renders the full desktop variant when no max-width
/// media query matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    small_max: f64,
    medium_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small_max: 1024.0,
            medium_max: 1440.0,
        }
    }
}

impl Breakpoints {
    /// Create custom thresholds
    ///
    /// Thresholds must be finite and strictly increasing, with `small_max`
    /// positive.
    pub fn new(small_max: f64, medium_max: f64) -> FolioResult<Self> {
        if !small_max.is_finite() || !medium_max.is_finite() {
            return Err(FolioError::InvalidBreakpoints(format!(
                "thresholds must be finite, got {small_max} and {medium_max}"
            )));
        }
        if small_max <= 0.0 || medium_max <= small_max {
            return Err(FolioError::InvalidBreakpoints(format!(
                "thresholds must satisfy 0 < small_max < medium_max, got {small_max} and {medium_max}"
            )));
        }
        Ok(Self {
            small_max,
            medium_max,
        })
    }

    /// Classify a viewport width
    pub fn classify(&self, width: f64) -> ScreenClass {
        // NaN fails both comparisons and falls through to Large
        if width <= self.small_max {
            ScreenClass::Small
        } else if width <= self.medium_max {
            ScreenClass::Medium
        } else {
            ScreenClass::Large
        }
    }
}
