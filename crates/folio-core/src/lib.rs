//! Folio Core Library
//!
//! Headless interaction state for the Folio portfolio app. The centerpiece
//! is the horizontal accordion's state machine: one controller owns the
//! open/close/active-section state, directional pagination with wraparound,
//! swipe-gesture commitment on small screens, and visibility-triggered
//! auto-close, and derives a per-section view-model for whatever renders it.
//!
//! ## Overview
//!
//! - Content ([`Section`], [`ListItem`]) is supplied once at construction
//!   and never mutated by the core.
//! - [`AccordionController`] is the single owner of interaction state; every
//!   mutation goes through its action methods.
//! - [`Breakpoints`] classifies a viewport width into a [`ScreenClass`];
//!   the view-model is re-derived after every action and every resize.
//! - [`NavMenu`] and [`ScrollWatcher`] back the responsive navigation bar.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{AccordionController, Breakpoints, Section};
//!
//! let sections = vec![
//!     Section::new("Acme Corp", "Acme", "images/acme.webp"),
//!     Section::new("Side Projects", "Projects", "images/projects.webp"),
//! ];
//! let mut accordion = AccordionController::new(sections)?;
//!
//! accordion.select_or_toggle(0)?;
//! accordion.paginate(1)?;
//!
//! let screen = Breakpoints::default().classify(1280.0);
//! for view in accordion.view_model(screen) {
//!     println!("{}: active={}", view.display_title, view.active);
//! }
//! # Ok::<(), folio_core::FolioError>(())
//! ```

pub mod controller;
pub mod error;
pub mod nav;
pub mod pagination;
pub mod screen;
pub mod section;
pub mod view;

// Re-exports
pub use controller::{swipe_power, AccordionController, SWIPE_CONFIDENCE_THRESHOLD};
pub use error::{FolioError, FolioResult};
pub use nav::{NavMenu, ScrollDirection, ScrollWatcher};
pub use pagination::paginate_index;
pub use screen::{Breakpoints, ScreenClass};
pub use section::{ListItem, Section};
pub use view::SectionView;
