//! UI Components for Folio.

mod accordion;
mod mobile_nav;
mod nav_header;

pub use accordion::HorizontalAccordion;
pub use nav_header::NavHeader;
