//! Global theme for Folio.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
