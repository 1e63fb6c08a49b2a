//! Color constants for the Folio palette.
//!
//! Warm dark theme: deep slate backgrounds with amber accents.

#![allow(dead_code)]

// === SLATE (Backgrounds) ===
pub const SLATE_DEEP: &str = "#10141c";
pub const SLATE_RAISED: &str = "#161c27";
pub const SLATE_BORDER: &str = "#242c3a";

// === AMBER (Accents, Active States) ===
pub const AMBER: &str = "#e8a852";
pub const AMBER_SOFT: &str = "rgba(232, 168, 82, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#eef1f6";
pub const TEXT_SECONDARY: &str = "rgba(238, 241, 246, 0.72)";
pub const TEXT_MUTED: &str = "rgba(238, 241, 246, 0.45)";
