//! Error types for the Folio interaction core

use thiserror::Error;

/// Main error type for interaction-core operations
///
/// Every variant is a precondition violation by the integrating renderer,
/// detected synchronously at the call that triggers it. Nothing here is
/// recoverable internally and nothing is silently clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// Section index outside the section sequence
    #[error("Section index {index} out of range ({count} sections)")]
    IndexOutOfRange { index: usize, count: usize },

    /// Pagination direction that is not a unit step
    #[error("Pagination direction must be -1 or +1, got {0}")]
    InvalidDirection(i8),

    /// Controller constructed with an empty section sequence
    #[error("Accordion requires at least one section")]
    NoSections,

    /// Breakpoint thresholds that are not finite and strictly increasing
    #[error("Invalid breakpoints: {0}")]
    InvalidBreakpoints(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::IndexOutOfRange { index: 7, count: 4 };
        assert_eq!(format!("{}", err), "Section index 7 out of range (4 sections)");

        let err = FolioError::InvalidDirection(3);
        assert_eq!(format!("{}", err), "Pagination direction must be -1 or +1, got 3");
    }
}
