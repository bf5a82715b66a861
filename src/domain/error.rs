//! Error types for the PAU plugin.
//!
//! This module defines the centralized error type [`PortalError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Store rejections (`PositionClosed`, `AlreadyApplied`, ...) are never fatal: the
//! event handler turns them into an advisory notice and the application state is
//! left exactly as it was before the rejected operation.

use crate::domain::position::PositionCategory;
use thiserror::Error;

/// The main error type for PAU operations.
///
/// # Examples
///
/// ```
/// use pau::PortalError;
///
/// fn load() -> Result<(), PortalError> {
///     Err(PortalError::Catalog("duplicate position id: inf-134".to_string()))
/// }
///
/// assert!(load().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PortalError {
    /// Position catalog could not be loaded or is malformed.
    ///
    /// The string contains a description of what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The referenced position does not exist in the catalog.
    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    /// The position is closed for applications.
    #[error("Position {0} is closed for applications")]
    PositionClosed(String),

    /// A pending application already exists for this position (and category).
    #[error("Already applied to {position_id}{}", category_suffix(.category))]
    AlreadyApplied {
        /// Position the duplicate application targets.
        position_id: String,
        /// Category of the duplicate application, if the position has categories.
        category: Option<PositionCategory>,
    },

    /// The position defines categories but none was chosen.
    #[error("Position {0} requires choosing a category")]
    CategoryRequired(String),

    /// The chosen category is not offered by the position.
    #[error("Position {position_id} does not offer category {category}")]
    InvalidCategory {
        /// Position the application targets.
        position_id: String,
        /// Category that was rejected.
        category: PositionCategory,
    },

    /// A reorder request was not a permutation of the pending applications.
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(String),
}

fn category_suffix(category: &Option<PositionCategory>) -> String {
    category.map_or_else(String::new, |c| format!(" ({c})"))
}

/// A specialized `Result` type for PAU operations.
///
/// This is a type alias for `std::result::Result<T, PortalError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_applied_message_includes_category() {
        let err = PortalError::AlreadyApplied {
            position_id: "inf-134".to_string(),
            category: Some(PositionCategory::Catedra),
        };
        assert_eq!(err.to_string(), "Already applied to inf-134 (cátedra)");

        let err = PortalError::AlreadyApplied {
            position_id: "mat-021".to_string(),
            category: None,
        };
        assert_eq!(err.to_string(), "Already applied to mat-021");
    }
}
