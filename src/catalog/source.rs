//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where the
//! position catalog comes from. The plugin ships a built-in catalog and can read
//! a JSON file named in its configuration; both go through the same trait so
//! the application layer never cares which one is in use.

use crate::domain::error::Result;
use crate::domain::Position;

/// Abstraction over position catalog backends.
///
/// A source is read once at startup; the resulting positions are immutable for
/// the rest of the session.
///
/// # Implementations
///
/// - [`BuiltinCatalog`](super::BuiltinCatalog): catalog compiled into the binary (default)
/// - [`JsonCatalog`](super::JsonCatalog): catalog read from a JSON file
///
/// # Examples
///
/// ```no_run
/// use pau::catalog::{CatalogSource, JsonCatalog};
/// use std::path::PathBuf;
///
/// let source = JsonCatalog::new(PathBuf::from("/tmp/positions.json"));
/// let positions = source.load()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait CatalogSource {
    /// Loads every position of the catalog, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or is malformed.
    fn load(&self) -> Result<Vec<Position>>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}
