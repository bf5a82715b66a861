//! Position catalog.
//!
//! The catalog is the read-only collection of positions the portal lists. It is
//! loaded once from a [`CatalogSource`] and never mutated during a session.
//!
//! # Modules
//!
//! - `source`: [`CatalogSource`] trait abstraction over catalog backends
//! - `json`: JSON file catalog and the shared file format
//! - `builtin`: catalog embedded in the binary

pub mod builtin;
pub mod json;
pub mod source;

pub use builtin::BuiltinCatalog;
pub use json::{CatalogData, JsonCatalog};
pub use source::CatalogSource;

use crate::domain::error::{PortalError, Result};
use crate::domain::Position;
use crate::listing::collation;
use std::collections::HashMap;

/// Validated, indexed set of positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    positions: Vec<Position>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Catalog`] if two positions share an id.
    pub fn new(positions: Vec<Position>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(positions.len());
        for (idx, position) in positions.iter().enumerate() {
            if by_id.insert(position.id.clone(), idx).is_some() {
                return Err(PortalError::Catalog(format!(
                    "duplicate position id: {}",
                    position.id
                )));
            }
        }
        Ok(Self { positions, by_id })
    }

    /// Loads and validates the catalog from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or contains duplicate ids.
    pub fn load(source: &dyn CatalogSource) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_load", source = %source.describe()).entered();

        let catalog = Self::new(source.load()?)?;
        tracing::debug!(
            positions = catalog.len(),
            departments = catalog.departments().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Position> {
        self.by_id.get(id).map(|&idx| &self.positions[idx])
    }

    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Distinct departments, sorted with the listing collation.
    #[must_use]
    pub fn departments(&self) -> Vec<String> {
        let mut departments: Vec<String> = Vec::new();
        for position in &self.positions {
            if !departments.contains(&position.department) {
                departments.push(position.department.clone());
            }
        }
        departments.sort_by(|a, b| collation::compare(a, b));
        departments
    }
}
