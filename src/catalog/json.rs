//! JSON file catalog source.
//!
//! Reads positions from a human-readable JSON file. The file is only ever read;
//! the plugin never writes the catalog back.

use crate::catalog::source::CatalogSource;
use crate::domain::error::{PortalError, Result};
use crate::domain::Position;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Highest catalog format version this build understands.
pub const CATALOG_VERSION: u32 = 1;

/// JSON catalog container format.
///
/// This is the top-level structure of a catalog file. Wrapping the positions in
/// an object leaves room for future format changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    /// Version of the catalog format.
    pub version: u32,

    /// Positions, in the order the catalog lists them.
    #[serde(default)]
    pub positions: Vec<Position>,
}

/// Parses catalog file contents.
///
/// # Errors
///
/// Returns [`PortalError::Catalog`] if the JSON is invalid or its version is
/// newer than [`CATALOG_VERSION`].
pub fn parse_catalog(contents: &str) -> Result<Vec<Position>> {
    let data: CatalogData = serde_json::from_str(contents)
        .map_err(|e| PortalError::Catalog(format!("failed to parse JSON: {e}")))?;

    if data.version > CATALOG_VERSION {
        return Err(PortalError::Catalog(format!(
            "unsupported catalog version {} (expected {CATALOG_VERSION})",
            data.version
        )));
    }

    tracing::debug!(
        version = data.version,
        positions = data.positions.len(),
        "parsed catalog data"
    );

    Ok(data.positions)
}

/// JSON file catalog source.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "positions": [
///     {
///       "id": "inf-134",
///       "title": "Estructuras de Datos",
///       "department": "Informática",
///       "categories": ["cátedra", "laboratorio"],
///       "status": "open",
///       "description": "...",
///       "requirements": ["..."],
///       "current_applicants": 12,
///       "available_slots": 4
///     }
///   ]
/// }
/// ```
///
/// `categories`, `description`, `requirements` and the counters are optional.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Vec<Position>> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        parse_catalog(&contents)
    }

    fn describe(&self) -> String {
        format!("file {}", self.file_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_minimal_positions() {
        let positions = parse_catalog(
            r#"{"version": 1, "positions": [
                {"id": "mat-021", "title": "Matemática I", "department": "Matemática", "status": "open"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(positions.len(), 1);
        assert!(positions[0].categories.is_empty());
    }

    #[test]
    fn parse_rejects_invalid_json_and_future_versions() {
        assert!(matches!(parse_catalog("{"), Err(PortalError::Catalog(_))));
        assert!(matches!(
            parse_catalog(r#"{"version": 2, "positions": []}"#),
            Err(PortalError::Catalog(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = JsonCatalog::new(PathBuf::from("/nonexistent/pau/positions.json"));
        assert!(matches!(source.load(), Err(PortalError::Io(_))));
    }
}
