use crate::catalog::json::parse_catalog;
use crate::catalog::source::CatalogSource;
use crate::domain::error::Result;
use crate::domain::Position;

const BUILTIN_CATALOG: &str = include_str!("../../data/positions.json");

/// Catalog compiled into the plugin binary.
///
/// Used when no `catalog_file` is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Vec<Position>> {
        let _span = tracing::debug_span!("builtin_catalog_load").entered();
        parse_catalog(BUILTIN_CATALOG)
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn builtin_catalog_is_valid() {
        let positions = BuiltinCatalog.load().unwrap();
        assert!(positions.len() > 7);

        let catalog = Catalog::new(positions).unwrap();
        assert!(catalog.departments().contains(&"Informática".to_string()));
    }
}
