//! PAU: a Zellij plugin for the university teaching-assistant portal.
//!
//! PAU ("Portal de Ayudantías") lets a student:
//! - Browse the catalog of teaching-assistant positions by department, with
//!   search, category and status filters, sorting and pagination
//! - Apply to open positions, once per offered category
//! - Rank pending applications by priority and reorder or cancel them

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Dialogs (picker, apply form, confirmation)       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Listing       │   │ Store         │   │ UI Layer      │
//! │ (listing/)    │   │ (store/)      │   │ (ui/)         │
//! │ - Filters     │   │ - Create      │   │ - Rendering   │
//! │ - Collation   │   │ - Ranking     │   │ - Theming     │
//! │ - Pagination  │   │ - Eligibility │   │ - Components  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog (catalog/) + Domain (domain/)              │  ← Core types
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Event handling, state management, and action dispatching
//! - [`catalog`]: Position catalog sources (embedded, JSON file)
//! - [`domain`]: Core domain types (Position, Application, errors)
//! - [`listing`]: Filter, sort and paginate view over the catalog
//! - [`store`]: Application store, priority ranking and eligibility
//! - [`ui`]: Terminal UI rendering with theming
//! - [`observability`]: OpenTelemetry-based tracing to a rotating file
//! - [`infrastructure`]: Sandbox path handling

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod listing;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Tab};
pub use domain::{PortalError, Result};
pub use ui::Theme;

use catalog::{BuiltinCatalog, Catalog, CatalogSource, JsonCatalog};
use listing::DEFAULT_PAGE_SIZE;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Plugin configuration parsed from the Zellij layout.
///
/// # Example
///
/// ```kdl
/// plugin location="file:pau.wasm" {
///     catalog_file "~/pau/ayudantias.json"
///     page_size "10"
///     date_format "%Y-%m-%d"
///     theme "catppuccin-latte"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog to load instead of the embedded one.
    pub catalog_file: Option<String>,

    /// Positions per listing page.
    pub page_size: usize,

    /// `chrono` format for submission dates.
    pub date_format: String,

    /// Built-in theme name.
    pub theme_name: Option<String>,

    /// Path to a custom theme TOML file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Trace level filter (e.g., "debug", "info", "pau=trace").
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            date_format: app::DEFAULT_DATE_FORMAT.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the plugin configuration map.
    ///
    /// Unparsable or out-of-range values fall back to their defaults so a typo
    /// in the layout never prevents the plugin from starting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pau::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "0".to_string());
    /// map.insert("date_format".to_string(), "%Q".to_string());
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 7);
    /// assert_eq!(config.date_format, "%d/%m/%Y");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let date_format = config
            .get("date_format")
            .filter(|f| is_valid_date_format(f))
            .cloned()
            .unwrap_or_else(|| app::DEFAULT_DATE_FORMAT.to_string());

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            catalog_file: non_empty("catalog_file"),
            page_size,
            date_format,
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }

    /// Catalog source named by this configuration.
    ///
    /// Without filesystem access (permissions denied) a configured file cannot
    /// be read, so the embedded catalog is used instead.
    #[must_use]
    pub fn catalog_source(&self, file_access: bool) -> Box<dyn CatalogSource> {
        match &self.catalog_file {
            Some(path) if file_access => {
                Box::new(JsonCatalog::new(PathBuf::from(infrastructure::expand_tilde(path))))
            }
            Some(path) => {
                tracing::warn!(catalog_file = %path, "no filesystem access, using embedded catalog");
                Box::new(BuiltinCatalog)
            }
            None => Box::new(BuiltinCatalog),
        }
    }
}

/// Whether `format` is a `chrono` format string that renders without error.
fn is_valid_date_format(format: &str) -> bool {
    use chrono::format::{Item, StrftimeItems};

    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Initializes the application state from configuration.
///
/// The catalog starts empty and in the loading state; it is filled by
/// [`load_catalog`] once Zellij grants permissions.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(page_size = config.page_size, date_format = %config.date_format, "initializing pau plugin");

    let theme = Theme::resolve(
        config.theme_name.as_deref(),
        config
            .theme_file
            .as_deref()
            .map(|f| PathBuf::from(infrastructure::expand_tilde(f)))
            .as_deref(),
    );

    AppState::new(Catalog::default(), theme)
        .with_page_size(config.page_size)
        .with_date_format(config.date_format.clone())
}

/// Loads the configured catalog and wraps the outcome as an [`Event`].
///
/// # Example
///
/// ```rust
/// use pau::{load_catalog, Config, Event};
///
/// match load_catalog(&Config::default(), false) {
///     Event::CatalogLoaded(catalog) => assert!(!catalog.is_empty()),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[must_use]
pub fn load_catalog(config: &Config, file_access: bool) -> Event {
    let source = config.catalog_source(file_access);
    match Catalog::load(source.as_ref()) {
        Ok(catalog) => Event::CatalogLoaded(catalog),
        Err(e) => Event::CatalogFailed { error: e.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", " ~/pau/catalogo.json "),
            ("page_size", "12"),
            ("date_format", "%Y-%m-%d"),
            ("theme", "catppuccin-latte"),
            ("theme_file", ""),
            ("trace_level", "debug"),
        ]));
        assert_eq!(config.catalog_file.as_deref(), Some("~/pau/catalogo.json"));
        assert_eq!(config.page_size, 12);
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file, None);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[("page_size", "siete"), ("date_format", "%")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.date_format, app::DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn initialize_applies_listing_settings() {
        let config = Config {
            page_size: 3,
            date_format: "%Y".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.page_size, 3);
        assert_eq!(state.date_format, "%Y");
        assert_eq!(state.theme.name, ui::theme::DEFAULT_THEME);
    }

    #[test]
    fn missing_catalog_file_is_reported_as_failure() {
        let config = Config {
            catalog_file: Some("/nonexistent/pau/catalog.json".to_string()),
            ..Config::default()
        };
        assert!(matches!(load_catalog(&config, true), Event::CatalogFailed { .. }));
        assert!(matches!(load_catalog(&config, false), Event::CatalogLoaded(_)));
    }
}
