//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the catalog,
//! listing and store layers. It implements the event-driven loop that powers
//! the interactive UI.
//!
//! # Architecture
//!
//! ```text
//! Key press → Event → handle_event → State Mutations → Actions → Side Effects
//!                          ↑
//! Catalog load ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Draft state of the apply dialog
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Tab and input mode state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use pau::app::{handle_event, AppState, Event};
//! use pau::catalog::Catalog;
//! use pau::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::default(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(actions.is_empty());
//! # Ok::<(), pau::PortalError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::ApplyForm;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Tab};
pub use state::{AppState, CatalogStatus, Notice, NoticeKind, DEFAULT_DATE_FORMAT};
