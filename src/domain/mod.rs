//! Domain layer for the PAU plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`position`]: Catalog position model (categories, status)
//! - [`application`]: Application model (section, status, priority)

pub mod application;
pub mod error;
pub mod position;

pub use application::{Application, ApplicationStatus, NewApplication, Section};
pub use error::{PortalError, Result};
pub use position::{Position, PositionCategory, PositionStatus};
