//! Application store and ranking.
//!
//! This module owns the user's applications and the rules that keep them
//! consistent: the dense priority ranking over pending applications and the
//! apply-eligibility check shared by every view.
//!
//! # Modules
//!
//! - `applications`: [`ApplicationStore`], the single writer of application state
//! - `ranking`: dense `1..=K` priority maintenance (append, step, move-to-index, renumber)
//! - `eligibility`: fully-applied / appliable rule per position

pub mod applications;
pub mod eligibility;
pub mod ranking;

pub use applications::ApplicationStore;
pub use eligibility::Eligibility;
