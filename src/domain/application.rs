//! Application domain model.
//!
//! An [`Application`] is a user's submitted intent to fill a position, optionally
//! scoped to one category. Applications are created pending, are re-ranked while
//! pending, and move to the terminal `Cancelled` status when withdrawn. They are
//! never deleted.

use super::position::PositionCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Course section the applicant is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    #[serde(rename = "200")]
    S200,
    #[serde(rename = "201")]
    S201,
}

impl Section {
    /// The other section.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::S200 => Self::S201,
            Self::S201 => Self::S200,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::S200 => "200",
            Self::S201 => "201",
        })
    }
}

/// Lifecycle status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted and ranked.
    Pending,
    /// Withdrawn by the user. Terminal.
    Cancelled,
}

/// A submitted application.
///
/// `priority` is `Some(p)` while the application is pending, where `p` is its
/// dense 1-based rank among all pending applications (lower is preferred).
/// Cancelled applications carry no priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub position_id: String,
    pub position_title: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PositionCategory>,
    pub section: Section,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
    pub status: ApplicationStatus,
    pub priority: Option<u32>,
}

impl Application {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }

    /// Formats the submission date with a `chrono` format string.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use pau::domain::{Application, ApplicationStatus, Section};
    ///
    /// let application = Application {
    ///     id: "app-1".to_string(),
    ///     position_id: "inf-134".to_string(),
    ///     position_title: "Estructuras de Datos".to_string(),
    ///     department: "Informática".to_string(),
    ///     category: None,
    ///     section: Section::S200,
    ///     reason: String::new(),
    ///     submitted_at: Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap(),
    ///     status: ApplicationStatus::Pending,
    ///     priority: Some(1),
    /// };
    /// assert_eq!(application.submitted_on("%d/%m/%Y"), "07/03/2025");
    /// ```
    #[must_use]
    pub fn submitted_on(&self, format: &str) -> String {
        self.submitted_at.format(format).to_string()
    }
}

/// Parameters of a new application, as collected by the apply form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub position_id: String,
    pub category: Option<PositionCategory>,
    pub section: Section,
    pub reason: String,
}

impl NewApplication {
    #[must_use]
    pub fn new(position_id: impl Into<String>, category: Option<PositionCategory>) -> Self {
        Self {
            position_id: position_id.into(),
            category,
            section: Section::default(),
            reason: String::new(),
        }
    }

    #[must_use]
    pub const fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}
