//! Position domain model.
//!
//! A [`Position`] is an advertised teaching-assistant opening ("ayudantía").
//! Positions are sourced from the catalog at startup and never mutated during a
//! session. Category and status enums serialize with the names used by the
//! university catalog files (`"cátedra"`, `"open"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of teaching work a position offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PositionCategory {
    /// Lecture assistant.
    #[serde(rename = "cátedra")]
    Catedra,
    /// Grading assistant.
    #[serde(rename = "corrección")]
    Correccion,
    /// Laboratory assistant.
    #[serde(rename = "laboratorio")]
    Laboratorio,
}

impl PositionCategory {
    /// Every category, in the order the filter cycles through them.
    pub const ALL: [Self; 3] = [Self::Catedra, Self::Correccion, Self::Laboratorio];

    /// Display label, as written in the catalog.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Catedra => "cátedra",
            Self::Correccion => "corrección",
            Self::Laboratorio => "laboratorio",
        }
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a position currently accepts applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    /// Accepting applications.
    Open,
    /// No longer accepting applications.
    Closed,
}

impl PositionStatus {
    /// Fixed ordering used when sorting by status: open before closed.
    #[must_use]
    pub const fn sort_rank(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
        }
    }

    /// Badge text shown in the listing.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Abierta",
            Self::Closed => "Cerrada",
        }
    }
}

/// Represents a teaching-assistant opening from the catalog.
///
/// # Fields
///
/// - `categories`: empty when the position is not split by category
/// - `current_applicants`, `available_slots`, `accepted_applicants`: optional
///   counters published by the department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub title: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<PositionCategory>,
    pub status: PositionStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_applicants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_slots: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_applicants: Option<u32>,
}

impl Position {
    /// Creates an open position without categories or counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use pau::domain::{Position, PositionStatus};
    ///
    /// let position = Position::new("inf-134", "Estructuras de Datos", "Informática");
    /// assert_eq!(position.status, PositionStatus::Open);
    /// assert!(!position.has_categories());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            department: department.into(),
            categories: Vec::new(),
            status: PositionStatus::Open,
            description: String::new(),
            requirements: Vec::new(),
            current_applicants: None,
            available_slots: None,
            accepted_applicants: None,
        }
    }

    /// Returns the position with the given categories.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = PositionCategory>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Returns the position with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: PositionStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }

    #[must_use]
    pub fn offers(&self, category: PositionCategory) -> bool {
        self.categories.contains(&category)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == PositionStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_round_trip_with_catalog_names() {
        let json = r#"{
            "id": "fis-110",
            "title": "Física General I",
            "department": "Física",
            "categories": ["cátedra", "laboratorio"],
            "status": "closed"
        }"#;

        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(
            position.categories,
            vec![PositionCategory::Catedra, PositionCategory::Laboratorio]
        );
        assert_eq!(position.status, PositionStatus::Closed);
        assert!(position.requirements.is_empty());
        assert!(position.current_applicants.is_none());

        let back = serde_json::to_value(&position).unwrap();
        assert_eq!(back["categories"][0], "cátedra");
        assert_eq!(back["status"], "closed");
    }

    #[test]
    fn status_sort_rank_puts_open_first() {
        assert!(PositionStatus::Open.sort_rank() < PositionStatus::Closed.sort_rank());
    }
}
