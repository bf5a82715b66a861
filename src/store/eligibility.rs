//! Apply-eligibility rule.
//!
//! A single rule decides whether the user may still apply to a position, and
//! every view (listing rows, apply form, store guards) goes through it:
//!
//! - a position with categories is *fully applied* once every category it offers
//!   has a pending application;
//! - a position without categories is *fully applied* once any pending
//!   application to it exists;
//! - a position is *appliable* when it is open and not fully applied.

use crate::domain::{Application, Position, PositionCategory, PositionStatus};
use std::collections::BTreeSet;

/// Outcome of the eligibility check for one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    /// Status of the position at the time of the check.
    pub status: PositionStatus,
    /// Pending applications cover the whole position.
    pub fully_applied: bool,
    /// Categories still open to a new application, in catalog order.
    ///
    /// Always empty for positions without categories.
    pub remaining_categories: Vec<PositionCategory>,
}

impl Eligibility {
    /// Evaluates the rule for `position` against the user's applications.
    ///
    /// Cancelled applications are ignored.
    #[must_use]
    pub fn evaluate(position: &Position, applications: &[Application]) -> Self {
        let pending_for_position = applications
            .iter()
            .filter(|app| app.is_pending() && app.position_id == position.id);

        if position.has_categories() {
            let applied: BTreeSet<PositionCategory> =
                pending_for_position.filter_map(|app| app.category).collect();
            let remaining_categories: Vec<PositionCategory> = position
                .categories
                .iter()
                .copied()
                .filter(|category| !applied.contains(category))
                .collect();

            Self {
                status: position.status,
                fully_applied: remaining_categories.is_empty(),
                remaining_categories,
            }
        } else {
            Self {
                status: position.status,
                fully_applied: pending_for_position.count() > 0,
                remaining_categories: Vec::new(),
            }
        }
    }

    /// Open and not fully applied.
    #[must_use]
    pub fn can_apply(&self) -> bool {
        self.status == PositionStatus::Open && !self.fully_applied
    }

    /// Whether a new application in `category` would be accepted.
    ///
    /// For categoryless positions only `None` can be accepted.
    #[must_use]
    pub fn accepts(&self, category: Option<PositionCategory>) -> bool {
        if !self.can_apply() {
            return false;
        }
        match category {
            Some(category) => self.remaining_categories.contains(&category),
            None => self.remaining_categories.is_empty(),
        }
    }

    /// Label of the apply control in the listing.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.status != PositionStatus::Open {
            "No disponible"
        } else if self.fully_applied {
            "Ya postulaste"
        } else {
            "Postular"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApplicationStatus, Section};
    use chrono::Utc;

    fn pending(position_id: &str, category: Option<PositionCategory>) -> Application {
        Application {
            id: format!("app-{position_id}-{category:?}"),
            position_id: position_id.to_string(),
            position_title: String::new(),
            department: String::new(),
            category,
            section: Section::S200,
            reason: String::new(),
            submitted_at: Utc::now(),
            status: ApplicationStatus::Pending,
            priority: Some(1),
        }
    }

    #[test]
    fn partially_applied_position_remains_appliable_for_other_categories() {
        let position = Position::new("fis-110", "Física General I", "Física")
            .with_categories([PositionCategory::Catedra, PositionCategory::Laboratorio]);
        let apps = vec![pending("fis-110", Some(PositionCategory::Catedra))];

        let eligibility = Eligibility::evaluate(&position, &apps);
        assert!(!eligibility.fully_applied);
        assert!(eligibility.can_apply());
        assert_eq!(eligibility.remaining_categories, vec![PositionCategory::Laboratorio]);
        assert!(!eligibility.accepts(Some(PositionCategory::Catedra)));
        assert!(eligibility.accepts(Some(PositionCategory::Laboratorio)));
        assert!(!eligibility.accepts(None));
        assert_eq!(eligibility.action_label(), "Postular");
    }

    #[test]
    fn every_category_applied_means_fully_applied() {
        let position = Position::new("fis-110", "Física General I", "Física")
            .with_categories([PositionCategory::Catedra, PositionCategory::Laboratorio]);
        let apps = vec![
            pending("fis-110", Some(PositionCategory::Laboratorio)),
            pending("fis-110", Some(PositionCategory::Catedra)),
        ];

        let eligibility = Eligibility::evaluate(&position, &apps);
        assert!(eligibility.fully_applied);
        assert!(!eligibility.can_apply());
        assert_eq!(eligibility.action_label(), "Ya postulaste");
    }

    #[test]
    fn categoryless_position_is_fully_applied_by_any_pending_application() {
        let position = Position::new("mat-021", "Matemática I", "Matemática");
        assert!(Eligibility::evaluate(&position, &[]).accepts(None));

        let apps = vec![pending("mat-021", None)];
        let eligibility = Eligibility::evaluate(&position, &apps);
        assert!(eligibility.fully_applied);
        assert!(!eligibility.accepts(None));
    }

    #[test]
    fn cancelled_applications_do_not_count() {
        let position = Position::new("mat-021", "Matemática I", "Matemática");
        let mut cancelled = pending("mat-021", None);
        cancelled.status = ApplicationStatus::Cancelled;
        cancelled.priority = None;

        assert!(Eligibility::evaluate(&position, &[cancelled]).can_apply());
    }

    #[test]
    fn closed_position_is_never_appliable() {
        let position =
            Position::new("qui-010", "Química General", "Química").with_status(PositionStatus::Closed);
        let eligibility = Eligibility::evaluate(&position, &[]);
        assert!(!eligibility.fully_applied);
        assert!(!eligibility.can_apply());
        assert_eq!(eligibility.action_label(), "No disponible");
    }
}
