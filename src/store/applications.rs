//! In-memory application store.
//!
//! [`ApplicationStore`] is the single owner of the user's applications. All
//! mutations go through its operations (create, cancel, reorder, move), each of
//! which leaves the pending priorities dense (`1..=K`).

use super::eligibility::Eligibility;
use super::ranking::{self, Step};
use crate::catalog::Catalog;
use crate::domain::error::{PortalError, Result};
use crate::domain::{Application, ApplicationStatus, NewApplication, Position, PositionCategory};
use chrono::Utc;
use std::collections::BTreeSet;

/// Owns the user's applications and their priority ranking.
///
/// # Examples
///
/// ```
/// use pau::catalog::Catalog;
/// use pau::domain::{NewApplication, Position};
/// use pau::store::ApplicationStore;
///
/// let catalog = Catalog::new(vec![
///     Position::new("inf-134", "Estructuras de Datos", "Informática"),
///     Position::new("inf-253", "Lenguajes de Programación", "Informática"),
/// ])?;
/// let mut store = ApplicationStore::new();
///
/// let first = store.create(&catalog, NewApplication::new("inf-134", None))?;
/// let second = store.create(&catalog, NewApplication::new("inf-253", None))?;
/// assert_eq!(first.priority, Some(1));
/// assert_eq!(second.priority, Some(2));
///
/// store.move_up(&second.id);
/// assert_eq!(store.pending()[0].id, second.id);
/// # Ok::<(), pau::PortalError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApplicationStore {
    /// Every application ever created, in creation order.
    applications: Vec<Application>,

    /// Sequence used to mint application ids.
    next_id: u64,
}

impl ApplicationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a new application, appending it at the bottom of the ranking.
    ///
    /// # Errors
    ///
    /// - [`PortalError::UnknownPosition`] if the position is not in the catalog
    /// - [`PortalError::PositionClosed`] if the position is closed
    /// - [`PortalError::CategoryRequired`] if the position has categories and none was given
    /// - [`PortalError::InvalidCategory`] if the category is not offered by the position
    /// - [`PortalError::AlreadyApplied`] if a pending application already covers it
    ///
    /// The store is unchanged on error.
    pub fn create(&mut self, catalog: &Catalog, request: NewApplication) -> Result<Application> {
        let _span = tracing::debug_span!("store_create",
            position_id = %request.position_id,
            category = ?request.category
        ).entered();

        let position = catalog
            .get(&request.position_id)
            .ok_or_else(|| PortalError::UnknownPosition(request.position_id.clone()))?;

        self.check_can_create(position, request.category)?;

        self.next_id += 1;
        let application = Application {
            id: format!("app-{}", self.next_id),
            position_id: position.id.clone(),
            position_title: position.title.clone(),
            department: position.department.clone(),
            category: request.category,
            section: request.section,
            reason: request.reason,
            submitted_at: Utc::now(),
            status: ApplicationStatus::Pending,
            priority: Some(ranking::next_priority(&self.applications)),
        };

        tracing::debug!(
            application_id = %application.id,
            priority = ?application.priority,
            "application created"
        );

        self.applications.push(application.clone());
        debug_assert!(ranking::is_dense(&self.applications));
        Ok(application)
    }

    fn check_can_create(&self, position: &Position, category: Option<PositionCategory>) -> Result<()> {
        if !position.is_open() {
            return Err(PortalError::PositionClosed(position.id.clone()));
        }

        match category {
            None if position.has_categories() => {
                return Err(PortalError::CategoryRequired(position.id.clone()));
            }
            Some(category) if !position.offers(category) => {
                return Err(PortalError::InvalidCategory {
                    position_id: position.id.clone(),
                    category,
                });
            }
            _ => {}
        }

        if self.eligibility(position).accepts(category) {
            Ok(())
        } else {
            Err(PortalError::AlreadyApplied {
                position_id: position.id.clone(),
                category,
            })
        }
    }

    /// Cancels a pending application and renumbers the remaining ones.
    ///
    /// Returns `false` (and changes nothing) if the id is unknown or the
    /// application is already cancelled.
    pub fn cancel(&mut self, id: &str) -> bool {
        let _span = tracing::debug_span!("store_cancel", application_id = %id).entered();

        let Some(application) = self
            .applications
            .iter_mut()
            .find(|app| app.id == id && app.is_pending())
        else {
            tracing::debug!("nothing to cancel");
            return false;
        };

        let former_priority = application.priority;
        application.status = ApplicationStatus::Cancelled;
        application.priority = None;
        ranking::renumber(&mut self.applications);

        tracing::debug!(former_priority = ?former_priority, "application cancelled");
        debug_assert!(ranking::is_dense(&self.applications));
        true
    }

    /// Reassigns priorities `1..=K` following a complete new ordering of the
    /// pending applications.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidOrdering`] if `ordered_ids` is not a
    /// permutation of the pending application ids. The store is unchanged on error.
    pub fn reorder<S: AsRef<str>>(&mut self, ordered_ids: &[S]) -> Result<()> {
        let _span = tracing::debug_span!("store_reorder", count = ordered_ids.len()).entered();

        let pending: BTreeSet<&str> = self
            .applications
            .iter()
            .filter(|app| app.is_pending())
            .map(|app| app.id.as_str())
            .collect();
        let requested: BTreeSet<&str> = ordered_ids.iter().map(AsRef::as_ref).collect();

        if requested.len() != ordered_ids.len() {
            return Err(PortalError::InvalidOrdering("duplicate application id".to_string()));
        }
        if requested != pending {
            return Err(PortalError::InvalidOrdering(format!(
                "expected the {} pending applications, got {} ids",
                pending.len(),
                ordered_ids.len()
            )));
        }

        let order: Vec<usize> = ordered_ids
            .iter()
            .filter_map(|id| self.index_of(id.as_ref()))
            .collect();
        ranking::assign(&mut self.applications, &order);

        debug_assert!(ranking::is_dense(&self.applications));
        Ok(())
    }

    /// Swaps the application with the one ranked just above it.
    ///
    /// Returns `false` if it is already first, unknown, or cancelled.
    pub fn move_up(&mut self, id: &str) -> bool {
        self.step(id, Step::Up)
    }

    /// Swaps the application with the one ranked just below it.
    ///
    /// Returns `false` if it is already last, unknown, or cancelled.
    pub fn move_down(&mut self, id: &str) -> bool {
        self.step(id, Step::Down)
    }

    fn step(&mut self, id: &str, direction: Step) -> bool {
        let _span = tracing::debug_span!("store_step", application_id = %id, direction = ?direction).entered();

        let Some(position) = self.rank_position(id) else {
            return false;
        };
        let moved = ranking::step(&mut self.applications, position, direction);
        tracing::debug!(moved = moved, "step applied");
        moved
    }

    /// Moves the application displayed at `from` to display index `to`.
    ///
    /// Indices refer to [`Self::pending`]. Returns `false` for `from == to` or
    /// out-of-range indices.
    pub fn move_to_index(&mut self, from: usize, to: usize) -> bool {
        let _span = tracing::debug_span!("store_move_to_index", from = from, to = to).entered();
        ranking::move_to_index(&mut self.applications, from, to)
    }

    /// Every application, cancelled ones included, in creation order.
    #[must_use]
    pub fn all(&self) -> &[Application] {
        &self.applications
    }

    /// Pending applications sorted by ascending priority.
    #[must_use]
    pub fn pending(&self) -> Vec<&Application> {
        ranking::pending_order(&self.applications)
            .into_iter()
            .map(|idx| &self.applications[idx])
            .collect()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.applications.iter().filter(|app| app.is_pending()).count()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|app| app.id == id)
    }

    /// Distinct categories with a pending application for the position.
    #[must_use]
    pub fn applied_categories(&self, position_id: &str) -> Vec<PositionCategory> {
        let categories: BTreeSet<PositionCategory> = self
            .applications
            .iter()
            .filter(|app| app.is_pending() && app.position_id == position_id)
            .filter_map(|app| app.category)
            .collect();
        categories.into_iter().collect()
    }

    /// Whether any pending application targets the position.
    #[must_use]
    pub fn has_applied(&self, position_id: &str) -> bool {
        self.pending_count_for(position_id) > 0
    }

    #[must_use]
    pub fn pending_count_for(&self, position_id: &str) -> usize {
        self.applications
            .iter()
            .filter(|app| app.is_pending() && app.position_id == position_id)
            .count()
    }

    /// Evaluates the apply-eligibility rule for a position.
    #[must_use]
    pub fn eligibility(&self, position: &Position) -> Eligibility {
        Eligibility::evaluate(position, &self.applications)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.applications.iter().position(|app| app.id == id)
    }

    /// Position of a pending application in the displayed order.
    fn rank_position(&self, id: &str) -> Option<usize> {
        ranking::pending_order(&self.applications)
            .into_iter()
            .position(|idx| self.applications[idx].id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PositionStatus, Section};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Position::new("inf-134", "Estructuras de Datos", "Informática"),
            Position::new("inf-253", "Lenguajes de Programación", "Informática"),
            Position::new("inf-239", "Bases de Datos", "Informática"),
            Position::new("fis-110", "Física General I", "Física")
                .with_categories([PositionCategory::Catedra, PositionCategory::Laboratorio]),
            Position::new("qui-010", "Química General", "Química").with_status(PositionStatus::Closed),
        ])
        .unwrap()
    }

    fn filled(ids: &[&str]) -> (Catalog, ApplicationStore, Vec<String>) {
        let catalog = catalog();
        let mut store = ApplicationStore::new();
        let created = ids
            .iter()
            .map(|id| store.create(&catalog, NewApplication::new(*id, None)).unwrap().id)
            .collect();
        (catalog, store, created)
    }

    fn pending_ids(store: &ApplicationStore) -> Vec<String> {
        store.pending().into_iter().map(|app| app.id.clone()).collect()
    }

    #[test]
    fn create_appends_with_next_priority_and_copies_position_fields() {
        let catalog = catalog();
        let mut store = ApplicationStore::new();

        let app = store
            .create(
                &catalog,
                NewApplication::new("fis-110", Some(PositionCategory::Laboratorio))
                    .with_section(Section::S201)
                    .with_reason("Aprobé con 90"),
            )
            .unwrap();

        assert_eq!(app.priority, Some(1));
        assert_eq!(app.position_title, "Física General I");
        assert_eq!(app.department, "Física");
        assert_eq!(app.section, Section::S201);
        assert_eq!(app.reason, "Aprobé con 90");
        assert_eq!(app.status, ApplicationStatus::Pending);
    }

    #[test]
    fn create_rejects_without_touching_state() {
        let (catalog, mut store, _) = filled(&["inf-134"]);
        let before = store.all().to_vec();

        assert!(matches!(
            store.create(&catalog, NewApplication::new("nope", None)),
            Err(PortalError::UnknownPosition(_))
        ));
        assert!(matches!(
            store.create(&catalog, NewApplication::new("qui-010", None)),
            Err(PortalError::PositionClosed(_))
        ));
        assert!(matches!(
            store.create(&catalog, NewApplication::new("inf-134", None)),
            Err(PortalError::AlreadyApplied { .. })
        ));
        assert!(matches!(
            store.create(&catalog, NewApplication::new("fis-110", None)),
            Err(PortalError::CategoryRequired(_))
        ));
        assert!(matches!(
            store.create(&catalog, NewApplication::new("fis-110", Some(PositionCategory::Correccion))),
            Err(PortalError::InvalidCategory { .. })
        ));
        assert!(matches!(
            store.create(&catalog, NewApplication::new("inf-253", Some(PositionCategory::Catedra))),
            Err(PortalError::InvalidCategory { .. })
        ));

        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn one_pending_application_per_category() {
        let catalog = catalog();
        let mut store = ApplicationStore::new();
        store
            .create(&catalog, NewApplication::new("fis-110", Some(PositionCategory::Catedra)))
            .unwrap();

        assert!(matches!(
            store.create(&catalog, NewApplication::new("fis-110", Some(PositionCategory::Catedra))),
            Err(PortalError::AlreadyApplied { .. })
        ));
        store
            .create(&catalog, NewApplication::new("fis-110", Some(PositionCategory::Laboratorio)))
            .unwrap();

        assert_eq!(
            store.applied_categories("fis-110"),
            vec![PositionCategory::Catedra, PositionCategory::Laboratorio]
        );
        assert_eq!(store.pending_count_for("fis-110"), 2);
    }

    #[test]
    fn cancel_shifts_lower_ranked_applications_up() {
        let (_, mut store, ids) = filled(&["inf-134", "inf-253", "inf-239"]);

        assert!(store.cancel(&ids[0]));

        let cancelled = store.get(&ids[0]).unwrap();
        assert_eq!(cancelled.status, ApplicationStatus::Cancelled);
        assert_eq!(cancelled.priority, None);
        assert_eq!(store.get(&ids[1]).unwrap().priority, Some(1));
        assert_eq!(store.get(&ids[2]).unwrap().priority, Some(2));
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn cancel_is_idempotent() {
        let (_, mut store, ids) = filled(&["inf-134", "inf-253"]);
        assert!(store.cancel(&ids[1]));
        let after_first = store.all().to_vec();

        assert!(!store.cancel(&ids[1]));
        assert!(!store.cancel("app-404"));
        assert_eq!(store.all(), after_first.as_slice());
    }

    #[test]
    fn cancelled_application_frees_the_position_again() {
        let (catalog, mut store, ids) = filled(&["inf-134"]);
        assert!(store.has_applied("inf-134"));
        store.cancel(&ids[0]);
        assert!(!store.has_applied("inf-134"));

        let again = store.create(&catalog, NewApplication::new("inf-134", None)).unwrap();
        assert_eq!(again.priority, Some(1));
        assert_ne!(again.id, ids[0]);
    }

    #[test]
    fn move_up_and_down_respect_boundaries() {
        let (_, mut store, ids) = filled(&["inf-134", "inf-253", "inf-239"]);
        let before = store.all().to_vec();

        assert!(!store.move_up(&ids[0]));
        assert!(!store.move_down(&ids[2]));
        assert_eq!(store.all(), before.as_slice());

        assert!(store.move_down(&ids[0]));
        assert_eq!(pending_ids(&store), vec![ids[1].clone(), ids[0].clone(), ids[2].clone()]);
        assert!(store.move_up(&ids[2]));
        assert_eq!(pending_ids(&store), vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);
    }

    #[test]
    fn moving_a_cancelled_application_is_a_no_op() {
        let (_, mut store, ids) = filled(&["inf-134", "inf-253"]);
        store.cancel(&ids[1]);
        assert!(!store.move_up(&ids[1]));
        assert!(!store.move_down(&ids[1]));
    }

    #[test]
    fn reorder_assigns_priorities_in_sequence_order() {
        let (_, mut store, ids) = filled(&["inf-134", "inf-253", "inf-239"]);
        let new_order = vec![ids[2].clone(), ids[0].clone(), ids[1].clone()];

        store.reorder(&new_order).unwrap();
        assert_eq!(pending_ids(&store), new_order);
        assert_eq!(store.get(&ids[2]).unwrap().priority, Some(1));
    }

    #[test]
    fn reorder_rejects_non_permutations() {
        let (_, mut store, ids) = filled(&["inf-134", "inf-253"]);
        let before = store.all().to_vec();

        assert!(store.reorder(&[ids[0].as_str()]).is_err());
        assert!(store.reorder(&[ids[0].as_str(), ids[0].as_str()]).is_err());
        assert!(store.reorder(&[ids[0].as_str(), "app-404"]).is_err());

        store.cancel(&ids[1]);
        let after_cancel = store.all().to_vec();
        assert!(store.reorder(&[ids[1].as_str(), ids[0].as_str()]).is_err());
        assert_eq!(store.all(), after_cancel.as_slice());
        assert_ne!(before, after_cancel);
    }

    #[test]
    fn move_to_index_matches_incremental_moves() {
        let (_, mut dragged, ids) = filled(&["inf-134", "inf-253", "inf-239"]);
        let mut stepped = dragged.clone();

        assert!(dragged.move_to_index(2, 0));
        assert!(stepped.move_up(&ids[2]));
        assert!(stepped.move_up(&ids[2]));

        assert_eq!(pending_ids(&dragged), pending_ids(&stepped));
        assert!(!dragged.move_to_index(1, 1));
    }
}
