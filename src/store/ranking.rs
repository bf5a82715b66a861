//! Dense priority ranking over pending applications.
//!
//! The ranked set is the pending subset of an application list. Its priorities
//! always form the sequence `1..=K` where `K` is the number of pending
//! applications. Every function here either leaves the list untouched or
//! finishes by renumbering, so the invariant holds after each call.
//!
//! Functions take the full application slice (cancelled records included) and
//! address pending applications by their position in the displayed order,
//! i.e. sorted ascending by priority.

use crate::domain::Application;

/// Direction of a single-step move in the displayed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Towards priority 1.
    Up,
    /// Towards priority K.
    Down,
}

/// Returns slice indices of pending applications, sorted by ascending priority.
///
/// Ties (which only exist in hand-built inputs) keep slice order.
///
/// # Parameters
///
/// * `applications` - Every application, cancelled ones included
///
/// # Returns
///
/// Indices into `applications`; element `i` is the application displayed at
/// row `i`.
#[must_use]
pub fn pending_order(applications: &[Application]) -> Vec<usize> {
    let mut order: Vec<usize> = applications
        .iter()
        .enumerate()
        .filter(|(_, app)| app.is_pending())
        .map(|(idx, _)| idx)
        .collect();
    order.sort_by_key(|&idx| applications[idx].priority.unwrap_or(u32::MAX));
    order
}

/// Priority a newly created application receives: pending count + 1.
#[must_use]
pub fn next_priority(applications: &[Application]) -> u32 {
    let pending = applications.iter().filter(|app| app.is_pending()).count();
    u32::try_from(pending).unwrap_or(u32::MAX - 1) + 1
}

/// Assigns priorities `1..=K` following `order`.
///
/// # Parameters
///
/// * `applications` - Every application, cancelled ones included
/// * `order` - Slice indices of the pending applications, best first
pub fn assign(applications: &mut [Application], order: &[usize]) {
    for (rank, &idx) in order.iter().enumerate() {
        applications[idx].priority = Some(u32::try_from(rank).unwrap_or(u32::MAX - 1) + 1);
    }
}

/// Re-ranks the pending set by ascending former priority.
///
/// Used after a cancellation: applications ranked before the removed one keep
/// their value, the ones after it shift down by one.
pub fn renumber(applications: &mut [Application]) {
    let order = pending_order(applications);
    assign(applications, &order);
}

/// Swaps the application at `position` (displayed order) with its neighbour.
///
/// # Parameters
///
/// * `applications` - Every application, cancelled ones included
/// * `position` - Row in the displayed order
/// * `direction` - [`Step::Up`] towards priority 1, [`Step::Down`] away from it
///
/// # Returns
///
/// `false` without touching anything when `position` is out of range or
/// already at the boundary in the requested direction.
pub fn step(applications: &mut [Application], position: usize, direction: Step) -> bool {
    let order = pending_order(applications);
    let neighbour = match direction {
        Step::Up => position.checked_sub(1),
        Step::Down => Some(position + 1).filter(|&n| n < order.len()),
    };

    let (Some(&current), Some(neighbour)) = (order.get(position), neighbour) else {
        return false;
    };
    let other = order[neighbour];

    let current_priority = applications[current].priority;
    applications[current].priority = applications[other].priority;
    applications[other].priority = current_priority;
    true
}

/// Moves the application displayed at `from` so that it is displayed at `to`.
///
/// Elements in between shift by one. This is one hover step of a drag gesture.
///
/// # Parameters
///
/// * `applications` - Every application, cancelled ones included
/// * `from` - Row of the dragged application
/// * `to` - Row it lands on
///
/// # Returns
///
/// `false` for `from == to` or out-of-range rows; the list is then unchanged.
pub fn move_to_index(applications: &mut [Application], from: usize, to: usize) -> bool {
    let mut order = pending_order(applications);
    if from == to || from >= order.len() || to >= order.len() {
        return false;
    }

    let dragged = order.remove(from);
    order.insert(to, dragged);
    assign(applications, &order);
    true
}

/// Checks that pending priorities are exactly `{1..=K}` and cancelled ones are unset.
#[must_use]
pub fn is_dense(applications: &[Application]) -> bool {
    let mut priorities: Vec<u32> = Vec::new();
    for app in applications {
        match (app.is_pending(), app.priority) {
            (true, Some(p)) => priorities.push(p),
            (false, None) => {}
            _ => return false,
        }
    }
    priorities.sort_unstable();
    priorities
        .iter()
        .enumerate()
        .all(|(rank, &p)| usize::try_from(p).is_ok_and(|p| p == rank + 1))
}
