//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! catalog loading, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. The plugin shim maps Zellij key presses to [`Event`]s, taking the current
//!    tab and input mode into account
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations go through `AppState`, `ListingQuery` and `ApplicationStore`
//! 4. Actions are collected and returned for execution
//!
//! Store rejections never fail the handler: they become an error notice in the
//! footer and the state is left as it was.
//!
//! # Example
//!
//! ```rust
//! use pau::app::{handle_event, AppState, Event};
//! use pau::catalog::Catalog;
//! use pau::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::SwitchTab)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), pau::PortalError>(())
//! ```

use super::form::ApplyForm;
use super::modes::{InputMode, Tab};
use super::state::{CatalogStatus, Notice};
use crate::app::{Action, AppState};
use crate::catalog::Catalog;
use crate::domain::error::{PortalError, Result};
use crate::listing::{DepartmentPicker, SortKey};

/// Events triggered by user input or catalog loading.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. Events that do not apply to the current tab or input
/// mode are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (or the grabbed application one place down).
    KeyDown,
    /// Moves the cursor up (or the grabbed application one place up).
    KeyUp,
    /// Shows the next listing page.
    NextPage,
    /// Shows the previous listing page.
    PrevPage,
    /// Jumps to a listing page by number (1-based).
    GoToPage(usize),
    /// Switches between the Positions and Applications tabs.
    SwitchTab,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Starts editing the listing search text.
    SearchMode,
    /// Opens the department picker.
    OpenDepartmentPicker,
    /// Advances the category filter.
    CycleCategory,
    /// Advances the status filter.
    CycleStatus,
    /// Sorts by a column, toggling direction if it is already the sort column.
    SortBy(SortKey),
    /// Clears department, category and status filters.
    ClearFilters,

    /// Types a character into the focused text field.
    Char(char),
    /// Deletes the last character of the focused text field.
    Backspace,
    /// Enter: accept the current dialog, or open the apply form.
    Confirm,
    /// Esc: back out of the current input mode.
    Escape,

    /// Selects the next remaining category in the apply form.
    CycleFormCategory,
    /// Toggles the section in the apply form.
    ToggleSection,

    /// Swaps the selected application with the one above it.
    MoveApplicationUp,
    /// Swaps the selected application with the one below it.
    MoveApplicationDown,
    /// Grabs the selected application, or drops the grabbed one.
    ToggleGrab,
    /// Asks to cancel the selected application.
    CancelApplication,

    /// The catalog finished loading.
    CatalogLoaded(Catalog),
    /// The catalog could not be loaded.
    CatalogFailed {
        /// Description of the failure.
        error: String,
    },
}

impl Event {
    /// Whether the event comes from the keyboard.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        !matches!(self, Self::CatalogLoaded(_) | Self::CatalogFailed { .. })
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render and the actions to run in order.
/// A pending notice is dismissed by any key press.
///
/// # Errors
///
/// Currently every failure is absorbed into a notice; the `Result` is kept so the
/// plugin shim handles all events uniformly.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event",
        event_type = ?event,
        tab = ?state.tab,
        input_mode = ?state.input_mode
    ).entered();

    let dismissed_notice = event.is_user_input() && state.notice.take().is_some();
    let (should_render, actions) = dispatch(state, event)?;
    Ok((should_render || dismissed_notice, actions))
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let mode = state.input_mode;
    let tab = state.tab;

    match event {
        Event::KeyDown | Event::KeyUp => Ok((move_cursor(state, event == &Event::KeyDown), vec![])),
        Event::NextPage if is_listing(mode, tab) => {
            let total_pages = state.current_page().total_pages;
            let moved = state.query.next_page(total_pages);
            if moved {
                state.selected_index = 0;
            }
            Ok((moved, vec![]))
        }
        Event::PrevPage if is_listing(mode, tab) => {
            let moved = state.query.prev_page();
            if moved {
                state.selected_index = 0;
            }
            Ok((moved, vec![]))
        }
        Event::GoToPage(page) if is_listing(mode, tab) => {
            let total_pages = state.current_page().total_pages;
            let moved = state.query.go_to_page(*page, total_pages);
            if moved {
                state.selected_index = 0;
            }
            Ok((moved, vec![]))
        }
        Event::SwitchTab if mode == InputMode::Normal => {
            state.tab = tab.toggled();
            state.clamp_selection();
            tracing::debug!(tab = ?state.tab, "switched tab");
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode if is_listing(mode, tab) => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::OpenDepartmentPicker if is_listing(mode, tab) => {
            state.picker = DepartmentPicker::new();
            if let Some(current) = &state.query.department {
                state.picker.selected = state
                    .departments
                    .iter()
                    .position(|d| d == current)
                    .unwrap_or(0);
            }
            state.input_mode = InputMode::DepartmentPicker;
            Ok((true, vec![]))
        }
        Event::CycleCategory if is_listing(mode, tab) => {
            state.query.cycle_category();
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::CycleStatus if is_listing(mode, tab) => {
            state.query.cycle_status();
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::SortBy(key) if is_listing(mode, tab) => {
            state.query.select_sort(*key);
            state.selected_index = 0;
            tracing::debug!(sort = ?state.query.sort, direction = ?state.query.direction, "sort changed");
            Ok((true, vec![]))
        }
        Event::ClearFilters if is_listing(mode, tab) => {
            let had_filters = state.query.has_filters();
            state.query.clear_filters();
            state.selected_index = 0;
            Ok((had_filters, vec![]))
        }
        Event::Char(c) => Ok((type_char(state, *c), vec![])),
        Event::Backspace => Ok((delete_char(state), vec![])),
        Event::Confirm => Ok((confirm(state), vec![])),
        Event::Escape => Ok((escape(state), vec![])),
        Event::CycleFormCategory if mode == InputMode::ApplyForm => {
            if let Some(form) = state.form.as_mut() {
                form.cycle_category();
            }
            Ok((true, vec![]))
        }
        Event::ToggleSection if mode == InputMode::ApplyForm => {
            if let Some(form) = state.form.as_mut() {
                form.toggle_section();
            }
            Ok((true, vec![]))
        }
        Event::MoveApplicationUp | Event::MoveApplicationDown
            if mode == InputMode::Normal && tab == Tab::Applications =>
        {
            let Some(id) = state.selected_pending().map(|app| app.id.clone()) else {
                return Ok((false, vec![]));
            };
            let moved = if event == &Event::MoveApplicationUp {
                let moved = state.store.move_up(&id);
                if moved {
                    state.selected_application -= 1;
                }
                moved
            } else {
                let moved = state.store.move_down(&id);
                if moved {
                    state.selected_application += 1;
                }
                moved
            };
            Ok((moved, vec![]))
        }
        Event::ToggleGrab if tab == Tab::Applications => Ok((toggle_grab(state), vec![])),
        Event::CancelApplication if mode == InputMode::Normal && tab == Tab::Applications => {
            let Some(id) = state.selected_pending().map(|app| app.id.clone()) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(application_id = %id, "asking for cancel confirmation");
            state.pending_cancel = Some(id);
            state.input_mode = InputMode::ConfirmCancel;
            Ok((true, vec![]))
        }
        Event::CatalogLoaded(catalog) => {
            tracing::info!(
                positions = catalog.len(),
                departments = catalog.departments().len(),
                "catalog ready"
            );
            state.set_catalog(catalog.clone());
            Ok((true, vec![]))
        }
        Event::CatalogFailed { error } => {
            tracing::warn!(error = %error, "catalog load failed, listing stays empty");
            state.catalog_status = CatalogStatus::Failed(error.clone());
            Ok((true, vec![]))
        }
        _ => {
            tracing::trace!("event ignored in current mode");
            Ok((false, vec![]))
        }
    }
}

const fn is_listing(mode: InputMode, tab: Tab) -> bool {
    matches!(mode, InputMode::Normal) && matches!(tab, Tab::Positions)
}

fn move_cursor(state: &mut AppState, down: bool) -> bool {
    match state.input_mode {
        InputMode::Normal => {
            if down {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
            true
        }
        InputMode::DepartmentPicker => {
            let count = state.picker.matches(&state.departments).len();
            if down {
                state.picker.move_down(count);
            } else {
                state.picker.move_up(count);
            }
            true
        }
        InputMode::Grabbing => {
            let from = state.selected_application;
            let to = if down { from + 1 } else { from.wrapping_sub(1) };
            let moved = state.store.move_to_index(from, to);
            if moved {
                state.selected_application = to;
            }
            moved
        }
        InputMode::Search | InputMode::ApplyForm | InputMode::ConfirmCancel => false,
    }
}

fn type_char(state: &mut AppState, c: char) -> bool {
    match state.input_mode {
        InputMode::Search => {
            state.query.push_search_char(c);
            state.selected_index = 0;
            tracing::trace!(query = %state.query.search, "search updated");
            true
        }
        InputMode::DepartmentPicker => {
            state.picker.push_char(c);
            true
        }
        InputMode::ApplyForm => {
            if let Some(form) = state.form.as_mut() {
                form.push_char(c);
            }
            true
        }
        InputMode::Normal | InputMode::ConfirmCancel | InputMode::Grabbing => false,
    }
}

fn delete_char(state: &mut AppState) -> bool {
    match state.input_mode {
        InputMode::Search => {
            state.query.pop_search_char();
            state.selected_index = 0;
            true
        }
        InputMode::DepartmentPicker => {
            state.picker.pop_char();
            true
        }
        InputMode::ApplyForm => {
            if let Some(form) = state.form.as_mut() {
                form.pop_char();
            }
            true
        }
        InputMode::Normal | InputMode::ConfirmCancel | InputMode::Grabbing => false,
    }
}

fn confirm(state: &mut AppState) -> bool {
    match (state.input_mode, state.tab) {
        (InputMode::Search, _) => {
            state.input_mode = InputMode::Normal;
            true
        }
        (InputMode::DepartmentPicker, _) => {
            let picked = state.picker.selected_department(&state.departments);
            if let Some(department) = picked {
                tracing::debug!(department = %department, "department selected");
                state.query.set_department(Some(department));
                state.selected_index = 0;
            }
            state.input_mode = InputMode::Normal;
            true
        }
        (InputMode::ApplyForm, _) => {
            submit_form(state);
            true
        }
        (InputMode::ConfirmCancel, _) => {
            if let Some(id) = state.pending_cancel.take() {
                let title = state.store.get(&id).map(|app| app.position_title.clone());
                if state.store.cancel(&id) {
                    state.notice = Some(Notice::info(format!(
                        "Postulación a {} cancelada",
                        title.unwrap_or(id)
                    )));
                }
            }
            state.input_mode = InputMode::Normal;
            state.clamp_selection();
            true
        }
        (InputMode::Grabbing, _) => toggle_grab(state),
        (InputMode::Normal, Tab::Positions) => open_form(state),
        (InputMode::Normal, Tab::Applications) => false,
    }
}

fn escape(state: &mut AppState) -> bool {
    match state.input_mode {
        InputMode::Search => {
            state.query.set_search("");
            state.input_mode = InputMode::Normal;
            state.selected_index = 0;
            true
        }
        InputMode::DepartmentPicker | InputMode::ApplyForm | InputMode::ConfirmCancel => {
            state.form = None;
            state.pending_cancel = None;
            state.input_mode = InputMode::Normal;
            true
        }
        InputMode::Grabbing => {
            restore_grab(state);
            true
        }
        InputMode::Normal => false,
    }
}

fn open_form(state: &mut AppState) -> bool {
    let Some(position) = state.selected_position().cloned() else {
        return false;
    };

    let eligibility = state.store.eligibility(&position);
    if !eligibility.can_apply() {
        let text = if position.is_open() {
            format!("Ya postulaste a {}", position.title)
        } else {
            format!("{} no está disponible", position.title)
        };
        state.notice = Some(Notice::error(text));
        return true;
    }

    tracing::debug!(position_id = %position.id, remaining = ?eligibility.remaining_categories, "opening apply form");
    state.form = Some(ApplyForm::open(&position.id, &position.title, &eligibility));
    state.input_mode = InputMode::ApplyForm;
    true
}

fn submit_form(state: &mut AppState) {
    let Some(form) = state.form.take() else {
        state.input_mode = InputMode::Normal;
        return;
    };
    state.input_mode = InputMode::Normal;

    match state.store.create(&state.catalog, form.to_request()) {
        Ok(application) => {
            tracing::info!(
                application_id = %application.id,
                position_id = %application.position_id,
                priority = ?application.priority,
                "application submitted"
            );
            state.notice = Some(Notice::info(format!(
                "Postulación enviada: {} (prioridad {})",
                application.position_title,
                application.priority.unwrap_or_default()
            )));
        }
        Err(e) => {
            tracing::debug!(error = %e, "application rejected");
            state.notice = Some(Notice::error(rejection_notice(&e, &form.position_title)));
        }
    }
}

/// User-facing text for a store rejection.
fn rejection_notice(error: &PortalError, title: &str) -> String {
    match error {
        PortalError::PositionClosed(_) => format!("{title} está cerrada"),
        PortalError::AlreadyApplied { category: Some(c), .. } => {
            format!("Ya postulaste a {title} como {c}")
        }
        PortalError::AlreadyApplied { category: None, .. } => format!("Ya postulaste a {title}"),
        PortalError::CategoryRequired(_) => format!("{title} requiere elegir una categoría"),
        PortalError::InvalidCategory { category, .. } => {
            format!("{title} no ofrece la categoría {category}")
        }
        other => other.to_string(),
    }
}

fn toggle_grab(state: &mut AppState) -> bool {
    match state.input_mode {
        InputMode::Normal => {
            if state.store.pending_len() < 2 {
                return false;
            }
            tracing::debug!(index = state.selected_application, "application grabbed");
            state.grab_origin = Some(state.pending_ids());
            state.input_mode = InputMode::Grabbing;
            true
        }
        InputMode::Grabbing => {
            tracing::debug!(index = state.selected_application, "application dropped");
            state.grab_origin = None;
            state.input_mode = InputMode::Normal;
            true
        }
        _ => false,
    }
}

/// Puts every application back where it was before the grab.
fn restore_grab(state: &mut AppState) {
    let grabbed = state.selected_pending().map(|app| app.id.clone());
    if let Some(origin) = state.grab_origin.take() {
        if let Err(e) = state.store.reorder(&origin) {
            tracing::warn!(error = %e, "could not restore order after grab");
        }
        if let Some(idx) = grabbed.and_then(|id| origin.iter().position(|o| *o == id)) {
            state.selected_application = idx;
        }
    }
    state.input_mode = InputMode::Normal;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::NoticeKind;
    use crate::domain::{NewApplication, Position, PositionCategory, PositionStatus};
    use crate::ui::Theme;

    fn ready_state() -> AppState {
        let catalog = Catalog::new(vec![
            Position::new("inf-134", "Estructuras de Datos", "Informática")
                .with_categories([PositionCategory::Catedra, PositionCategory::Laboratorio]),
            Position::new("inf-239", "Bases de Datos", "Informática"),
            Position::new("inf-276", "Sistemas Operativos", "Informática").with_status(PositionStatus::Closed),
            Position::new("fis-110", "Física General I", "Física"),
        ])
        .unwrap();
        let mut state = AppState::new(Catalog::default(), Theme::default());
        handle_event(&mut state, &Event::CatalogLoaded(catalog)).unwrap();
        state
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    fn pick_informatica(state: &mut AppState) {
        send(state, &[Event::OpenDepartmentPicker]);
        for c in "inform".chars() {
            send(state, &[Event::Char(c)]);
        }
        send(state, &[Event::Confirm]);
    }

    #[test]
    fn quit_closes_focus() {
        let mut state = ready_state();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn department_picker_sets_filter() {
        let mut state = ready_state();
        pick_informatica(&mut state);
        assert_eq!(state.query.department.as_deref(), Some("Informática"));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.current_page().total_items, 3);
    }

    #[test]
    fn escape_in_picker_keeps_previous_filter() {
        let mut state = ready_state();
        pick_informatica(&mut state);
        send(&mut state, &[Event::OpenDepartmentPicker, Event::Char('f'), Event::Escape]);
        assert_eq!(state.query.department.as_deref(), Some("Informática"));
    }

    #[test]
    fn search_escape_clears_and_enter_keeps() {
        let mut state = ready_state();
        pick_informatica(&mut state);

        send(&mut state, &[Event::SearchMode, Event::Char('b'), Event::Char('a'), Event::Confirm]);
        assert_eq!(state.query.search, "ba");
        assert_eq!(state.current_page().total_items, 1);

        send(&mut state, &[Event::SearchMode, Event::Escape]);
        assert_eq!(state.query.search, "");
    }

    #[test]
    fn apply_flow_creates_application_and_updates_label() {
        let mut state = ready_state();
        pick_informatica(&mut state);

        // Sorted by title: Bases de Datos, Estructuras de Datos, Sistemas Operativos.
        send(&mut state, &[Event::Confirm]);
        assert_eq!(state.input_mode, InputMode::ApplyForm);
        send(&mut state, &[Event::Char('o'), Event::Char('k'), Event::Confirm]);

        let pending = state.store.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].position_id, "inf-239");
        assert_eq!(pending[0].reason, "ok");
        assert!(state.notice.is_some());

        send(&mut state, &[Event::Confirm]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.store.pending().len(), 1);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn categorised_position_can_be_applied_once_per_category() {
        let mut state = ready_state();
        pick_informatica(&mut state);
        send(&mut state, &[Event::KeyDown]);

        send(&mut state, &[Event::Confirm, Event::Confirm]);
        send(&mut state, &[Event::Confirm, Event::Confirm]);
        assert_eq!(
            state.store.applied_categories("inf-134"),
            vec![PositionCategory::Catedra, PositionCategory::Laboratorio]
        );

        send(&mut state, &[Event::Confirm]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.store.pending().len(), 2);
    }

    #[test]
    fn closed_position_does_not_open_the_form() {
        let mut state = ready_state();
        pick_informatica(&mut state);
        send(&mut state, &[Event::KeyUp, Event::Confirm]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.form.is_none());
    }

    fn with_three_applications() -> AppState {
        let mut state = ready_state();
        for id in ["inf-239", "fis-110"] {
            state
                .store
                .create(&state.catalog, NewApplication::new(id, None))
                .unwrap();
        }
        state
            .store
            .create(
                &state.catalog,
                NewApplication::new("inf-134", Some(PositionCategory::Catedra)),
            )
            .unwrap();
        send(&mut state, &[Event::SwitchTab]);
        state
    }

    fn pending_positions(state: &AppState) -> Vec<String> {
        state.store.pending().iter().map(|a| a.position_id.clone()).collect()
    }

    #[test]
    fn move_keys_reorder_and_follow_the_application() {
        let mut state = with_three_applications();
        send(&mut state, &[Event::MoveApplicationDown, Event::MoveApplicationDown]);
        assert_eq!(pending_positions(&state), vec!["fis-110", "inf-134", "inf-239"]);
        assert_eq!(state.selected_application, 2);

        let (render, _) = handle_event(&mut state, &Event::MoveApplicationDown).unwrap();
        assert!(!render);
    }

    #[test]
    fn grab_escape_restores_original_order() {
        let mut state = with_three_applications();
        send(&mut state, &[Event::ToggleGrab, Event::KeyDown, Event::KeyDown]);
        assert_eq!(pending_positions(&state), vec!["fis-110", "inf-134", "inf-239"]);

        send(&mut state, &[Event::Escape]);
        assert_eq!(pending_positions(&state), vec!["inf-239", "fis-110", "inf-134"]);
        assert_eq!(state.selected_application, 0);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn grab_drop_keeps_new_order() {
        let mut state = with_three_applications();
        send(&mut state, &[Event::KeyDown, Event::KeyDown, Event::ToggleGrab, Event::KeyUp, Event::KeyUp]);
        send(&mut state, &[Event::ToggleGrab]);
        assert_eq!(pending_positions(&state), vec!["inf-134", "inf-239", "fis-110"]);
        assert!(state.grab_origin.is_none());
    }

    #[test]
    fn cancel_requires_confirmation() {
        let mut state = with_three_applications();
        send(&mut state, &[Event::CancelApplication]);
        assert_eq!(state.input_mode, InputMode::ConfirmCancel);
        send(&mut state, &[Event::Escape]);
        assert_eq!(state.store.pending().len(), 3);

        send(&mut state, &[Event::CancelApplication, Event::Confirm]);
        assert_eq!(pending_positions(&state), vec!["fis-110", "inf-134"]);
        assert_eq!(state.store.pending()[0].priority, Some(1));
    }

    #[test]
    fn notice_is_dismissed_by_next_key() {
        let mut state = ready_state();
        state.notice = Some(Notice::info("hola"));
        let (render, _) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(render);
        assert!(state.notice.is_none());
    }

    #[test]
    fn catalog_failure_is_reported_in_state() {
        let mut state = AppState::new(Catalog::default(), Theme::default());
        handle_event(&mut state, &Event::CatalogFailed { error: "boom".to_string() }).unwrap();
        assert_eq!(state.catalog_status, CatalogStatus::Failed("boom".to_string()));
    }
}
