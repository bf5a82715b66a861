//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: labels are already formatted,
//! text is already truncated, and selection is already resolved.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar and tab strip.
    pub header: HeaderInfo,

    /// Content of the active tab.
    pub body: BodyView,

    /// Footer information (keybindings and the current notice).
    pub footer: FooterInfo,

    /// Dialog drawn over the body, if an input mode needs one.
    pub overlay: Option<Overlay>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Tabs in display order.
    pub tabs: Vec<TabInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub label: String,
    pub is_active: bool,
}

/// Content of the active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Positions(PositionsView),
    Applications(ApplicationsView),
}

/// The positions listing: filters, one page of rows, and the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionsView {
    pub filter_bar: FilterBarInfo,
    pub rows: Vec<PositionRow>,
    pub pager: PagerInfo,

    /// Character width reserved for the title column.
    pub title_width: usize,

    /// Shown instead of the table when there are no rows.
    pub empty_state: Option<EmptyState>,
}

/// Current listing controls, formatted for the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub search: String,
    /// Whether the search field has input focus.
    pub search_active: bool,
    pub department: String,
    pub category: String,
    pub status: String,
    /// Sort column and direction, e.g. `"título ▲"`.
    pub sort: String,
}

/// Display information for a single position row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRow {
    /// Title, already truncated to the title column.
    pub title: String,
    pub categories: String,
    pub status_label: String,
    pub is_open: bool,
    /// Applicant counter, e.g. `"13/4"` (applicants over slots).
    pub applicants: String,
    /// `"Postular"`, `"Ya postulaste"` or `"No disponible"`.
    pub action_label: String,
    pub can_apply: bool,
    pub is_selected: bool,

    /// Character ranges of the title matched by the search text.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Pagination controls under the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    /// Page numbers to show, at most five.
    pub pages: Vec<usize>,
    pub current: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

/// The user's pending applications in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationsView {
    pub rows: Vec<ApplicationRow>,
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single application row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRow {
    pub priority: u32,
    pub title: String,
    pub department: String,
    /// Category label, or an empty string for categoryless positions.
    pub category: String,
    pub section: String,
    /// Submission date in the configured format.
    pub submitted: String,
    pub is_selected: bool,
    /// Whether this row is being dragged.
    pub is_grabbed: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current tab and input mode.
    pub keybindings: String,

    /// Advisory message from the last operation.
    pub notice: Option<NoticeInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeInfo {
    pub text: String,
    pub is_error: bool,
}

/// Dialog drawn over the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    DepartmentPicker(PickerView),
    ApplyForm(FormView),
    ConfirmCancel(ConfirmView),
}

/// Department picker dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub query: String,
    pub items: Vec<PickerItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub name: String,
    pub is_selected: bool,
    /// Whether this department is the active filter.
    pub is_current: bool,
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Apply form dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub position_title: String,
    /// Selected category label; `None` for categoryless positions.
    pub category: Option<String>,
    /// Number of categories the user can still choose from.
    pub category_choices: usize,
    pub section: String,
    pub reason: String,
}

/// Cancellation confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmView {
    pub message: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Selecciona un departamento").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
