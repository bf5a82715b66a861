//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns the position catalog, the application store and every piece of
//! transient UI state, and it is the single writer of all of them.
//!
//! # State Components
//!
//! - **Catalog**: positions loaded at startup, read-only afterwards
//! - **Store**: the user's applications and their priority ranking
//! - **Query**: listing filters, sort and current page
//! - **Selection**: cursor row in the listing page and in the applications list
//! - **Mode**: active tab, input mode and the state of the open dialog
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] derives a renderable snapshot from state. It
//! runs the listing query, evaluates eligibility per row, and windows the
//! applications list to the terminal height.

use super::form::ApplyForm;
use super::modes::{InputMode, Tab};
use crate::catalog::Catalog;
use crate::domain::{Application, Position};
use crate::listing::{self, collation, DepartmentPicker, ListingQuery, Page, SortKey, DEFAULT_PAGE_SIZE};
use crate::store::ApplicationStore;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ApplicationRow, ApplicationsView, BodyView, ConfirmView, EmptyState, FilterBarInfo, FooterInfo,
    FormView, HeaderInfo, NoticeInfo, Overlay, PagerInfo, PickerItem, PickerView, PositionRow,
    PositionsView, TabInfo, UIViewModel,
};

/// Default `chrono` format for submission dates.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Rows used by header, tabs, filter bar, borders, table header and footer.
const CHROME_ROWS: usize = 10;

/// Width of the categories column of the positions table.
pub const CATEGORIES_WIDTH: usize = 20;

/// Width of every fixed column of the positions table, separators included.
const FIXED_POSITION_COLUMNS: usize = 53;

/// Where the catalog load stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// Waiting for permissions and the first load.
    #[default]
    Loading,
    Ready,
    /// Load failed; the listing stays empty.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Advisory message shown in the footer until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Central application state container.
///
/// Mutated only by the event handler. View models are computed on demand from
/// state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Positions available this session.
    pub catalog: Catalog,

    /// Sorted unique departments of the catalog, cached at load.
    pub departments: Vec<String>,

    pub catalog_status: CatalogStatus,

    /// The user's applications. All mutations go through its operations.
    pub store: ApplicationStore,

    /// Listing controls of the Positions tab.
    pub query: ListingQuery,

    /// Positions per listing page.
    pub page_size: usize,

    /// `chrono` format used for submission dates.
    pub date_format: String,

    pub tab: Tab,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Zero-based row of the selected position within the current page.
    pub selected_index: usize,

    /// Zero-based index of the selected application in priority order.
    pub selected_application: usize,

    /// Department picker query and cursor.
    pub picker: DepartmentPicker,

    /// Open apply form, if any.
    pub form: Option<ApplyForm>,

    /// Application awaiting cancellation confirmation.
    pub pending_cancel: Option<String>,

    /// Pending order before the current grab started, for Esc to restore.
    pub grab_origin: Option<Vec<String>>,

    pub notice: Option<Notice>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a state over `catalog` with default listing settings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pau::app::AppState;
    /// use pau::catalog::Catalog;
    /// use pau::ui::Theme;
    ///
    /// let state = AppState::new(Catalog::default(), Theme::default());
    /// assert_eq!(state.page_size, 7);
    /// assert!(state.store.all().is_empty());
    /// ```
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let departments = catalog.departments();
        Self {
            catalog,
            departments,
            catalog_status: CatalogStatus::Loading,
            store: ApplicationStore::new(),
            query: ListingQuery::default(),
            page_size: DEFAULT_PAGE_SIZE,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            tab: Tab::Positions,
            input_mode: InputMode::Normal,
            selected_index: 0,
            selected_application: 0,
            picker: DepartmentPicker::new(),
            form: None,
            pending_cancel: None,
            grab_origin: None,
            notice: None,
            theme,
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Replaces the catalog after a (re)load.
    ///
    /// A department filter that no longer exists is cleared.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        let _span = tracing::debug_span!("set_catalog", positions = catalog.len()).entered();

        self.departments = catalog.departments();
        self.catalog = catalog;
        self.catalog_status = CatalogStatus::Ready;

        let stale = self
            .query
            .department
            .as_ref()
            .is_some_and(|d| !self.departments.contains(d));
        if stale {
            tracing::debug!(department = ?self.query.department, "clearing stale department filter");
            self.query.set_department(None);
        }
        self.clamp_selection();
    }

    /// The listing page selected by the current query.
    #[must_use]
    pub fn current_page(&self) -> Page<'_> {
        listing::compute_page(self.catalog.positions(), &self.query, self.page_size)
    }

    /// Returns the position under the cursor on the current page, if any.
    #[must_use]
    pub fn selected_position(&self) -> Option<&Position> {
        self.current_page().items.get(self.selected_index).copied()
    }

    /// Returns the application under the cursor, if any.
    #[must_use]
    pub fn selected_pending(&self) -> Option<&Application> {
        self.store.pending().get(self.selected_application).copied()
    }

    /// Published applicant count plus the user's own pending applications.
    #[must_use]
    pub fn applicant_count(&self, position: &Position) -> u32 {
        let own = u32::try_from(self.store.pending_count_for(&position.id)).unwrap_or(u32::MAX);
        position.current_applicants.unwrap_or(0).saturating_add(own)
    }

    /// Moves the cursor down in the active list, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        match self.tab {
            Tab::Positions => {
                let len = self.current_page().items.len();
                if len > 0 {
                    self.selected_index = (self.selected_index + 1) % len;
                }
            }
            Tab::Applications => {
                let len = self.store.pending_len();
                if len > 0 {
                    self.selected_application = (self.selected_application + 1) % len;
                }
            }
        }
    }

    /// Moves the cursor up in the active list, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        match self.tab {
            Tab::Positions => {
                let len = self.current_page().items.len();
                if len > 0 {
                    self.selected_index = self.selected_index.checked_sub(1).unwrap_or(len - 1);
                }
            }
            Tab::Applications => {
                let len = self.store.pending_len();
                if len > 0 {
                    self.selected_application =
                        self.selected_application.checked_sub(1).unwrap_or(len - 1);
                }
            }
        }
    }

    /// Keeps both cursors inside their lists and the page inside the listing.
    pub fn clamp_selection(&mut self) {
        let page = self.current_page();
        let (page_number, rows) = (page.page, page.items.len());
        self.query.page = page_number;
        self.selected_index = self.selected_index.min(rows.saturating_sub(1));
        self.selected_application = self
            .selected_application
            .min(self.store.pending_len().saturating_sub(1));
    }

    /// Ids of the pending applications in priority order.
    #[must_use]
    pub fn pending_ids(&self) -> Vec<String> {
        self.store.pending().into_iter().map(|app| app.id.clone()).collect()
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pau::app::AppState;
    /// use pau::catalog::Catalog;
    /// use pau::ui::{BodyView, Theme};
    ///
    /// let state = AppState::new(Catalog::default(), Theme::default());
    /// let viewmodel = state.compute_viewmodel(24, 100);
    /// assert!(matches!(viewmodel.body, BodyView::Positions(_)));
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows = rows, cols = cols).entered();

        let body = match self.tab {
            Tab::Positions => BodyView::Positions(self.compute_positions_view(cols)),
            Tab::Applications => BodyView::Applications(self.compute_applications_view(rows)),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
            overlay: self.compute_overlay(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let pending = self.store.pending_len();
        let tabs = [Tab::Positions, Tab::Applications]
            .into_iter()
            .map(|tab| TabInfo {
                label: match tab {
                    Tab::Positions => tab.label().to_string(),
                    Tab::Applications => format!("{} ({pending})", tab.label()),
                },
                is_active: tab == self.tab,
            })
            .collect();

        HeaderInfo {
            title: " PAU · Portal de Ayudantías ".to_string(),
            tabs,
        }
    }

    fn compute_positions_view(&self, cols: usize) -> PositionsView {
        let title_width = cols.saturating_sub(FIXED_POSITION_COLUMNS).clamp(12, 48);
        let page = self.current_page();

        let rows: Vec<PositionRow> = page
            .items
            .iter()
            .enumerate()
            .map(|(idx, position)| self.compute_position_row(position, idx, title_width))
            .collect();

        let empty_state = if rows.is_empty() {
            Some(self.positions_empty_state())
        } else {
            None
        };

        PositionsView {
            filter_bar: self.compute_filter_bar(),
            rows,
            pager: PagerInfo {
                pages: page.window(),
                current: page.page,
                total_pages: page.total_pages,
                total_items: page.total_items,
                can_prev: page.can_prev(),
                can_next: page.can_next(),
            },
            title_width,
            empty_state,
        }
    }

    fn compute_position_row(&self, position: &Position, idx: usize, title_width: usize) -> PositionRow {
        let eligibility = self.store.eligibility(position);
        let title = truncate(&position.title, title_width);
        let visible = title.chars().count();

        let highlight_ranges = collation::match_range(&position.title, &self.query.search)
            .filter(|&(start, _)| start < visible)
            .map(|(start, end)| vec![(start, end.min(visible))])
            .unwrap_or_default();

        let applicants = self.applicant_count(position);
        let applicants = position
            .available_slots
            .map_or_else(|| applicants.to_string(), |slots| format!("{applicants}/{slots}"));

        PositionRow {
            title,
            categories: truncate(
                &position
                    .categories
                    .iter()
                    .map(|c| c.label())
                    .collect::<Vec<_>>()
                    .join(", "),
                CATEGORIES_WIDTH,
            ),
            status_label: position.status.label().to_string(),
            is_open: position.is_open(),
            applicants,
            action_label: eligibility.action_label().to_string(),
            can_apply: eligibility.can_apply(),
            is_selected: idx == self.selected_index && self.input_mode != InputMode::Search,
            highlight_ranges,
        }
    }

    fn positions_empty_state(&self) -> EmptyState {
        match &self.catalog_status {
            CatalogStatus::Loading => EmptyState {
                message: "Cargando catálogo…".to_string(),
                subtitle: "Esperando permisos de Zellij".to_string(),
            },
            CatalogStatus::Failed(error) => EmptyState {
                message: "No se pudo cargar el catálogo".to_string(),
                subtitle: error.clone(),
            },
            CatalogStatus::Ready if self.query.department.is_none() => EmptyState {
                message: "Selecciona un departamento".to_string(),
                subtitle: "Presiona d para elegir uno".to_string(),
            },
            CatalogStatus::Ready => EmptyState {
                message: "No hay ayudantías que coincidan".to_string(),
                subtitle: "Presiona x para limpiar los filtros".to_string(),
            },
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let sort_column = match self.query.sort {
            SortKey::Title => "título",
            SortKey::Status => "estado",
        };
        FilterBarInfo {
            search: self.query.search.clone(),
            search_active: self.input_mode == InputMode::Search,
            department: self
                .query
                .department
                .clone()
                .unwrap_or_else(|| "—".to_string()),
            category: self.query.category.label().to_string(),
            status: self.query.status.label().to_string(),
            sort: format!("{sort_column} {}", self.query.direction.arrow()),
        }
    }

    fn compute_applications_view(&self, rows: usize) -> ApplicationsView {
        let pending = self.store.pending();
        if pending.is_empty() {
            return ApplicationsView {
                rows: vec![],
                empty_state: Some(EmptyState {
                    message: "Aún no tienes postulaciones".to_string(),
                    subtitle: "Postula desde la pestaña Ayudantías".to_string(),
                }),
            };
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let mut visible_start = self.selected_application.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(pending.len());
        if visible_end - visible_start < available_rows && pending.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let grabbing = self.input_mode == InputMode::Grabbing;
        let rows = pending[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, app)| {
                let is_selected = visible_start + relative_idx == self.selected_application;
                ApplicationRow {
                    priority: app.priority.unwrap_or_default(),
                    title: app.position_title.clone(),
                    department: app.department.clone(),
                    category: app.category.map(|c| c.label().to_string()).unwrap_or_default(),
                    section: app.section.to_string(),
                    submitted: app.submitted_on(&self.date_format),
                    is_selected,
                    is_grabbed: grabbing && is_selected,
                }
            })
            .collect();

        ApplicationsView {
            rows,
            empty_state: None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.tab) {
            (InputMode::Search, _) => "Enter: aplicar  Esc: borrar búsqueda  Escribe para filtrar",
            (InputMode::DepartmentPicker, _) => "↑/↓: navegar  Enter: elegir  Esc: cerrar  Escribe para filtrar",
            (InputMode::ApplyForm, _) => "Tab: categoría  ←/→: sección  Enter: enviar  Esc: cerrar",
            (InputMode::ConfirmCancel, _) => "y/Enter: confirmar  n/Esc: volver",
            (InputMode::Grabbing, _) => "j/k: mover  Espacio: soltar  Esc: deshacer",
            (InputMode::Normal, Tab::Positions) => {
                "j/k: navegar  h/l: página  /: buscar  d: depto  c: categoría  s: estado  t/S: ordenar  x: limpiar  Enter: postular  Tab: pestaña  q: salir"
            }
            (InputMode::Normal, Tab::Applications) => {
                "j/k: navegar  K/J: subir/bajar  Espacio: arrastrar  X: cancelar  Tab: pestaña  q: salir"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            notice: self.notice.as_ref().map(|notice| NoticeInfo {
                text: notice.text.clone(),
                is_error: notice.kind == NoticeKind::Error,
            }),
        }
    }

    fn compute_overlay(&self) -> Option<Overlay> {
        match self.input_mode {
            InputMode::DepartmentPicker => {
                let items = self
                    .picker
                    .matches(&self.departments)
                    .into_iter()
                    .enumerate()
                    .map(|(idx, m)| PickerItem {
                        is_selected: idx == self.picker.selected,
                        is_current: self.query.department.as_deref() == Some(m.name.as_str()),
                        name: m.name,
                        highlight_ranges: m.highlight_ranges,
                    })
                    .collect();
                Some(Overlay::DepartmentPicker(PickerView {
                    query: self.picker.query.clone(),
                    items,
                }))
            }
            InputMode::ApplyForm => self.form.as_ref().map(|form| {
                Overlay::ApplyForm(FormView {
                    position_title: form.position_title.clone(),
                    category: form.category().map(|c| c.label().to_string()),
                    category_choices: form.choices.len(),
                    section: form.section.to_string(),
                    reason: form.reason.clone(),
                })
            }),
            InputMode::ConfirmCancel => self
                .pending_cancel
                .as_deref()
                .and_then(|id| self.store.get(id))
                .map(|app| {
                    Overlay::ConfirmCancel(ConfirmView {
                        message: format!(
                            "¿Cancelar tu postulación a {} (prioridad {})?",
                            app.position_title,
                            app.priority.unwrap_or_default()
                        ),
                    })
                }),
            InputMode::Normal | InputMode::Search | InputMode::Grabbing => None,
        }
    }
}
