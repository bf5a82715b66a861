//! Filter, sort and paginate view over the position catalog.
//!
//! [`compute_page`] turns the catalog and a [`ListingQuery`] into one display
//! page. The listing is deliberately empty until a department is chosen.
//!
//! # Modules
//!
//! - `query`: listing controls and their page-reset rules
//! - `collation`: Spanish title ordering and case-insensitive search
//! - `picker`: fuzzy department picker

pub mod collation;
pub mod picker;
pub mod query;

pub use picker::{DepartmentMatch, DepartmentPicker};
pub use query::{CategoryFilter, ListingQuery, SortDirection, SortKey, StatusFilter};

use crate::domain::Position;

/// Default number of positions per page.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Maximum number of page buttons shown at once.
pub const PAGE_WINDOW: usize = 5;

/// One page of the filtered and sorted listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// Positions on this page, in display order.
    pub items: Vec<&'a Position>,
    /// 1-based page number actually shown.
    pub page: usize,
    /// `ceil(total_items / page_size)`; zero for an empty result.
    pub total_pages: usize,
    /// Number of positions matching the query across all pages.
    pub total_items: usize,
}

impl Page<'_> {
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page numbers to show in the pager.
    #[must_use]
    pub fn window(&self) -> Vec<usize> {
        page_window(self.page, self.total_pages, PAGE_WINDOW)
    }
}

/// Returns whether `position` passes every filter of `query`.
///
/// Always `false` when no department is selected.
#[must_use]
pub fn matches(position: &Position, query: &ListingQuery) -> bool {
    let Some(department) = query.department.as_deref() else {
        return false;
    };

    let matches_search = query.search.is_empty()
        || collation::contains(&position.title, &query.search)
        || collation::contains(&position.department, &query.search);
    let matches_category = match query.category {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => position.offers(category),
    };
    let matches_status = match query.status {
        StatusFilter::All => true,
        StatusFilter::Only(status) => position.status == status,
    };

    matches_search && position.department == department && matches_category && matches_status
}

/// Filters and sorts the catalog, without paginating.
#[must_use]
pub fn filter_and_sort<'a>(positions: &'a [Position], query: &ListingQuery) -> Vec<&'a Position> {
    let mut filtered: Vec<&Position> = positions.iter().filter(|p| matches(p, query)).collect();

    filtered.sort_by(|a, b| {
        let ordering = match query.sort {
            SortKey::Title => collation::compare(&a.title, &b.title),
            SortKey::Status => a.status.sort_rank().cmp(&b.status.sort_rank()),
        };
        match query.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    filtered
}

/// Computes the page of the listing selected by `query`.
///
/// A `query.page` past the end is clamped to the last page; `page_size` of zero
/// is treated as [`DEFAULT_PAGE_SIZE`].
///
/// # Examples
///
/// ```
/// use pau::domain::Position;
/// use pau::listing::{compute_page, ListingQuery};
///
/// let positions: Vec<Position> = (0..15)
///     .map(|i| Position::new(format!("p{i}"), format!("Ramo {i:02}"), "Informática"))
///     .collect();
/// let query = ListingQuery {
///     department: Some("Informática".to_string()),
///     page: 3,
///     ..ListingQuery::default()
/// };
///
/// let page = compute_page(&positions, &query, 7);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.items.len(), 1);
/// ```
#[must_use]
pub fn compute_page<'a>(positions: &'a [Position], query: &ListingQuery, page_size: usize) -> Page<'a> {
    let _span = tracing::debug_span!("compute_page",
        total_positions = positions.len(),
        department = ?query.department,
        page = query.page
    ).entered();

    let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
    let filtered = filter_and_sort(positions, query);
    let total_items = filtered.len();
    let total_pages = (total_items + page_size - 1) / page_size;
    let page = query.page.clamp(1, total_pages.max(1));

    let items: Vec<&Position> = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    tracing::debug!(total_items = total_items, total_pages = total_pages, shown = items.len(), "page computed");

    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}

/// Up to `width` consecutive page numbers around `current`.
///
/// Starts at 1 near the beginning and ends at `total` near the end.
#[must_use]
pub fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    if total <= width {
        return (1..=total).collect();
    }

    let half = width / 2;
    let start = current.saturating_sub(half).max(1).min(total + 1 - width);
    (start..start + width).collect()
}
