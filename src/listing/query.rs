//! Listing query state.
//!
//! [`ListingQuery`] holds every control of the positions listing: the search
//! text, the three filters, the sort column and direction, and the current page.
//! Its setters enforce the listing rules: changing any filter or the sort resets
//! the page to 1, and selecting the active sort column again flips direction.

use crate::domain::{PositionCategory, PositionStatus};

/// Category filter of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PositionCategory),
}

impl CategoryFilter {
    /// Next value in the `All → cátedra → corrección → laboratorio → All` cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(PositionCategory::ALL[0]),
            Self::Only(current) => PositionCategory::ALL
                .iter()
                .position(|&c| c == current)
                .and_then(|idx| PositionCategory::ALL.get(idx + 1))
                .map_or(Self::All, |&c| Self::Only(c)),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "todas",
            Self::Only(category) => category.label(),
        }
    }
}

/// Status filter of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PositionStatus),
}

impl StatusFilter {
    /// Next value in the `All → open → closed → All` cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Only(PositionStatus::Open),
            Self::Only(PositionStatus::Open) => Self::Only(PositionStatus::Closed),
            Self::Only(PositionStatus::Closed) => Self::All,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "todos",
            Self::Only(status) => status.label(),
        }
    }
}

/// Column the listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow shown next to the sorted column header.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Complete state of the positions listing controls.
///
/// `page` is 1-based. Fields are public for reading; mutate through the setters
/// so the page-reset rule holds.
///
/// # Examples
///
/// ```
/// use pau::listing::{ListingQuery, SortDirection, SortKey};
///
/// let mut query = ListingQuery::default();
/// query.page = 3;
///
/// query.select_sort(SortKey::Title);
/// assert_eq!(query.direction, SortDirection::Desc);
/// assert_eq!(query.page, 1);
///
/// query.select_sort(SortKey::Status);
/// assert_eq!(query.direction, SortDirection::Asc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub search: String,
    pub department: Option<String>,
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub sort: SortKey,
    pub direction: SortDirection,
    pub page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            department: None,
            category: CategoryFilter::All,
            status: StatusFilter::All,
            sort: SortKey::Title,
            direction: SortDirection::Asc,
            page: 1,
        }
    }
}

impl ListingQuery {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.page = 1;
    }

    pub fn pop_search_char(&mut self) {
        if self.search.pop().is_some() {
            self.page = 1;
        }
    }

    pub fn set_department(&mut self, department: Option<String>) {
        self.department = department;
        self.page = 1;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    pub fn cycle_category(&mut self) {
        self.set_category(self.category.next());
    }

    pub fn cycle_status(&mut self) {
        self.set_status(self.status.next());
    }

    /// Sorts by `key`; toggles direction if it is already the sort column.
    pub fn select_sort(&mut self, key: SortKey) {
        if self.sort == key {
            self.direction = self.direction.toggled();
        } else {
            self.sort = key;
            self.direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    /// Clears department, category and status filters.
    ///
    /// The search text and the sort are kept.
    pub fn clear_filters(&mut self) {
        self.department = None;
        self.category = CategoryFilter::All;
        self.status = StatusFilter::All;
        self.page = 1;
    }

    /// Whether any of department, category or status is set.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.department.is_some()
            || self.category != CategoryFilter::All
            || self.status != StatusFilter::All
    }

    /// Advances one page. No-op on the last page.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page. No-op on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `page` if it exists.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if (1..=total_pages).contains(&page) && page != self.page {
            self.page = page;
            true
        } else {
            false
        }
    }
}
