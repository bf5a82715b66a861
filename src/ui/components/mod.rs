//! Composable UI component renderers.
//!
//! Each component is responsible for rendering a specific part of the
//! interface and returns the next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar and tab strip
//! - [`filter`]: Search text and listing controls
//! - [`positions`]: Listing page table
//! - [`pager`]: Page numbers and arrows
//! - [`applications`]: Ranked applications table
//! - [`overlay`]: Picker, apply form and confirmation dialogs
//! - [`footer`]: Notice line and keybinding hints
//! - [`empty`]: Empty state message
//!
//! # Layout Modes
//!
//! - [`render_positions_layout`]: Header + Filters + Table + Pager + Footer
//! - [`render_applications_layout`]: Header + Table + Footer

mod applications;
mod empty;
mod filter;
mod footer;
mod header;
mod overlay;
mod pager;
mod positions;

pub use overlay::render_overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ApplicationsView, FooterInfo, HeaderInfo, PositionsView};

use applications::{render_application_headers, render_application_rows};
use empty::render_empty_state;
use filter::render_filter_bar;
use footer::render_footer;
use header::render_header;
use pager::render_pager;
use positions::{render_position_headers, render_position_rows};

/// Row where dialogs start, just under the tab strip.
pub const OVERLAY_TOP: usize = 5;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the top chrome (header, tabs, border) and returns the first body row.
fn render_top(header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let current_row = render_header(2, header, theme, cols);
    render_border(current_row, &theme.colors.border, cols)
}

/// Renders the bottom chrome (border, notice, keybindings) against the last row.
fn render_bottom(footer: &FooterInfo, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, footer, theme, cols);
}

/// Renders the Positions tab.
///
/// ```text
/// [blank line]
/// [Header]
/// [Tabs]
/// [Border]
/// [Filter box - 4 lines]
/// [Table Headers]
/// [Table Rows]
/// [Pager]
/// [Blank padding to fill screen]
/// [Border]
/// [Notice]
/// [Footer]
/// ```
pub fn render_positions_layout(
    header: &HeaderInfo,
    view: &PositionsView,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = render_top(header, theme, cols);
    current_row = render_filter_bar(current_row, &view.filter_bar, theme, cols);

    if let Some(empty) = &view.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        current_row = render_position_headers(current_row, view.title_width, theme);
        current_row = render_position_rows(current_row, &view.rows, view.title_width, theme, cols);
        render_pager(current_row + 1, &view.pager, theme, cols);
    }

    render_bottom(footer, theme, cols, rows);
}

/// Renders the Applications tab.
///
/// ```text
/// [blank line]
/// [Header]
/// [Tabs]
/// [Border]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Notice]
/// [Footer]
/// ```
pub fn render_applications_layout(
    header: &HeaderInfo,
    view: &ApplicationsView,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let current_row = render_top(header, theme, cols);

    if let Some(empty) = &view.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        let current_row = render_application_headers(current_row, theme, cols);
        render_application_rows(current_row, &view.rows, theme, cols);
    }

    render_bottom(footer, theme, cols, rows);
}
