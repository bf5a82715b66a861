//! Positions table component renderer.
//!
//! This module renders one listing page as a five-column table (title,
//! categories, status, applicants, action). It supports selection highlighting
//! and search match highlighting in the title column.

use crate::app::state::CATEGORIES_WIDTH;
use crate::ui::helpers::{self, display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PositionRow;

const STATUS_WIDTH: usize = 8;
const APPLICANTS_WIDTH: usize = 6;
const ACTION_WIDTH: usize = 13;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_position_headers(row: usize, title_width: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "  {} {} {} {:>APPLICANTS_WIDTH$}  {}",
        pad("AYUDANTÍA", title_width),
        pad("CATEGORÍAS", CATEGORIES_WIDTH),
        pad("ESTADO", STATUS_WIDTH),
        "POST.",
        "ACCIÓN"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_position_rows(
    row: usize,
    rows: &[PositionRow],
    title_width: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_position_row(current_row, item, title_width, theme, cols);
    }
    current_row
}

/// Renders a single position.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`), covering the whole row
/// 2. Search highlights in the title (unless selected)
/// 3. Status and action colors
fn render_position_row(row: usize, item: &PositionRow, title_width: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };
    print!("{}", Theme::fg(base_fg));
    print!("{}", if item.is_selected { "▌ " } else { "  " });

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    if !item.is_selected {
        print!("{}", Theme::fg(base_fg));
    }
    print!("{} ", " ".repeat(title_width.saturating_sub(display_width(&item.title))));

    print!("{} ", pad(&item.categories, CATEGORIES_WIDTH));

    if !item.is_selected {
        let status_fg = if item.is_open {
            &theme.colors.open_fg
        } else {
            &theme.colors.closed_fg
        };
        print!("{}", Theme::fg(status_fg));
    }
    print!("{} ", pad(&item.status_label, STATUS_WIDTH));

    print!("{}", Theme::fg(base_fg));
    print!("{:>APPLICANTS_WIDTH$}  ", item.applicants);

    if !item.is_selected {
        let action_fg = if item.can_apply {
            &theme.colors.tab_active_fg
        } else if item.is_open {
            &theme.colors.applied_fg
        } else {
            &theme.colors.text_dim
        };
        print!("{}", Theme::fg(action_fg));
    }
    print!("{}", pad(&item.action_label, ACTION_WIDTH));

    let line_len = 2 + title_width + 1 + CATEGORIES_WIDTH + 1 + STATUS_WIDTH + 1 + APPLICANTS_WIDTH + 2 + ACTION_WIDTH;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
