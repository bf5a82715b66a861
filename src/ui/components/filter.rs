//! Filter bar component renderer.
//!
//! This module renders the bordered box above the positions table holding the
//! search text and the current department, category, status and sort.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Horizontal margin for the filter box (spaces on left and right).
const FILTER_BOX_MARGIN: usize = 1;

/// Renders the filter box at the specified row.
///
/// # Layout
///
/// ```text
/// ┌───────────────────────────────────────────────────────┐
/// │ Buscar: datos▏                                         │
/// │ Depto: Informática  Categoría: todas  Estado: todos ... │
/// └───────────────────────────────────────────────────────┘
/// ```
///
/// The border uses `input_border` while the search field has focus and the
/// regular `border` color otherwise.
///
/// # Returns
///
/// The next available row position (row + 4)
pub fn render_filter_bar(row: usize, filters: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FILTER_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if filters.search_active {
        &theme.colors.input_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{}┌{}┐{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    let cursor = if filters.search_active { "▏" } else { "" };
    let search_line = format!(" Buscar: {}{cursor}", filters.search);
    render_inner_line(row + 1, &search_line, &theme.colors.text_normal, border, inner_width);

    let controls_line = format!(
        " Depto: {}  Categoría: {}  Estado: {}  Orden: {}",
        filters.department, filters.category, filters.status, filters.sort
    );
    render_inner_line(row + 2, &controls_line, &theme.colors.text_dim, border, inner_width);

    position_cursor(row + 3, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{}└{}┘{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    row + 4
}

fn render_inner_line(row: usize, text: &str, text_color: &str, border: &str, inner_width: usize) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{}│", Theme::fg(border));
    print!("{}", Theme::fg(text_color));
    print!("{}", pad(text, inner_width));
    print!("{}│", Theme::fg(border));
    print!("{}", Theme::reset());
}
