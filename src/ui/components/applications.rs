//! Applications table component renderer.
//!
//! Renders the user's pending applications in priority order. The grabbed row
//! is drawn in `grab_fg` with a drag marker.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ApplicationRow;

const PRIORITY_WIDTH: usize = 4;
const DEPARTMENT_WIDTH: usize = 14;
const CATEGORY_WIDTH: usize = 12;
const SECTION_WIDTH: usize = 7;
const DATE_WIDTH: usize = 12;
const FIXED_COLUMNS: usize = 2 + PRIORITY_WIDTH + 1 + 1 + DEPARTMENT_WIDTH + 1 + CATEGORY_WIDTH + 1 + SECTION_WIDTH + 1 + DATE_WIDTH;

fn title_width(cols: usize) -> usize {
    cols.saturating_sub(FIXED_COLUMNS).clamp(12, 48)
}

/// Renders the table column headers at the specified row.
pub fn render_application_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "  {} {} {} {} {} {}",
        pad("PRI", PRIORITY_WIDTH),
        pad("AYUDANTÍA", title_width(cols)),
        pad("DEPTO", DEPARTMENT_WIDTH),
        pad("CATEGORÍA", CATEGORY_WIDTH),
        pad("SECCIÓN", SECTION_WIDTH),
        pad("ENVIADA", DATE_WIDTH)
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at the specified row.
pub fn render_application_rows(row: usize, rows: &[ApplicationRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_application_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_application_row(row: usize, item: &ApplicationRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_grabbed {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.grab_fg));
        print!("⇅ ");
    } else if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("▌ ");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  ");
    }

    let line = format!(
        "{} {} {} {} {} {}",
        pad(&format!("#{}", item.priority), PRIORITY_WIDTH),
        pad(&item.title, title_width(cols)),
        pad(&item.department, DEPARTMENT_WIDTH),
        pad(&item.category, CATEGORY_WIDTH),
        pad(&item.section, SECTION_WIDTH),
        pad(&item.submitted, DATE_WIDTH)
    );
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(2 + display_width(&line))));

    print!("{}", Theme::reset());
    row + 1
}
