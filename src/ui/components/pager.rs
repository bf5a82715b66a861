//! Pager component renderer.

use crate::ui::helpers::{center_offset, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

/// Renders the pagination controls centered on `row`.
///
/// ```text
/// ‹ Anterior  1 [2] 3  Siguiente ›   (15 ayudantías)
/// ```
///
/// Disabled arrows are dimmed.
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    let numbers: Vec<String> = pager
        .pages
        .iter()
        .map(|&page| {
            if page == pager.current {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    let numbers = numbers.join(" ");
    let summary = format!("({} ayudantías)", pager.total_items);
    let width = "‹ Anterior  ".chars().count()
        + numbers.chars().count()
        + "  Siguiente ›   ".chars().count()
        + summary.chars().count();

    position_cursor(row, 1);
    print!("{}", " ".repeat(center_offset(width, cols)));

    let arrow_color = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.text_normal)
        } else {
            Theme::fg(&theme.colors.text_dim)
        }
    };

    print!("{}‹ Anterior  ", arrow_color(pager.can_prev));
    print!("{}{}{numbers}{}", Theme::bold(), Theme::fg(&theme.colors.tab_active_fg), Theme::reset());
    print!("{}  Siguiente ›   ", arrow_color(pager.can_next));
    print!("{}{summary}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(cols.saturating_sub(center_offset(width, cols) + width)));
    print!("{}", Theme::reset());
    row + 1
}
