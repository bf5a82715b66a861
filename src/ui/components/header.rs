//! Header component renderer.
//!
//! This module renders the plugin title bar and the tab strip below it.

use crate::ui::helpers::{center_offset, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar and tab strip starting at `row`.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
///  Ayudantías │ Mis postulaciones (2)
/// ```
///
/// The title is centered and bold; the active tab is bold in `tab_active_fg`,
/// inactive tabs are dimmed.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_width(&header.title);
    let padding = center_offset(title_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    render_tabs(row + 1, header, theme, cols)
}

fn render_tabs(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 1;
    print!(" ");

    for (idx, tab) in header.tabs.iter().enumerate() {
        if idx > 0 {
            print!("{} │ {}", Theme::fg(&theme.colors.border), Theme::reset());
            used += 3;
        }
        if tab.is_active {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.tab_active_fg));
            print!("▸ {}", tab.label);
            used += 2;
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", tab.label);
        }
        print!("{}", Theme::reset());
        used += display_width(&tab.label);
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
