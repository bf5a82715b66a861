//! Footer component renderer.
//!
//! This module renders the notice line and the centered keybinding hints.

use crate::ui::helpers::{center_offset, display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer at the specified row: the notice (or a blank line)
/// followed by the keybinding hints.
///
/// Help text wider than the terminal is truncated so the layout never wraps.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match &footer.notice {
        Some(notice) => {
            let color = if notice.is_error {
                &theme.colors.error_fg
            } else {
                &theme.colors.notice_fg
            };
            let text = truncate(&notice.text, cols.saturating_sub(2));
            print!("{}{} {text}", Theme::bold(), Theme::fg(color));
            print!("{}", " ".repeat(cols.saturating_sub(display_width(&text) + 1)));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }

    let help_text = truncate(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = center_offset(text_len, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 2
}
