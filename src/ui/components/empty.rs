//! Empty state component renderer.
//!
//! Shown in place of a table when the active tab has nothing to list.

use crate::ui::helpers::{center_offset, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message two rows below `row`.
///
/// The message uses the `empty_state_fg` theme color and the subtitle uses
/// `text_dim` with dim styling.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = display_width(&empty.message);
    let msg_padding = center_offset(msg_len, cols);

    position_cursor(row + 2, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = display_width(&empty.subtitle);
    let sub_padding = center_offset(sub_len, cols);

    position_cursor(row + 3, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
