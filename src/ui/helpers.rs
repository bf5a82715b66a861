//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor placement, width-aware truncation and padding, and search
//! match highlighting with proper ANSI escape sequence management.
//!
//! Every width in this module is counted in characters, not bytes, so accented
//! titles ("Física", "Álgebra") line up with plain ASCII ones.
//!
//! # Example
//!
//! ```rust
//! use pau::ui::helpers::{pad, truncate};
//!
//! assert_eq!(truncate("Álgebra Lineal", 8), "Álgebra…");
//! assert_eq!(pad("Física", 8), "Física  ");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Truncates or right-pads `text` to exactly `width` characters.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(display_width(&text));
    format!("{text}{}", " ".repeat(fill))
}

/// Left padding that centers `text_width` in `cols`.
#[must_use]
pub const fn center_offset(text_width: usize, cols: usize) -> usize {
    cols.saturating_sub(text_width) / 2
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use match highlight colors unless the
/// item is selected, in which case the selection colors are left untouched.
///
/// Ranges use character indices, inclusive start and exclusive end, and are
/// clamped to the text.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Química", 7), "Química");
        assert_eq!(truncate("Química General", 7), "Químic…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 1), "…");
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("ñ", 3), "ñ  ");
        assert_eq!(display_width(&pad("Electrónica Aplicada", 10)), 10);
    }

    #[test]
    fn center_offset_never_underflows() {
        assert_eq!(center_offset(10, 20), 5);
        assert_eq!(center_offset(30, 20), 0);
    }
}
