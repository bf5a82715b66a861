//! Dialog overlays drawn on top of the body.
//!
//! Each dialog is a bordered box centered horizontally, starting a few rows
//! under the header. Content lines are truncated to the box interior.

use crate::ui::helpers::{self, center_offset, display_width, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmView, FormView, Overlay, PickerView};

/// Widest dialog, in columns.
const MAX_BOX_WIDTH: usize = 64;

/// Most departments listed in the picker at once.
const MAX_PICKER_ITEMS: usize = 10;

/// Renders `overlay` with its top border on `row`.
pub fn render_overlay(row: usize, overlay: &Overlay, theme: &Theme, cols: usize) {
    match overlay {
        Overlay::DepartmentPicker(picker) => render_picker(row, picker, theme, cols),
        Overlay::ApplyForm(form) => render_form(row, form, theme, cols),
        Overlay::ConfirmCancel(confirm) => render_confirm(row, confirm, theme, cols),
    }
}

/// Geometry of a dialog box.
struct DialogBox {
    top: usize,
    left: usize,
    inner_width: usize,
}

impl DialogBox {
    fn open(top: usize, title: &str, height: usize, theme: &Theme, cols: usize) -> Self {
        let width = cols.saturating_sub(4).clamp(4, MAX_BOX_WIDTH);
        let inner_width = width - 2;
        let left = center_offset(width, cols) + 1;
        let title = truncate(title, inner_width.saturating_sub(2));
        let border = Theme::fg(&theme.colors.input_border);

        position_cursor(top, left);
        print!("{border}┌ {}{title}{}{border} ", Theme::bold(), Theme::reset());
        print!("{}┐", "─".repeat(inner_width.saturating_sub(display_width(&title) + 2)));
        for offset in 1..=height {
            position_cursor(top + offset, left);
            print!("{border}│{}{}{border}│", Theme::reset(), " ".repeat(inner_width));
        }
        position_cursor(top + height + 1, left);
        print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

        Self { top, left, inner_width }
    }

    /// Moves the cursor to the start of interior line `line` (1-based).
    fn line(&self, line: usize) {
        position_cursor(self.top + line, self.left + 1);
    }

    fn write(&self, line: usize, text: &str, color: &str) {
        self.line(line);
        print!("{}{}{}", Theme::fg(color), pad(text, self.inner_width), Theme::reset());
    }
}

fn render_picker(row: usize, picker: &PickerView, theme: &Theme, cols: usize) {
    let shown = picker.items.len().clamp(1, MAX_PICKER_ITEMS);
    let dialog = DialogBox::open(row, "Departamento", shown + 2, theme, cols);

    dialog.write(1, &format!(" > {}▏", picker.query), &theme.colors.text_normal);

    if picker.items.is_empty() {
        dialog.write(3, " Sin coincidencias", &theme.colors.text_dim);
        return;
    }

    let selected = picker.items.iter().position(|item| item.is_selected).unwrap_or(0);
    let start = selected.saturating_sub(MAX_PICKER_ITEMS - 1);

    for (offset, item) in picker.items.iter().skip(start).take(MAX_PICKER_ITEMS).enumerate() {
        dialog.line(3 + offset);
        let marker = if item.is_current { "● " } else { "  " };
        let name = truncate(&item.name, dialog.inner_width.saturating_sub(3));
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!(" {marker}");
        helpers::render_highlighted_text(&name, &item.highlight_ranges, theme, item.is_selected);
        print!("{}", " ".repeat(dialog.inner_width.saturating_sub(3 + display_width(&name))));
        print!("{}", Theme::reset());
    }
}

fn render_form(row: usize, form: &FormView, theme: &Theme, cols: usize) {
    let dialog = DialogBox::open(row, &format!("Postular a {}", form.position_title), 7, theme, cols);

    let category = match &form.category {
        Some(label) if form.category_choices > 1 => format!(" Categoría: ‹ {label} ›"),
        Some(label) => format!(" Categoría: {label}"),
        None => " Categoría: —".to_string(),
    };
    dialog.write(1, &category, &theme.colors.text_normal);
    dialog.write(2, &format!(" Sección: {}", form.section), &theme.colors.text_normal);
    dialog.write(4, " Motivo:", &theme.colors.text_dim);

    // The reason scrolls so its tail stays visible.
    let visible = dialog.inner_width.saturating_sub(3);
    let reason: String = {
        let chars: Vec<char> = form.reason.chars().collect();
        chars[chars.len().saturating_sub(visible.saturating_sub(1))..].iter().collect()
    };
    dialog.line(5);
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!(" > ");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", pad(&format!("{reason}▏"), visible));
    print!("{}", Theme::reset());

    dialog.write(7, " Enter: enviar   Esc: cerrar", &theme.colors.text_dim);
}

fn render_confirm(row: usize, confirm: &ConfirmView, theme: &Theme, cols: usize) {
    let dialog = DialogBox::open(row, "Cancelar postulación", 3, theme, cols);
    dialog.write(1, &format!(" {}", confirm.message), &theme.colors.text_normal);
    dialog.write(3, " y: sí   n: no", &theme.colors.text_dim);
}
