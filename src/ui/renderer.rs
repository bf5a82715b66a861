//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the layout of the active tab, then
//!    draw the dialog of the current input mode on top
//!
//! # Example
//!
//! ```rust
//! use pau::app::AppState;
//! use pau::catalog::Catalog;
//! use pau::ui::{render, Theme};
//!
//! let state = AppState::new(Catalog::default(), Theme::default());
//! render(&state, 24, 80); // Render to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Zellij clears the pane before each
/// render, so nothing is erased here.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        BodyView::Positions(view) => {
            components::render_positions_layout(&vm.header, view, &vm.footer, theme, cols, rows);
        }
        BodyView::Applications(view) => {
            components::render_applications_layout(&vm.header, view, &vm.footer, theme, cols, rows);
        }
    }

    if let Some(overlay) = &vm.overlay {
        components::render_overlay(components::OVERLAY_TOP, overlay, theme, cols);
    }
}
