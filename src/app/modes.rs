//! Tab and input mode state types for the application.
//!
//! These enums decide which keybindings are active and what the UI draws on
//! top of the current tab.
//!
//! # State Machine
//!
//! The portal has two tabs:
//! - **Positions**: the filtered, paginated catalog listing
//! - **Applications**: the user's pending applications in priority order
//!
//! On top of a tab the application is in exactly one input mode:
//! - **Normal**: navigation and commands
//! - **Search**: typing the listing search text
//! - **`DepartmentPicker`**: fuzzy-picking the department filter
//! - **`ApplyForm`**: filling in a new application
//! - **`ConfirmCancel`**: confirming the cancellation of an application
//! - **Grabbing**: dragging an application through the priority list

/// Top-level tab of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Catalog listing with filters and pagination.
    #[default]
    Positions,

    /// The user's pending applications, highest priority first.
    Applications,
}

impl Tab {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Positions => Self::Applications,
            Self::Applications => Self::Positions,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positions => "Ayudantías",
            Self::Applications => "Mis postulaciones",
        }
    }
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and which overlay, if any, is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// Typed characters edit the listing search text.
    ///
    /// Enter keeps the text, Esc clears it; both return to Normal.
    Search,

    /// Typed characters narrow the department list.
    ///
    /// Enter selects the highlighted department, Esc closes without change.
    DepartmentPicker,

    /// The apply form for the selected position is open.
    ApplyForm,

    /// Waiting for the user to confirm cancelling the selected application.
    ConfirmCancel,

    /// The selected application follows the cursor through the list.
    ///
    /// Each step is one `move_to_index`; Esc restores the order from before
    /// the grab.
    Grabbing,
}

impl InputMode {
    /// Whether typed characters are captured as text in this mode.
    #[must_use]
    pub const fn captures_text(self) -> bool {
        matches!(self, Self::Search | Self::DepartmentPicker | Self::ApplyForm)
    }
}
