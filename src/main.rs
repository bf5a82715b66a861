//! Zellij plugin entry point.
//!
//! The plugin shim translates Zellij events into [`pau::Event`]s, runs them
//! through [`pau::handle_event`], and executes the returned actions. All state
//! logic lives in the library; this file only knows about Zellij.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(shim::State);

#[cfg(target_family = "wasm")]
mod shim {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use pau::listing::SortKey;
    use pau::{handle_event, Action, Config, Event, InputMode, Tab};

    pub struct State {
        app: pau::AppState,

        config: Config,
    }

    impl Default for State {
        fn default() -> Self {
            let config = Config::default();
            Self {
                app: pau::initialize(&config),
                config,
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            pau::observability::init_tracing(&config);

            let _span = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(config = ?config, "parsed configuration");
            self.app = pau::initialize(&config);
            self.config = config;

            request_permission(&[
                PermissionType::ReadApplicationState,
                PermissionType::FullHdAccess,
            ]);
            subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                    let granted = matches!(permissions, PermissionStatus::Granted);
                    if !granted {
                        tracing::warn!("permissions denied - catalog_file cannot be read");
                    }
                    pau::load_catalog(&self.config, granted)
                }
                _ => return false,
            };

            let _span = tracing::debug_span!("plugin_update", event = ?our_event).entered();

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    for action in actions {
                        Self::execute_action(&action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            pau::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Maps a key press to an event for the current tab and input mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::KeyDown),
                    BareKey::Char('p') => Some(Event::KeyUp),
                    BareKey::Char('c') => Some(Event::CloseFocus),
                    _ => None,
                };
            }

            let bare = key.bare_key;
            match self.app.input_mode {
                InputMode::Search => Some(match bare {
                    BareKey::Enter => Event::Confirm,
                    BareKey::Esc => Event::Escape,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                }),
                InputMode::DepartmentPicker => Some(match bare {
                    BareKey::Enter => Event::Confirm,
                    BareKey::Esc => Event::Escape,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Down => Event::KeyDown,
                    BareKey::Up => Event::KeyUp,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                }),
                InputMode::ApplyForm => Some(match bare {
                    BareKey::Enter => Event::Confirm,
                    BareKey::Esc => Event::Escape,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Tab => Event::CycleFormCategory,
                    BareKey::Left | BareKey::Right => Event::ToggleSection,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                }),
                InputMode::ConfirmCancel => Some(match bare {
                    BareKey::Enter | BareKey::Char('y' | 's') => Event::Confirm,
                    BareKey::Esc | BareKey::Char('n') => Event::Escape,
                    _ => return None,
                }),
                InputMode::Grabbing => Some(match bare {
                    BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                    BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                    BareKey::Enter | BareKey::Char(' ') => Event::ToggleGrab,
                    BareKey::Esc => Event::Escape,
                    _ => return None,
                }),
                InputMode::Normal => self.map_normal_key(bare),
            }
        }

        fn map_normal_key(&self, bare: BareKey) -> Option<Event> {
            let common = match bare {
                BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
                BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
                BareKey::Tab => Some(Event::SwitchTab),
                BareKey::Char('q') => Some(Event::CloseFocus),
                BareKey::Esc => Some(Event::Escape),
                _ => None,
            };
            if common.is_some() {
                return common;
            }

            match self.app.tab {
                Tab::Positions => Some(match bare {
                    BareKey::Left | BareKey::Char('h') | BareKey::PageUp => Event::PrevPage,
                    BareKey::Right | BareKey::Char('l') | BareKey::PageDown => Event::NextPage,
                    BareKey::Char('/') => Event::SearchMode,
                    BareKey::Char('d') => Event::OpenDepartmentPicker,
                    BareKey::Char('c') => Event::CycleCategory,
                    BareKey::Char('s') => Event::CycleStatus,
                    BareKey::Char('t') => Event::SortBy(SortKey::Title),
                    BareKey::Char('S') => Event::SortBy(SortKey::Status),
                    BareKey::Char('x') => Event::ClearFilters,
                    BareKey::Char(c @ '1'..='9') => Event::GoToPage(c as usize - '0' as usize),
                    BareKey::Enter => Event::Confirm,
                    _ => return None,
                }),
                Tab::Applications => Some(match bare {
                    BareKey::Char('K') => Event::MoveApplicationUp,
                    BareKey::Char('J') => Event::MoveApplicationDown,
                    BareKey::Char(' ') => Event::ToggleGrab,
                    BareKey::Char('X') => Event::CancelApplication,
                    _ => return None,
                }),
            }
        }

        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "pau {} is a Zellij plugin; build it with `cargo build --target wasm32-wasip1` and load pau.wasm from a layout",
        env!("CARGO_PKG_VERSION")
    );
}
