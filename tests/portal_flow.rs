use pau::app::{handle_event, AppState, Event, InputMode, Tab};
use pau::listing::SortKey;
use pau::ui::{BodyView, Overlay, PositionsView};
use pau::{load_catalog, Config};

fn send(state: &mut AppState, events: &[Event]) {
    for event in events {
        handle_event(state, event).unwrap();
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, &[Event::Char(c)]);
    }
}

fn loaded_state() -> AppState {
    let config = Config::default();
    let mut state = pau::initialize(&config);
    let event = load_catalog(&config, false);
    send(&mut state, &[event]);
    state
}

fn choose_department(state: &mut AppState, query: &str) {
    send(state, &[Event::OpenDepartmentPicker]);
    type_text(state, query);
    send(state, &[Event::Confirm]);
}

fn positions(state: &AppState) -> PositionsView {
    match state.compute_viewmodel(40, 140).body {
        BodyView::Positions(view) => view,
        BodyView::Applications(_) => panic!("expected the positions tab"),
    }
}

fn titles(state: &AppState) -> Vec<String> {
    positions(state).rows.into_iter().map(|r| r.title).collect()
}

#[test]
fn listing_pages_through_a_department() {
    let mut state = loaded_state();
    assert!(titles(&state).is_empty());

    choose_department(&mut state, "informatica");
    let view = positions(&state);
    assert_eq!(view.filter_bar.department, "Informática");
    assert_eq!(view.pager.total_items, 8);
    assert_eq!(view.pager.total_pages, 2);
    assert_eq!(view.rows.len(), 7);
    assert_eq!(view.rows[0].title, "Arquitectura de Computadores");

    send(&mut state, &[Event::NextPage]);
    assert_eq!(titles(&state), vec!["Sistemas Operativos"]);

    let (render, _) = handle_event(&mut state, &Event::NextPage).unwrap();
    assert!(!render);

    send(&mut state, &[Event::GoToPage(1)]);
    assert_eq!(state.query.page, 1);
    let (render, _) = handle_event(&mut state, &Event::GoToPage(3)).unwrap();
    assert!(!render);
    send(&mut state, &[Event::GoToPage(2)]);

    send(&mut state, &[Event::SortBy(SortKey::Title)]);
    assert_eq!(state.query.page, 1);
    assert_eq!(titles(&state)[0], "Sistemas Operativos");
}

#[test]
fn accent_folded_title_sort_puts_algebra_first() {
    let mut state = loaded_state();
    choose_department(&mut state, "matem");
    assert_eq!(
        titles(&state),
        vec!["Álgebra Lineal", "Análisis Numérico", "Matemática I", "Matemática II"]
    );
}

#[test]
fn search_needs_the_accents_of_the_title() {
    let mut state = loaded_state();
    choose_department(&mut state, "matem");

    send(&mut state, &[Event::SearchMode]);
    type_text(&mut state, "algebra");
    assert!(titles(&state).is_empty());

    for _ in 0.."algebra".len() {
        send(&mut state, &[Event::Backspace]);
    }
    type_text(&mut state, "ÁLGEBRA");
    assert_eq!(titles(&state), vec!["Álgebra Lineal"]);
}

#[test]
fn status_filter_and_sort() {
    let mut state = loaded_state();
    choose_department(&mut state, "fisica");

    send(&mut state, &[Event::SortBy(SortKey::Status)]);
    let view = positions(&state);
    assert!(view.rows[0].is_open);
    assert!(!view.rows.last().unwrap().is_open);

    send(&mut state, &[Event::CycleStatus, Event::CycleStatus]);
    let view = positions(&state);
    assert_eq!(view.filter_bar.status, "Cerrada");
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].title, "Física General III");

    send(&mut state, &[Event::ClearFilters]);
    assert!(titles(&state).is_empty());
}

#[test]
fn search_narrows_and_highlights() {
    let mut state = loaded_state();
    choose_department(&mut state, "informatica");
    send(&mut state, &[Event::SearchMode]);
    type_text(&mut state, "COMPUTADORES");
    send(&mut state, &[Event::Confirm]);

    let view = positions(&state);
    assert_eq!(view.rows.len(), 2);
    assert!(view.rows.iter().all(|r| !r.highlight_ranges.is_empty()));
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn apply_rank_and_cancel_end_to_end() {
    let mut state = loaded_state();
    choose_department(&mut state, "informatica");

    // Arquitectura de Computadores offers three categories.
    send(&mut state, &[Event::Confirm]);
    match state.compute_viewmodel(40, 140).overlay {
        Some(Overlay::ApplyForm(form)) => {
            assert_eq!(form.category.as_deref(), Some("cátedra"));
            assert_eq!(form.category_choices, 3);
        }
        other => panic!("expected the apply form, got {other:?}"),
    }
    send(&mut state, &[Event::CycleFormCategory, Event::ToggleSection]);
    type_text(&mut state, "Me gusta el hardware");
    send(&mut state, &[Event::Confirm]);

    // Bases de Datos, first category.
    send(&mut state, &[Event::KeyDown, Event::Confirm, Event::Confirm]);

    let pending = state.store.pending();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].position_id, "inf-225");
    assert_eq!(pending[0].category.map(|c| c.label()), Some("corrección"));
    assert_eq!(pending[0].section.to_string(), "201");
    assert_eq!(pending[0].reason, "Me gusta el hardware");
    assert_eq!(pending[1].position_id, "inf-239");

    let view = positions(&state);
    assert_eq!(view.rows[0].action_label, "Postular");
    assert_eq!(view.rows[0].applicants, "7/4");

    send(&mut state, &[Event::SwitchTab, Event::KeyDown, Event::MoveApplicationUp]);
    assert_eq!(state.tab, Tab::Applications);
    assert_eq!(state.store.pending()[0].position_id, "inf-239");
    assert_eq!(state.selected_application, 0);

    send(&mut state, &[Event::CancelApplication]);
    match state.compute_viewmodel(40, 140).overlay {
        Some(Overlay::ConfirmCancel(confirm)) => {
            assert!(confirm.message.contains("Bases de Datos"));
            assert!(confirm.message.contains("prioridad 1"));
        }
        other => panic!("expected the confirmation, got {other:?}"),
    }
    send(&mut state, &[Event::Confirm]);

    let pending = state.store.pending();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].position_id, "inf-225");
    assert_eq!(pending[0].priority, Some(1));

    match state.compute_viewmodel(40, 140).body {
        BodyView::Applications(view) => {
            assert_eq!(view.rows.len(), 1);
            assert_eq!(view.rows[0].priority, 1);
            assert!(view.rows[0].is_selected);
        }
        BodyView::Positions(_) => panic!("expected the applications tab"),
    }
}

#[test]
fn quitting_hides_the_plugin() {
    let mut state = loaded_state();
    let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
    assert_eq!(actions, vec![pau::Action::CloseFocus]);
}
