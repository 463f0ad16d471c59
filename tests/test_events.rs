// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct editor actions

use rolo::app::{EditorEvent, EditorState, EventHandler, KeyAction, RefreshKind, ViewState};
use rolo::models::OrderedSessionList;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn create_state() -> EditorState {
    EditorState::new(OrderedSessionList::from_names(["a", "b", "c"]), false)
}

fn dispatched(action: Option<KeyAction>) -> Option<EditorEvent> {
    match action {
        Some(KeyAction::Dispatch(event)) => Some(event),
        _ => None,
    }
}

#[test]
fn test_quit_key_events() {
    let state = create_state();

    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let event = EventHandler::handle_key_event(create_key_event(code), &state, &ViewState::new());
        assert_eq!(dispatched(event), Some(EditorEvent::Quit));
    }

    let ctrl_c = EventHandler::handle_key_event(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &state,
        &ViewState::new(),
    );
    assert_eq!(dispatched(ctrl_c), Some(EditorEvent::Quit));
}

#[test]
fn test_navigation_key_events() {
    let state = create_state();

    for code in [KeyCode::Char('j'), KeyCode::Down] {
        let event = EventHandler::handle_key_event(create_key_event(code), &state, &ViewState::new());
        assert_eq!(dispatched(event), Some(EditorEvent::CursorDown));
    }
    for code in [KeyCode::Char('k'), KeyCode::Up] {
        let event = EventHandler::handle_key_event(create_key_event(code), &state, &ViewState::new());
        assert_eq!(dispatched(event), Some(EditorEvent::CursorUp));
    }
}

#[test]
fn test_browsing_action_keys() {
    let state = create_state();

    let retire = EventHandler::handle_key_event(create_key_event(KeyCode::Char('d')), &state, &ViewState::new());
    assert_eq!(dispatched(retire), Some(EditorEvent::ToggleRetired));

    let repopulate = EventHandler::handle_key_event(create_key_event(KeyCode::Char('p')), &state, &ViewState::new());
    assert_eq!(repopulate, Some(KeyAction::Refresh(RefreshKind::Replace)));

    let update = EventHandler::handle_key_event(create_key_event(KeyCode::Char('u')), &state, &ViewState::new());
    assert_eq!(update, Some(KeyAction::Refresh(RefreshKind::Reconcile)));

    let save = EventHandler::handle_key_event(create_key_event(KeyCode::Enter), &state, &ViewState::new());
    assert_eq!(dispatched(save), Some(EditorEvent::Confirm));

    let mode = EventHandler::handle_key_event(create_key_event(KeyCode::Char('m')), &state, &ViewState::new());
    assert_eq!(dispatched(mode), Some(EditorEvent::ToggleMode));
}

#[test]
fn test_move_mode_ignores_list_actions() {
    let mut state = create_state();
    state.apply(EditorEvent::ToggleMode);

    for ch in ['d', 'p', 'u'] {
        let event = EventHandler::handle_key_event(create_key_event(KeyCode::Char(ch)), &state, &ViewState::new());
        assert!(event.is_none(), "'{ch}' should be ignored in move mode");
    }

    let down = EventHandler::handle_key_event(create_key_event(KeyCode::Char('j')), &state, &ViewState::new());
    assert_eq!(dispatched(down), Some(EditorEvent::CursorDown));
}

#[test]
fn test_help_visible_only_responds_to_help_and_esc() {
    let state = create_state();
    let view = ViewState {
        help_visible: true,
        ..ViewState::default()
    };

    let help_event = EventHandler::handle_key_event(create_key_event(KeyCode::Char('?')), &state, &view);
    assert_eq!(help_event, Some(KeyAction::ToggleHelp));

    let esc_event = EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &state, &view);
    assert_eq!(esc_event, Some(KeyAction::ToggleHelp));

    let other_event = EventHandler::handle_key_event(create_key_event(KeyCode::Char('j')), &state, &view);
    assert!(other_event.is_none());
}

#[test]
fn test_quit_keys_work_while_help_is_open() {
    let state = create_state();
    let view = ViewState {
        help_visible: true,
        ..ViewState::default()
    };

    let q_event = EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &state, &view);
    assert_eq!(dispatched(q_event), Some(EditorEvent::Quit));

    let ctrl_c = EventHandler::handle_key_event(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &state,
        &view,
    );
    assert_eq!(dispatched(ctrl_c), Some(EditorEvent::Quit));
}

#[test]
fn test_help_key_toggles_overlay_without_reducer_event() {
    let state = create_state();

    let help_event = EventHandler::handle_key_event(create_key_event(KeyCode::Char('?')), &state, &ViewState::new());
    assert_eq!(help_event, Some(KeyAction::ToggleHelp));
}

#[test]
fn test_key_release_is_ignored() {
    let state = create_state();
    let mut release = create_key_event(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;

    assert!(EventHandler::handle_key_event(release, &state, &ViewState::new()).is_none());
}

#[test]
fn test_unknown_key_returns_none() {
    let state = create_state();

    let unknown_event = EventHandler::handle_key_event(create_key_event(KeyCode::Char('x')), &state, &ViewState::new());
    assert!(unknown_event.is_none());

    let unknown_f_key = EventHandler::handle_key_event(create_key_event(KeyCode::F(1)), &state, &ViewState::new());
    assert!(unknown_f_key.is_none());
}
