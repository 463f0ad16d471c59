// ABOUTME: Keyboard mapping for the reorder editor
// Turns key presses into editor events, or into refresh requests that need tmux first

use crate::app::state::{EditorEvent, EditorMode, EditorState};
use crate::app::view::ViewState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    /// Throw the order away and take tmux's list as is.
    Replace,
    /// Keep the order, purge dead sessions, append new ones.
    Reconcile,
}

impl RefreshKind {
    pub fn into_event(self, live: Vec<String>) -> EditorEvent {
        match self {
            Self::Replace => EditorEvent::ReplaceFromSource(live),
            Self::Reconcile => EditorEvent::ReconcileFromSource(live),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(EditorEvent),
    Refresh(RefreshKind),
    /// Show or hide the help overlay. Never reaches the reducer.
    ToggleHelp,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(
        key_event: KeyEvent,
        state: &EditorState,
        view: &ViewState,
    ) -> Option<KeyAction> {
        if key_event.kind == KeyEventKind::Release {
            return None;
        }

        // Quit keys work everywhere, including over the help overlay
        let ctrl_c = key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || key_event.code == KeyCode::Char('q') {
            return Some(KeyAction::Dispatch(EditorEvent::Quit));
        }

        if view.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(KeyAction::ToggleHelp),
                _ => None,
            };
        }

        let event = match key_event.code {
            KeyCode::Esc => EditorEvent::Quit,
            KeyCode::Enter => EditorEvent::Confirm,
            KeyCode::Char('m') => EditorEvent::ToggleMode,
            KeyCode::Char('?') => return Some(KeyAction::ToggleHelp),
            KeyCode::Char('j') | KeyCode::Down => EditorEvent::CursorDown,
            KeyCode::Char('k') | KeyCode::Up => EditorEvent::CursorUp,
            code if state.mode() == EditorMode::Browsing => {
                return Self::handle_browsing_keys(code);
            }
            _ => return None,
        };
        Some(KeyAction::Dispatch(event))
    }

    fn handle_browsing_keys(code: KeyCode) -> Option<KeyAction> {
        match code {
            KeyCode::Char('d') => Some(KeyAction::Dispatch(EditorEvent::ToggleRetired)),
            KeyCode::Char('p') => Some(KeyAction::Refresh(RefreshKind::Replace)),
            KeyCode::Char('u') => Some(KeyAction::Refresh(RefreshKind::Reconcile)),
            _ => None,
        }
    }
}
