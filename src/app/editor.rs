// ABOUTME: Drives the reorder editor: routes key actions to the state machine,
// performs live refreshes against tmux and commits the final order

use crate::app::events::{EventHandler, KeyAction, RefreshKind};
use crate::app::notification::Notification;
use crate::app::state::{EditorExit, EditorState};
use crate::app::view::ViewState;
use crate::session::persistence::{OrderStore, StoreError};
use crate::tmux::SessionSource;
use crossterm::event::KeyEvent;
use tracing::{info, warn};

pub struct App<'a> {
    pub state: EditorState,
    pub view: ViewState,
    source: &'a dyn SessionSource,
}

impl<'a> App<'a> {
    pub fn new(state: EditorState, source: &'a dyn SessionSource) -> Self {
        Self {
            state,
            view: ViewState::new(),
            source,
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if let Some(action) = EventHandler::handle_key_event(key_event, &self.state, &self.view) {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Dispatch(event) => self.state.apply(event),
            KeyAction::Refresh(kind) => self.refresh(kind),
            KeyAction::ToggleHelp => self.view.toggle_help(),
        }
    }

    /// Fetches live sessions and applies them. On failure the list and mode
    /// stay exactly as they were and an error notification is shown.
    fn refresh(&mut self, kind: RefreshKind) {
        match self.source.list_active() {
            Ok(live) => {
                let count = live.len();
                self.state.apply(kind.into_event(live));
                info!("Editor refresh ({:?}) applied {} live sessions", kind, count);
                let verb = match kind {
                    RefreshKind::Replace => "Repopulated",
                    RefreshKind::Reconcile => "Updated",
                };
                self.view.notify(Notification::success(format!(
                    "{verb} from {count} live session(s)"
                )));
            }
            Err(e) => {
                warn!("Failed to list tmux sessions for refresh: {}", e);
                self.view
                    .notify(Notification::error(format!("Could not list tmux sessions: {e}")));
            }
        }
    }

    pub fn tick(&mut self) {
        self.view.expire_notification();
    }

    pub fn should_quit(&self) -> bool {
        self.state.is_finished()
    }

    /// Persists the list when the editor was confirmed. Returns how the editor
    /// ended; an unfinished editor is treated as discarded.
    pub fn finish(&self, store: &dyn OrderStore) -> Result<EditorExit, StoreError> {
        match self.state.exit() {
            Some(EditorExit::Commit) => {
                store.save(self.state.sessions())?;
                info!("Committed order of {} sessions", self.state.sessions().len());
                Ok(EditorExit::Commit)
            }
            _ => {
                info!("Editor closed without saving");
                Ok(EditorExit::Discard)
            }
        }
    }
}
