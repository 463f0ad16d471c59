// ABOUTME: Reorder editor state machine: the session list being edited, the cursor and the mode
// All transitions go through EditorState::apply, which performs no I/O

use crate::models::{OrderedSessionList, SessionRecord};
use crate::session::ordering::{populate, reconcile};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Browsing,
    Repositioning,
}

impl EditorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Browsing => Self::Repositioning,
            Self::Repositioning => Self::Browsing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Browsing => "NORMAL",
            Self::Repositioning => "MOVE MODE",
        }
    }
}

/// How the editor session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorExit {
    /// Save the list, then exit.
    Commit,
    /// Exit without saving.
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    Quit,
    ToggleMode,
    ToggleRetired,
    /// Replace the list with these live session names.
    ReplaceFromSource(Vec<String>),
    /// Reconcile the list against these live session names.
    ReconcileFromSource(Vec<String>),
    CursorDown,
    CursorUp,
    Confirm,
}

#[derive(Debug)]
pub struct EditorState {
    sessions: OrderedSessionList,
    cursor: Option<usize>,
    mode: EditorMode,
    wrap_around: bool,
    exit: Option<EditorExit>,
}

impl EditorState {
    pub fn new(sessions: OrderedSessionList, wrap_around: bool) -> Self {
        let cursor = if sessions.is_empty() { None } else { Some(0) };
        Self {
            sessions,
            cursor,
            mode: EditorMode::Browsing,
            wrap_around,
            exit: None,
        }
    }

    pub fn sessions(&self) -> &OrderedSessionList {
        &self.sessions
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn wrap_around(&self) -> bool {
        self.wrap_around
    }

    pub fn exit(&self) -> Option<EditorExit> {
        self.exit
    }

    pub fn is_finished(&self) -> bool {
        self.exit.is_some()
    }

    pub fn selected(&self) -> Option<&SessionRecord> {
        self.cursor.and_then(|i| self.sessions.get(i))
    }

    /// Applies one event. Events arriving after a terminal transition are
    /// ignored.
    pub fn apply(&mut self, event: EditorEvent) {
        if self.is_finished() {
            return;
        }
        debug!("Editor event {:?} in {:?}", event, self.mode);

        match event {
            EditorEvent::Quit => self.exit = Some(EditorExit::Discard),
            EditorEvent::Confirm => self.exit = Some(EditorExit::Commit),
            EditorEvent::ToggleMode => self.mode = self.mode.toggled(),
            other => match self.mode {
                EditorMode::Browsing => self.apply_browsing(other),
                EditorMode::Repositioning => self.apply_repositioning(other),
            },
        }
    }

    fn apply_browsing(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::ToggleRetired => {
                if let Some(i) = self.cursor {
                    self.sessions.toggle_retired(i);
                }
            }
            EditorEvent::ReplaceFromSource(live) => {
                self.sessions = populate(&live);
                self.cursor = Some(0);
                self.clamp_cursor();
            }
            EditorEvent::ReconcileFromSource(live) => {
                self.sessions = reconcile(&self.sessions, &live);
                self.clamp_cursor();
            }
            EditorEvent::CursorDown => self.cursor_down(),
            EditorEvent::CursorUp => self.cursor_up(),
            _ => {}
        }
    }

    fn apply_repositioning(&mut self, event: EditorEvent) {
        let Some(i) = self.cursor else {
            return;
        };
        match event {
            EditorEvent::CursorDown if i + 1 < self.sessions.len() => {
                self.sessions.swap(i, i + 1);
                self.cursor = Some(i + 1);
            }
            EditorEvent::CursorUp if i > 0 => {
                self.sessions.swap(i, i - 1);
                self.cursor = Some(i - 1);
            }
            _ => {}
        }
    }

    fn cursor_down(&mut self) {
        let Some(i) = self.cursor else {
            return;
        };
        if i + 1 < self.sessions.len() {
            self.cursor = Some(i + 1);
        } else if self.wrap_around {
            self.cursor = Some(0);
        }
    }

    fn cursor_up(&mut self) {
        let Some(i) = self.cursor else {
            return;
        };
        if i > 0 {
            self.cursor = Some(i - 1);
        } else if self.wrap_around {
            self.cursor = Some(self.sessions.len().saturating_sub(1));
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.sessions.len();
        self.cursor = match self.cursor {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
    }
}
