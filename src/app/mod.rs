// ABOUTME: Reorder editor: state machine, key mapping and the driver tying it to tmux and storage

pub mod editor;
pub mod events;
pub mod notification;
pub mod state;
pub mod terminal;
pub mod view;

pub use editor::App;
pub use events::{EventHandler, KeyAction, RefreshKind};
pub use state::{EditorEvent, EditorExit, EditorMode, EditorState};
pub use view::ViewState;
