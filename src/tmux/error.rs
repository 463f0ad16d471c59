// ABOUTME: Error types for talking to the tmux server
// Defines the failures the session source can report back to the ordering engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("Tmux not installed on host")]
    TmuxNotInstalled,

    #[error("tmux server unavailable: {0}")]
    SourceUnavailable(String),

    #[error("not inside a tmux session: {0}")]
    NotAttached(String),

    #[error("failed to switch to session '{name}': {reason}")]
    TargetMissing { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
