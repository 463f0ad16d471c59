// ABOUTME: Host tmux integration
// Lists live sessions, reports the attached session and switches clients

pub mod client;
pub mod error;
pub mod source;

pub use client::TmuxClient;
pub use error::TmuxError;
pub use source::SessionSource;
