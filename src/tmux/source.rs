// ABOUTME: Session source abstraction over the live multiplexer
// Lets the ordering engine and editor run against tmux or a test double

use crate::tmux::TmuxError;

#[cfg_attr(test, mockall::automock)]
pub trait SessionSource {
    /// Names of all live sessions, in the order the multiplexer reports them.
    fn list_active(&self) -> Result<Vec<String>, TmuxError>;

    /// Name of the session the caller is attached to.
    fn current_session(&self) -> Result<String, TmuxError>;

    fn switch_to(&self, name: &str) -> Result<(), TmuxError>;
}
