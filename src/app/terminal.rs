// ABOUTME: Terminal setup helper: runs the editor with raw mode on and always puts the terminal back

use anyhow::{Context, Result};

/// Runs `setup` and then `body`, calling `restore` afterwards whether either
/// of them failed. An error from `setup` or `body` wins over a restore error.
pub fn run_restoring<T>(
    setup: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> std::io::Result<()>,
) -> Result<T> {
    let result = setup().and_then(|()| body());
    let restored = restore().context("Failed to restore terminal");
    let value = result?;
    restored?;
    Ok(value)
}
