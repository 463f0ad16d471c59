// ABOUTME: Command-line surface: argument parsing and the populate/next/prev handlers
// Handlers write user-facing text to the given streams and report an exit status

use crate::models::OrderedSessionList;
use crate::session::ordering::populate;
use crate::session::{AdvanceOutcome, Direction, Navigator, OrderStore};
use crate::tmux::SessionSource;
use anyhow::{Context, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "rolo",
    version,
    about = "Keep your own order of tmux sessions and cycle through it",
    long_about = "Keep your own order of tmux sessions and cycle through it.\n\n\
                  Run without a command to open the interactive reorder editor."
)]
pub struct Cli {
    /// Directory holding rolo.json and config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Fetch active tmux sessions and save them as the order
    Populate,
    /// Switch to the next session in order
    Next,
    /// Switch to the previous session in order
    #[command(alias = "previous")]
    Prev,
}

/// Exit status of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandExit {
    Success,
    Failure,
}

impl From<CommandExit> for ExitCode {
    fn from(exit: CommandExit) -> Self {
        match exit {
            CommandExit::Success => Self::SUCCESS,
            CommandExit::Failure => Self::FAILURE,
        }
    }
}

/// Parses arguments. Help and version requests print and exit 0. An unknown
/// command prints `Unknown command: <x>` plus usage and exits 1; other
/// parse errors print clap's message plus usage.
pub fn parse_args<I, T>(args: I) -> Result<Cli, CommandExit>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            CommandExit::Success
        }
        _ => {
            match unknown_command(&err) {
                Some(name) => eprintln!("Unknown command: {name}\n"),
                None => eprintln!("{}", err.render()),
            }
            let _ = Cli::command().print_help();
            CommandExit::Failure
        }
    })
}

/// The offending word when parsing failed on an unrecognised subcommand.
fn unknown_command(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::InvalidSubcommand {
        return None;
    }
    match err.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(name)) => Some(name.clone()),
        _ => None,
    }
}

pub fn run_populate(
    source: &dyn SessionSource,
    store: &dyn OrderStore,
    saved_to: &Path,
    out: &mut dyn Write,
) -> Result<CommandExit> {
    let live = source
        .list_active()
        .context("Error getting tmux sessions")?;

    if live.is_empty() {
        writeln!(out, "No active tmux sessions found")?;
        return Ok(CommandExit::Success);
    }

    let sessions = populate(&live);
    store.save(&sessions).context("Error saving sessions")?;
    info!("Populated {} sessions", sessions.len());

    writeln!(
        out,
        "Saved {} session(s) to {}:",
        sessions.len(),
        saved_to.display()
    )?;
    for record in &sessions {
        writeln!(out, "  - {}", record.name)?;
    }
    Ok(CommandExit::Success)
}

pub fn run_navigate(
    source: &dyn SessionSource,
    store: &dyn OrderStore,
    wrap_around: bool,
    direction: Direction,
    err: &mut dyn Write,
) -> Result<CommandExit> {
    let current = source
        .current_session()
        .context("Error getting current session")?;

    let mut sessions: OrderedSessionList = store.load().context("Error loading sessions")?;
    if sessions.is_empty() {
        writeln!(err, "No sessions configured. Run 'rolo populate' first.")?;
        return Ok(CommandExit::Failure);
    }

    let navigator = Navigator::new(source, store, wrap_around);
    let outcome = navigator.advance(&mut sessions, &current, direction);

    for name in outcome.skipped() {
        writeln!(
            err,
            "Warning: session '{name}' no longer exists, marked retired"
        )?;
    }

    match outcome {
        AdvanceOutcome::Switched { .. } | AdvanceOutcome::NoOp { .. } => Ok(CommandExit::Success),
        AdvanceOutcome::AllRetired { .. } => {
            writeln!(
                err,
                "No active sessions available (all are retired). Run 'rolo' and press u to update."
            )?;
            Ok(CommandExit::Failure)
        }
        AdvanceOutcome::Exhausted { .. } => {
            writeln!(err, "Error: no valid sessions found")?;
            Ok(CommandExit::Failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = parse_args(["rolo", "next"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Next));

        let cli = parse_args(["rolo", "previous"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Prev));

        let cli = parse_args(["rolo"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_parse_config_dir_flag() {
        let cli = parse_args(["rolo", "populate", "--config-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Populate));
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_unknown_command_fails() {
        assert_eq!(
            parse_args(["rolo", "sideways"]).unwrap_err(),
            CommandExit::Failure
        );
    }

    #[test]
    fn test_unknown_command_is_named() {
        let err = Cli::try_parse_from(["rolo", "sideways"]).unwrap_err();
        assert_eq!(unknown_command(&err), Some("sideways".to_string()));

        let err = Cli::try_parse_from(["rolo", "--bogus"]).unwrap_err();
        assert_eq!(unknown_command(&err), None);
    }

    #[test]
    fn test_help_succeeds() {
        for flag in ["help", "-h", "--help"] {
            assert_eq!(
                parse_args(["rolo", flag]).unwrap_err(),
                CommandExit::Success,
                "{flag} should exit 0"
            );
        }
    }

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
