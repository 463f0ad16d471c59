// ABOUTME: TmuxClient shells out to the tmux binary on the host
// Lists live sessions, reads the attached session and switches the current client

use crate::tmux::{SessionSource, TmuxError};
use std::io::ErrorKind;
use std::process::{Command, Output};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct TmuxClient {
    binary: String,
}

impl Default for TmuxClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TmuxClient {
    pub fn new() -> Self {
        Self::with_binary("tmux")
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output, TmuxError> {
        debug!("Running {} {}", self.binary, args.join(" "));
        Command::new(&self.binary).args(args).output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TmuxError::TmuxNotInstalled
            } else {
                TmuxError::IoError(e)
            }
        })
    }
}

impl SessionSource for TmuxClient {
    fn list_active(&self) -> Result<Vec<String>, TmuxError> {
        let output = self.run(&["list-sessions", "-F", "#{session_name}"])?;

        if !output.status.success() {
            let stderr = stderr_text(&output);
            warn!("tmux list-sessions failed: {}", stderr);
            return Err(TmuxError::SourceUnavailable(stderr));
        }

        Ok(parse_session_names(&String::from_utf8_lossy(&output.stdout)))
    }

    fn current_session(&self) -> Result<String, TmuxError> {
        // Outside tmux, display-message would answer for whichever client
        // tmux picks, so refuse up front.
        if std::env::var_os("TMUX").is_none() {
            return Err(TmuxError::NotAttached("TMUX is not set".to_string()));
        }

        let output = self.run(&["display-message", "-p", "#S"])?;
        if !output.status.success() {
            return Err(TmuxError::NotAttached(stderr_text(&output)));
        }

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            return Err(TmuxError::NotAttached("no current session found".to_string()));
        }
        Ok(name)
    }

    fn switch_to(&self, name: &str) -> Result<(), TmuxError> {
        // "=" forces an exact session match instead of tmux's prefix matching
        let target = format!("={name}");
        let output = self.run(&["switch-client", "-t", target.as_str()])?;

        if !output.status.success() {
            return Err(TmuxError::TargetMissing {
                name: name.to_string(),
                reason: stderr_text(&output),
            });
        }
        Ok(())
    }
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// One session name per line; blank lines and surrounding whitespace are
/// ignored.
pub fn parse_session_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_names() {
        let names = parse_session_names("work\n  play \n\nmisc\n");
        assert_eq!(names, vec!["work", "play", "misc"]);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_session_names("").is_empty());
        assert!(parse_session_names("\n\n").is_empty());
    }

    #[test]
    fn test_missing_binary_reports_not_installed() {
        let client = TmuxClient::with_binary("rolo-test-no-such-tmux-binary");
        let err = client.list_active().unwrap_err();
        assert!(matches!(err, TmuxError::TmuxNotInstalled));
    }
}
