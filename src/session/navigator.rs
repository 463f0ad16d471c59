// ABOUTME: Next/previous navigation through the saved order with self-healing
// Sessions that fail to switch are retired and persisted before the next attempt

use crate::models::OrderedSessionList;
use crate::session::ordering::{find_next_active, find_prev_active, locate, Anchor};
use crate::session::persistence::OrderStore;
use crate::tmux::SessionSource;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Anchor to scan from when the current session is not in the order.
    fn missing_anchor(self) -> Anchor {
        match self {
            Self::Next => Anchor::BeforeStart,
            Self::Previous => Anchor::AfterEnd,
        }
    }

    fn find(self, sessions: &OrderedSessionList, from: Anchor, wrap_around: bool) -> Option<usize> {
        match self {
            Self::Next => find_next_active(sessions, from, wrap_around),
            Self::Previous => find_prev_active(sessions, from, wrap_around),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Switched to `target`. `skipped` lists sessions retired on the way.
    Switched { target: String, skipped: Vec<String> },
    /// Already at the boundary with wrap-around off.
    NoOp { skipped: Vec<String> },
    /// Every attempted switch failed.
    Exhausted { skipped: Vec<String> },
    /// Wrap-around is on and no active record is left.
    AllRetired { skipped: Vec<String> },
}

impl AdvanceOutcome {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Exhausted { .. } | Self::AllRetired { .. })
    }

    pub fn skipped(&self) -> &[String] {
        match self {
            Self::Switched { skipped, .. }
            | Self::NoOp { skipped }
            | Self::Exhausted { skipped }
            | Self::AllRetired { skipped } => skipped,
        }
    }
}

pub struct Navigator<'a> {
    source: &'a dyn SessionSource,
    store: &'a dyn OrderStore,
    wrap_around: bool,
}

impl<'a> Navigator<'a> {
    pub fn new(source: &'a dyn SessionSource, store: &'a dyn OrderStore, wrap_around: bool) -> Self {
        Self {
            source,
            store,
            wrap_around,
        }
    }

    /// Moves the client one step through `sessions` from `current`.
    ///
    /// A target that fails to switch is marked retired and the list is saved
    /// before the next candidate is tried, so a crash mid-loop never retries a
    /// dead session. A failed save is logged and does not stop navigation.
    pub fn advance(
        &self,
        sessions: &mut OrderedSessionList,
        current: &str,
        direction: Direction,
    ) -> AdvanceOutcome {
        let mut anchor = match locate(sessions, current) {
            Some(index) => Anchor::At(index),
            None => {
                info!("Current session '{}' is not in the saved order", current);
                direction.missing_anchor()
            }
        };
        let mut skipped = Vec::new();

        for _ in 0..sessions.len() {
            let Some(index) = direction.find(sessions, anchor, self.wrap_around) else {
                return Self::nothing_to_switch_to(skipped, self.wrap_around);
            };

            let Some(target) = sessions.get(index).map(|r| r.name.clone()) else {
                break;
            };

            match self.source.switch_to(&target) {
                Ok(()) => {
                    info!("Switched to session '{}'", target);
                    return AdvanceOutcome::Switched { target, skipped };
                }
                Err(e) => {
                    warn!("Session '{}' could not be switched to, retiring it: {}", target, e);
                    sessions.retire(index);
                    if let Err(save_err) = self.store.save(sessions) {
                        warn!("Failed to save retired session '{}': {}", target, save_err);
                    }
                    skipped.push(target);
                    anchor = Anchor::At(index);
                }
            }
        }

        Self::nothing_to_switch_to(skipped, self.wrap_around)
    }

    /// Outcome once the scan runs dry. Candidates that were tried and found
    /// dead make it fatal, otherwise it depends on wrap-around.
    fn nothing_to_switch_to(skipped: Vec<String>, wrap_around: bool) -> AdvanceOutcome {
        if !skipped.is_empty() {
            AdvanceOutcome::Exhausted { skipped }
        } else if wrap_around {
            AdvanceOutcome::AllRetired { skipped }
        } else {
            AdvanceOutcome::NoOp { skipped }
        }
    }
}
