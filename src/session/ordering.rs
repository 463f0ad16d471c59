// ABOUTME: Ordering engine: builds, reconciles and scans the persisted session order
// against the live set of tmux sessions

use crate::models::{OrderedSessionList, SessionRecord};
use std::collections::HashSet;
use tracing::debug;

/// Starting point of a next/previous scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    At(usize),
    /// Virtual slot before index 0.
    BeforeStart,
    /// Virtual slot after the last index.
    AfterEnd,
}

/// Fresh list from the live sessions, in the order tmux reports them. Nothing
/// from any previous order is kept.
pub fn populate<S: AsRef<str>>(live_names: &[S]) -> OrderedSessionList {
    OrderedSessionList::from_names(live_names.iter().map(|n| n.as_ref().to_string()))
}

/// Order-preserving update: records whose session is gone are purged,
/// surviving records are reactivated, new sessions are appended in the order
/// tmux reports them.
pub fn reconcile<S: AsRef<str>>(current: &OrderedSessionList, live_names: &[S]) -> OrderedSessionList {
    let mut remaining: HashSet<&str> = live_names.iter().map(|n| n.as_ref()).collect();
    let mut reconciled = OrderedSessionList::new();
    let mut purged = 0usize;

    for record in current {
        if remaining.remove(record.name.as_str()) {
            reconciled.push(SessionRecord::active(record.name.clone()));
        } else {
            purged += 1;
        }
    }

    let mut appended = 0usize;
    for name in live_names {
        let name = name.as_ref();
        if remaining.remove(name) {
            reconciled.push(SessionRecord::active(name));
            appended += 1;
        }
    }

    debug!(
        "Reconciled {} records: {} purged, {} appended",
        current.len(),
        purged,
        appended
    );
    reconciled
}

pub fn locate(list: &OrderedSessionList, name: &str) -> Option<usize> {
    list.iter().position(|r| r.name == name)
}

/// First non-retired record after `from`. With wrap-around the scan is
/// circular and covers `len` positions, so an anchor that is itself the only
/// active record is returned last. Without wrap-around the scan stops at the
/// end of the list.
pub fn find_next_active(list: &OrderedSessionList, from: Anchor, wrap_around: bool) -> Option<usize> {
    let len = list.len();
    if len == 0 {
        return None;
    }

    if wrap_around {
        let base = match from {
            Anchor::At(i) => i.min(len - 1),
            Anchor::BeforeStart | Anchor::AfterEnd => len - 1,
        };
        return (1..=len)
            .map(|step| (base + step) % len)
            .find(|&i| is_active(list, i));
    }

    let start = match from {
        Anchor::At(i) => i + 1,
        Anchor::BeforeStart => 0,
        Anchor::AfterEnd => len,
    };
    (start..len).find(|&i| is_active(list, i))
}

/// Mirror of [`find_next_active`], scanning towards the start of the list.
pub fn find_prev_active(list: &OrderedSessionList, from: Anchor, wrap_around: bool) -> Option<usize> {
    let len = list.len();
    if len == 0 {
        return None;
    }

    if wrap_around {
        let base = match from {
            Anchor::At(i) => i.min(len - 1),
            Anchor::BeforeStart | Anchor::AfterEnd => 0,
        };
        return (1..=len)
            .map(|step| (base + len - step) % len)
            .find(|&i| is_active(list, i));
    }

    let end = match from {
        Anchor::At(i) => i.min(len),
        Anchor::BeforeStart => 0,
        Anchor::AfterEnd => len,
    };
    (0..end).rev().find(|&i| is_active(list, i))
}

fn is_active(list: &OrderedSessionList, index: usize) -> bool {
    list.get(index).is_some_and(|r| !r.retired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(spec: &[(&str, bool)]) -> OrderedSessionList {
        OrderedSessionList::from_records(spec.iter().map(|(name, retired)| SessionRecord {
            name: (*name).to_string(),
            retired: *retired,
        }))
    }

    #[test]
    fn test_populate_keeps_source_order() {
        let populated = populate(&["work", "play", "misc"]);
        assert_eq!(populated.names(), vec!["work", "play", "misc"]);
        assert_eq!(populated.active_count(), 3);
    }

    #[test]
    fn test_reconcile_purges_reactivates_and_appends() {
        let current = list(&[("a", false), ("gone", false), ("b", true), ("c", false)]);
        let reconciled = reconcile(&current, &["new1", "c", "a", "b", "new2"]);

        assert_eq!(reconciled.names(), vec!["a", "b", "c", "new1", "new2"]);
        assert_eq!(reconciled.active_count(), 5);
    }

    #[test]
    fn test_reconcile_name_set_equals_live_set() {
        let current = list(&[("x", false), ("y", true), ("z", false)]);
        let live = ["z", "w", "x"];
        let reconciled = reconcile(&current, &live);

        let mut names = reconciled.names();
        names.sort_unstable();
        assert_eq!(names, vec!["w", "x", "z"]);
        // kept names retain their relative order from the old list
        assert_eq!(reconciled.names(), vec!["x", "z", "w"]);
    }

    #[test]
    fn test_reconcile_with_no_live_sessions_empties_list() {
        let current = list(&[("a", false), ("b", false)]);
        let live: [&str; 0] = [];
        assert!(reconcile(&current, &live).is_empty());
    }

    #[test]
    fn test_locate() {
        let l = list(&[("a", false), ("b", true)]);
        assert_eq!(locate(&l, "b"), Some(1));
        assert_eq!(locate(&l, "nope"), None);
    }

    #[test]
    fn test_empty_list_finds_nothing() {
        let l = OrderedSessionList::new();
        for wrap in [true, false] {
            assert_eq!(find_next_active(&l, Anchor::BeforeStart, wrap), None);
            assert_eq!(find_prev_active(&l, Anchor::AfterEnd, wrap), None);
            assert_eq!(find_next_active(&l, Anchor::At(0), wrap), None);
        }
    }

    #[test]
    fn test_next_without_wrap_stops_at_end() {
        let l = list(&[("a", false), ("b", true), ("c", false)]);
        assert_eq!(find_next_active(&l, Anchor::At(0), false), Some(2));
        assert_eq!(find_next_active(&l, Anchor::At(2), false), None);
        assert_eq!(find_next_active(&l, Anchor::BeforeStart, false), Some(0));
        assert_eq!(find_next_active(&l, Anchor::AfterEnd, false), None);
    }

    #[test]
    fn test_prev_without_wrap_stops_at_start() {
        let l = list(&[("a", false), ("b", true), ("c", false)]);
        assert_eq!(find_prev_active(&l, Anchor::At(2), false), Some(0));
        assert_eq!(find_prev_active(&l, Anchor::At(0), false), None);
        assert_eq!(find_prev_active(&l, Anchor::AfterEnd, false), Some(2));
        assert_eq!(find_prev_active(&l, Anchor::BeforeStart, false), None);
    }

    #[test]
    fn test_wrap_skips_retired_and_circles() {
        let l = list(&[("a", false), ("b", true), ("c", false)]);
        assert_eq!(find_next_active(&l, Anchor::At(2), true), Some(0));
        assert_eq!(find_prev_active(&l, Anchor::At(0), true), Some(2));
        assert_eq!(find_next_active(&l, Anchor::BeforeStart, true), Some(0));
        assert_eq!(find_prev_active(&l, Anchor::AfterEnd, true), Some(2));
    }

    #[test]
    fn test_wrap_returns_anchor_when_it_is_the_only_active() {
        let l = list(&[("a", true), ("b", false), ("c", true)]);
        assert_eq!(find_next_active(&l, Anchor::At(1), true), Some(1));
        assert_eq!(find_prev_active(&l, Anchor::At(1), true), Some(1));
    }

    #[test]
    fn test_wrap_all_retired_is_none() {
        let l = list(&[("a", true), ("b", true)]);
        assert_eq!(find_next_active(&l, Anchor::At(0), true), None);
        assert_eq!(find_prev_active(&l, Anchor::At(1), true), None);
    }

    #[test]
    fn test_next_then_prev_returns_to_origin() {
        let l = list(&[("a", false), ("b", true), ("c", false), ("d", false), ("e", true)]);
        for origin in [0, 2, 3] {
            let next = find_next_active(&l, Anchor::At(origin), true).unwrap();
            let back = find_prev_active(&l, Anchor::At(next), true).unwrap();
            assert_eq!(back, origin, "round trip from {origin} via {next}");
        }
    }
}
