// ABOUTME: Session record data model and the ordered, name-unique session list
// that forms the user's navigation order

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub name: String,
    /// Tombstone flag: the session was unreachable last time we looked, but
    /// its slot is kept so surrounding sessions stay in place.
    #[serde(default, alias = "deleted")]
    pub retired: bool,
}

impl SessionRecord {
    pub fn active(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            retired: false,
        }
    }

    pub fn retired(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            retired: true,
        }
    }

    pub fn indicator(&self) -> &'static str {
        if self.retired {
            "✗"
        } else {
            "●"
        }
    }
}

/// Ordered list of session records. Order is navigation order; names are
/// unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSessionList {
    records: Vec<SessionRecord>,
}

impl OrderedSessionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from arbitrary records. Empty names are dropped and only
    /// the first record for each name is kept.
    pub fn from_records(records: impl IntoIterator<Item = SessionRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|r| !r.name.is_empty())
            .filter(|r| seen.insert(r.name.clone()))
            .collect();
        Self { records }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_records(names.into_iter().map(SessionRecord::active))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SessionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SessionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| !r.retired).count()
    }

    /// Appends a record unless its name is already present or empty.
    /// Returns whether the record was added.
    pub fn push(&mut self, record: SessionRecord) -> bool {
        if record.name.is_empty() || self.contains(&record.name) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Marks the record at `index` retired. Returns false when out of bounds.
    pub fn retire(&mut self, index: usize) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.retired = true;
                true
            }
            None => false,
        }
    }

    pub fn toggle_retired(&mut self, index: usize) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.retired = !record.retired;
                true
            }
            None => false,
        }
    }

    /// Swaps two records in place. Out-of-range indices leave the list as is.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.records.len() || b >= self.records.len() {
            return false;
        }
        self.records.swap(a, b);
        true
    }
}

impl<'a> IntoIterator for &'a OrderedSessionList {
    type Item = &'a SessionRecord;
    type IntoIter = std::slice::Iter<'a, SessionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
