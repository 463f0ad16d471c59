// ABOUTME: Session order persistence across invocations
// Saves and restores the ordered session list as JSON, with a legacy plain-text fallback

use crate::config::{resolve_config_dir, Settings, SETTINGS_FILE};
use crate::models::{OrderedSessionList, SessionRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const ORDER_FILE: &str = "rolo.json";
pub const LEGACY_ORDER_FILE: &str = "rolo.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine a config directory (set ROLO_CONFIG_DIR or --config-dir)")]
    NoConfigDir,

    #[error("corrupt state file {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the session order and settings live between invocations.
#[cfg_attr(test, mockall::automock)]
pub trait OrderStore {
    /// Empty list when nothing has been saved yet.
    fn load(&self) -> Result<OrderedSessionList, StoreError>;

    fn save(&self, sessions: &OrderedSessionList) -> Result<(), StoreError>;

    /// Defaults when no settings file exists.
    fn load_settings(&self) -> Result<Settings, StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct OrderDocument {
    #[serde(default)]
    sessions: Vec<SessionRecord>,
}

/// Earlier versions wrote a bare array of records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredOrder {
    Document(OrderDocument),
    Bare(Vec<SessionRecord>),
}

impl StoredOrder {
    fn into_records(self) -> Vec<SessionRecord> {
        match self {
            Self::Document(doc) => doc.sessions,
            Self::Bare(records) => records,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionPersistence {
    storage_path: PathBuf,
}

impl SessionPersistence {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
        }
    }

    /// Store rooted at the resolved config directory. The directory itself is
    /// created lazily on first save.
    pub fn from_config_dir(explicit: Option<&Path>) -> Result<Self, StoreError> {
        resolve_config_dir(explicit)
            .map(Self::new)
            .ok_or(StoreError::NoConfigDir)
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    pub fn order_path(&self) -> PathBuf {
        self.storage_path.join(ORDER_FILE)
    }

    pub fn legacy_path(&self) -> PathBuf {
        self.storage_path.join(LEGACY_ORDER_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.storage_path.join(SETTINGS_FILE)
    }

    fn load_json(path: &Path) -> Result<OrderedSessionList, StoreError> {
        let content = read_file(path)?;
        if content.trim().is_empty() {
            return Ok(OrderedSessionList::new());
        }

        let stored: StoredOrder =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let records = stored.into_records();
        let total = records.len();
        let sessions = OrderedSessionList::from_records(records);
        if sessions.len() != total {
            warn!(
                "Dropped {} duplicate or unnamed entries from {:?}",
                total - sessions.len(),
                path
            );
        }
        Ok(sessions)
    }

    fn load_legacy(path: &Path) -> Result<OrderedSessionList, StoreError> {
        let content = read_file(path)?;
        info!("Loading session order from legacy file {:?}", path);
        Ok(OrderedSessionList::from_names(
            content.lines().map(str::trim).filter(|line| !line.is_empty()),
        ))
    }
}

impl OrderStore for SessionPersistence {
    fn load(&self) -> Result<OrderedSessionList, StoreError> {
        let json_path = self.order_path();
        if json_path.exists() {
            return Self::load_json(&json_path);
        }

        let legacy_path = self.legacy_path();
        if legacy_path.exists() {
            return Self::load_legacy(&legacy_path);
        }

        debug!("No saved session order in {:?}", self.storage_path);
        Ok(OrderedSessionList::new())
    }

    fn save(&self, sessions: &OrderedSessionList) -> Result<(), StoreError> {
        let path = self.order_path();
        let write_failed = |source: io::Error| StoreError::WriteFailed {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.storage_path).map_err(write_failed)?;

        let document = OrderDocument {
            sessions: sessions.records().to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| write_failed(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        // Write then rename so an interrupted save never leaves a truncated file
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json + "\n").map_err(write_failed)?;
        fs::rename(&tmp_path, &path).map_err(write_failed)?;

        debug!("Saved {} sessions to {:?}", sessions.len(), path);
        Ok(())
    }

    fn load_settings(&self) -> Result<Settings, StoreError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = read_file(&path)?;
        Settings::from_toml(&content).map_err(|e| StoreError::Corrupt {
            path,
            reason: e.to_string(),
        })
    }
}

fn read_file(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}
