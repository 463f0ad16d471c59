// ABOUTME: Session ordering: the ordering engine, navigation and persistence of the order

pub mod navigator;
pub mod ordering;
pub mod persistence;

pub use navigator::{AdvanceOutcome, Direction, Navigator};
pub use persistence::{OrderStore, SessionPersistence, StoreError};
