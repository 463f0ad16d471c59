// ABOUTME: Core data models for rolo: session records and the ordered session list

pub mod session;

pub use session::{OrderedSessionList, SessionRecord};
