//! Event rows and the table that holds them

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Purchase,
    Play,
    /// Any other raw action text; belongs to neither partition
    Other(String),
}

impl Action {
    /// Exact, case-sensitive match against the raw column
    pub fn parse(raw: &str) -> Self {
        match raw {
            "purchase" => Action::Purchase,
            "play" => Action::Play,
            other => Action::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Purchase => "purchase",
            Action::Play => "play",
            Action::Other(raw) => raw,
        }
    }
}

/// One row of the event log
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub user_id: String,
    pub game: String,
    pub action: Action,
    /// Hours played for `play`; placeholder for `purchase`
    pub value: f64,
}

impl Event {
    pub fn is_purchase(&self) -> bool {
        matches!(self.action, Action::Purchase)
    }

    pub fn is_play(&self) -> bool {
        matches!(self.action, Action::Play)
    }
}

/// Loaded event log. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTable {
    source: PathBuf,
    events: Vec<Event>,
}

impl EventTable {
    pub fn new(source: impl Into<PathBuf>, events: Vec<Event>) -> Self {
        Self {
            source: source.into(),
            events,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Purchase partition
    pub fn purchases(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_purchase())
    }

    /// Play partition
    pub fn plays(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_play())
    }
}
