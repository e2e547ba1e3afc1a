//! Arrival records.

use chrono::{DateTime, Local};

/// One upcoming bus at a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalRecord {
    /// Line identifier, e.g. `"200"`
    pub id: String,
    /// Normalized destination, e.g. `"Campanhã - Estação"`
    pub destination: String,
    /// Normalized waiting status
    pub status: String,
}

impl ArrivalRecord {
    pub fn new(
        id: impl Into<String>,
        destination: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
            status: status.into(),
        }
    }
}

/// The arrivals fetched for one stop. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalBoard {
    /// Stop code the board was fetched for
    pub stop: String,
    /// When the fetch completed (local time)
    pub fetched_at: DateTime<Local>,
    /// Records in the order the service listed them
    pub records: Vec<ArrivalRecord>,
}

impl ArrivalBoard {
    /// Create a board stamped with the current local time.
    pub fn new(stop: impl Into<String>, records: Vec<ArrivalRecord>) -> Self {
        Self {
            stop: stop.into(),
            fetched_at: Local::now(),
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
