use super::event_type::EventType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One logged day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub location: String,
    /// Citation link, empty when none is known.
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type")]
    pub kind: EventType,
}

impl EventRecord {
    pub fn new(location: &str, url: &str, kind: EventType) -> Self {
        Self {
            location: location.to_string(),
            url: url.to_string(),
            kind,
        }
    }

    pub fn is_golf(&self) -> bool {
        self.kind.is_golf()
    }

    pub fn source(&self) -> Option<&str> {
        let url = self.url.trim();
        if url.is_empty() { None } else { Some(url) }
    }
}

/// The event store: at most one record per calendar date, iterated in
/// ascending date order.
pub type Events = BTreeMap<NaiveDate, EventRecord>;

/// Location name → estimated cost per golf day.
pub type CostTable = BTreeMap<String, f64>;
