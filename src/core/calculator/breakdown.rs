//! Secondary views over the event store used by the report and the CLI.

use crate::models::event::{EventRecord, Events};
use crate::models::report::RecentGolfDay;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub fn golf_days_by_location(events: &Events) -> BTreeMap<String, usize> {
    let mut by_location = BTreeMap::new();
    for ev in events.values().filter(|ev| ev.is_golf()) {
        *by_location.entry(ev.location.clone()).or_insert(0) += 1;
    }
    by_location
}

/// Most recent golf days first, at most `limit` entries.
pub fn recent_golf_days(events: &Events, limit: usize) -> Vec<RecentGolfDay> {
    events
        .iter()
        .rev()
        .filter(|(_, ev)| ev.is_golf())
        .take(limit)
        .map(|(date, ev)| RecentGolfDay {
            date: *date,
            location: ev.location.clone(),
            kind: ev.kind,
            source: ev.url.clone(),
        })
        .collect()
}

/// The record for `date` if it is a golf day.
pub fn golf_event_on(events: &Events, date: NaiveDate) -> Option<&EventRecord> {
    events.get(&date).filter(|ev| ev.is_golf())
}
