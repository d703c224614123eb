//! Lint pass over the event store. Nothing here is fatal: the engine copes
//! with every issue listed, but each one usually means a data-entry slip.

use super::StatusData;
use crate::models::event_type::EventType;
use crate::models::location::KnownLocation;
use chrono::{Days, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataIssue {
    /// Golf day at a location with no cost entry; it is counted at zero.
    MissingCost { date: NaiveDate, location: String },
    UnknownLocation { date: NaiveDate, location: String },
    MissingSource { date: NaiveDate },
    /// Pure arrival with nothing logged the following day.
    DanglingArrival { date: NaiveDate },
    /// Pure departure with nothing logged the preceding day.
    OrphanDeparture { date: NaiveDate },
    FutureEvent { date: NaiveDate },
}

impl DataIssue {
    pub fn date(&self) -> NaiveDate {
        match self {
            DataIssue::MissingCost { date, .. }
            | DataIssue::UnknownLocation { date, .. }
            | DataIssue::MissingSource { date }
            | DataIssue::DanglingArrival { date }
            | DataIssue::OrphanDeparture { date }
            | DataIssue::FutureEvent { date } => *date,
        }
    }
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataIssue::MissingCost { date, location } => {
                write!(f, "{date}: no cost entry for '{location}', counted as 0")
            }
            DataIssue::UnknownLocation { date, location } => {
                write!(f, "{date}: unrecognised location '{location}'")
            }
            DataIssue::MissingSource { date } => write!(f, "{date}: golf day without a source"),
            DataIssue::DanglingArrival { date } => {
                write!(f, "{date}: arrival not followed by any event")
            }
            DataIssue::OrphanDeparture { date } => {
                write!(f, "{date}: departure not preceded by any event")
            }
            DataIssue::FutureEvent { date } => write!(f, "{date}: event dated in the future"),
        }
    }
}

/// Collect data issues in date order.
pub fn validate(data: &StatusData, today: NaiveDate) -> Vec<DataIssue> {
    let events = &data.events;
    let mut issues = Vec::new();

    for (&date, ev) in events {
        if date > today {
            issues.push(DataIssue::FutureEvent { date });
        }

        if KnownLocation::from_name(&ev.location).is_none() {
            issues.push(DataIssue::UnknownLocation {
                date,
                location: ev.location.clone(),
            });
        }

        if ev.is_golf() {
            if !data.location_costs.contains_key(&ev.location) {
                issues.push(DataIssue::MissingCost {
                    date,
                    location: ev.location.clone(),
                });
            }
            if ev.source().is_none() {
                issues.push(DataIssue::MissingSource { date });
            }
        }

        match ev.kind {
            EventType::Arrival => {
                let next = date.checked_add_days(Days::new(1));
                if next.is_none_or(|d| !events.contains_key(&d)) {
                    issues.push(DataIssue::DanglingArrival { date });
                }
            }
            EventType::Departure => {
                let prev = date.checked_sub_days(Days::new(1));
                if prev.is_none_or(|d| !events.contains_key(&d)) {
                    issues.push(DataIssue::OrphanDeparture { date });
                }
            }
            EventType::Golf | EventType::GolfArrival | EventType::GolfDeparture => {}
        }
    }

    issues
}
