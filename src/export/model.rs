// src/export/model.rs

use crate::core::calculator::cost::trip_cost;
use crate::models::event::{CostTable, EventRecord};
use crate::models::trip::Trip;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat trip row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct TripExport {
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub days: u32,
    pub cost: f64,
}

impl TripExport {
    pub fn from_trip(trip: &Trip, costs: &CostTable) -> Self {
        Self {
            location: trip.location.clone(),
            start_date: format_date(trip.start_date),
            end_date: format_date(trip.end_date),
            days: trip.days,
            cost: trip_cost(trip, costs),
        }
    }
}

/// Flat event row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub date: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub golf: bool,
    pub source: String,
}

impl EventExport {
    pub fn from_record(date: NaiveDate, ev: &EventRecord) -> Self {
        Self {
            date: format_date(date),
            location: ev.location.clone(),
            kind: ev.kind.as_str().to_string(),
            golf: ev.is_golf(),
            source: ev.url.clone(),
        }
    }
}
