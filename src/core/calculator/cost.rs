//! Cost attribution: every golf day is charged the per-day cost of its
//! location.

use crate::models::event::{CostTable, EventRecord};
use crate::models::trip::Trip;
use chrono::NaiveDate;

/// Per-day cost for a location, zero when the table has no entry.
pub fn cost_for(location: &str, costs: &CostTable) -> f64 {
    costs.get(location).copied().unwrap_or(0.0)
}

pub fn total_cost<'a, I>(golf_days: I, costs: &CostTable) -> f64
where
    I: IntoIterator<Item = (&'a NaiveDate, &'a EventRecord)>,
{
    golf_days
        .into_iter()
        .map(|(_, ev)| cost_for(&ev.location, costs))
        .sum()
}

pub fn trip_cost(trip: &Trip, costs: &CostTable) -> f64 {
    cost_for(&trip.location, costs) * f64::from(trip.days)
}
