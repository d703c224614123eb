use super::{cost, trips};
use crate::models::event::{CostTable, EventRecord, Events};
use crate::models::stats::GolfStats;
use chrono::NaiveDate;

/// Aggregate the event store into days golfed, trips and total cost.
pub fn compute_stats(events: &Events, costs: &CostTable) -> GolfStats {
    // BTreeMap iteration is already ascending by date
    let golf_days: Vec<(&NaiveDate, &EventRecord)> =
        events.iter().filter(|(_, ev)| ev.is_golf()).collect();

    GolfStats {
        days_golfed: golf_days.len(),
        trips: trips::build_trips(golf_days.iter().copied()),
        total_cost: cost::total_cost(golf_days.iter().copied(), costs),
    }
}
