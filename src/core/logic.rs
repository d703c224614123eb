use crate::core::calculator::{breakdown, compute_stats};
use crate::core::report::build_report;
use crate::models::event::EventRecord;
use crate::models::report::StatsReport;
use crate::models::stats::GolfStats;
use crate::store::StatusData;
use chrono::{NaiveDate, Utc};

/// Entry points used by the CLI commands.
pub struct Core;

impl Core {
    pub fn build_stats(data: &StatusData) -> GolfStats {
        compute_stats(&data.events, &data.location_costs)
    }

    pub fn build_report(data: &StatusData, today: NaiveDate, recent_limit: usize) -> StatsReport {
        build_report(data, today, Utc::now(), recent_limit)
    }

    pub fn golf_on(data: &StatusData, date: NaiveDate) -> Option<&EventRecord> {
        breakdown::golf_event_on(&data.events, date)
    }
}
