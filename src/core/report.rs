//! Builds the public statistics document around the engine output.

use super::calculator::{breakdown, compute_stats};
use crate::models::report::{ReportMetadata, StatsReport};
use crate::store::StatusData;
use crate::utils::date::days_since;
use crate::utils::format_percentage;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

pub const DATA_VERSION: &str = "2.0";
pub const SITE_NAME: &str = "Is Trump Golfing Today?";
pub const SITE_URL: &str = "https://istrumpgolfing.today";
pub const DEFAULT_RECENT_LIMIT: usize = 10;

pub fn build_report(
    data: &StatusData,
    today: NaiveDate,
    generated_at: DateTime<Utc>,
    recent_limit: usize,
) -> StatsReport {
    let stats = compute_stats(&data.events, &data.location_costs);
    let days_since_start = days_since(data.term_start, today);

    StatsReport {
        term_start: data.term_start,
        current_date: today,
        days_since_start,
        total_golf_days: stats.days_golfed,
        percentage_golfed: format_percentage(stats.days_golfed, days_since_start),
        estimated_total_cost: stats.total_cost,
        total_trips: stats.trips.len(),
        golf_days_by_location: breakdown::golf_days_by_location(&data.events),
        recent_golf_days: breakdown::recent_golf_days(&data.events, recent_limit),
        metadata: ReportMetadata {
            data_version: DATA_VERSION.to_string(),
            last_updated: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            attribution: SITE_NAME.to_string(),
            website: SITE_URL.to_string(),
        },
    }
}
