use super::event_type::EventType;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Public statistics document, as served by the stats endpoint and written
/// to `stats.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub term_start: NaiveDate,
    pub current_date: NaiveDate,
    pub days_since_start: i64,
    pub total_golf_days: usize,
    pub percentage_golfed: String,
    pub estimated_total_cost: f64,
    pub total_trips: usize,
    pub golf_days_by_location: BTreeMap<String, usize>,
    pub recent_golf_days: Vec<RecentGolfDay>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentGolfDay {
    pub date: NaiveDate,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Citation link, empty when none is known.
    pub source: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub data_version: String,
    pub last_updated: String,
    pub attribution: String,
    pub website: String,
}
