use super::StatusData;
use crate::errors::{AppError, AppResult};
use crate::models::event::{CostTable, EventRecord, Events};
use crate::utils::date::parse_date;
use crate::utils::path::extension_of;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk shape, before date and cost validation.
#[derive(Debug, Deserialize)]
struct RawStatusData {
    term_start: String,
    #[serde(default)]
    location_costs: BTreeMap<String, f64>,
    #[serde(default)]
    events: BTreeMap<String, EventRecord>,
}

/// Load and validate a data file; the format follows the extension.
pub fn load_data(path: &Path) -> AppResult<StatusData> {
    if !path.exists() {
        return Err(AppError::DataNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;

    match extension_of(path).as_str() {
        "yaml" | "yml" => parse_yaml(&content),
        "json" => parse_json(&content),
        other => Err(AppError::UnsupportedDataFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            format!(".{other}")
        })),
    }
}

pub fn parse_yaml(content: &str) -> AppResult<StatusData> {
    let raw: RawStatusData = serde_yaml::from_str(content)?;
    raw.into_validated()
}

pub fn parse_json(content: &str) -> AppResult<StatusData> {
    let raw: RawStatusData = serde_json::from_str(content)?;
    raw.into_validated()
}

impl RawStatusData {
    fn into_validated(self) -> AppResult<StatusData> {
        let term_start = parse_date(&self.term_start)?;

        let location_costs = self
            .location_costs
            .into_iter()
            .map(|(location, cost)| {
                if cost.is_finite() && cost >= 0.0 {
                    Ok((location, cost))
                } else {
                    Err(AppError::InvalidCost(location, cost))
                }
            })
            .collect::<AppResult<CostTable>>()?;

        let events = self
            .events
            .into_iter()
            .map(|(date, record)| -> AppResult<_> {
                Ok((parse_date(&date)?, record))
            })
            .collect::<AppResult<Events>>()?;

        Ok(StatusData {
            term_start,
            location_costs,
            events,
        })
    }
}
