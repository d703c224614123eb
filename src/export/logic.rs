// src/export/logic.rs

use super::fs_utils::ensure_writable;
use super::json_csv::{export_csv, export_json};
use super::model::{EventExport, TripExport};
use super::{ExportFormat, ExportTarget};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::store::StatusData;
use crate::utils::date::parse_range;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export trips, events or the stats report.
    ///
    /// `range` narrows trips (by start date) and events; the stats report
    /// always covers the whole store.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        data: &StatusData,
        format: ExportFormat,
        target: ExportTarget,
        file: &str,
        range: Option<&str>,
        today: NaiveDate,
        recent_limit: usize,
        force: bool,
    ) -> AppResult<()> {
        let bounds = range.map(parse_range).transpose()?;

        if target == ExportTarget::Stats && format == ExportFormat::Csv {
            return Err(AppError::InvalidExportFormat(format!(
                "{} (stats are exported as json only)",
                format.as_str()
            )));
        }

        let path = Path::new(file);
        ensure_writable(path, force)?;

        let in_range = |d: NaiveDate| bounds.is_none_or(|(from, to)| from <= d && d <= to);

        match target {
            ExportTarget::Trips => {
                let stats = Core::build_stats(data);
                let rows: Vec<TripExport> = stats
                    .trips
                    .iter()
                    .filter(|t| in_range(t.start_date))
                    .map(|t| TripExport::from_trip(t, &data.location_costs))
                    .collect();
                Self::write_rows(&rows, format, path)
            }
            ExportTarget::Events => {
                let rows: Vec<EventExport> = data
                    .events
                    .iter()
                    .filter(|(d, _)| in_range(**d))
                    .map(|(d, ev)| EventExport::from_record(*d, ev))
                    .collect();
                Self::write_rows(&rows, format, path)
            }
            // csv was rejected above
            ExportTarget::Stats => {
                let report = Core::build_report(data, today, recent_limit);
                export_json(&report, path)
            }
        }
    }

    fn write_rows<T: serde::Serialize>(
        rows: &[T],
        format: ExportFormat,
        path: &Path,
    ) -> AppResult<()> {
        match format {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
        }
    }
}
