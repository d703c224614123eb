pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod stats;
pub mod today;
pub mod trips;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{StatusData, load_data};
use crate::utils::date::{parse_date, parse_timezone, today_in};
use chrono::NaiveDate;

/// Load the configured data file.
pub(crate) fn load(cfg: &Config) -> AppResult<StatusData> {
    load_data(&cfg.data_path())
}

/// `--as-of`/`--date` value, or today in the configured time zone.
pub(crate) fn reference_date(explicit: &Option<String>, cfg: &Config) -> AppResult<NaiveDate> {
    match explicit {
        Some(d) => parse_date(d),
        None => Ok(today_in(parse_timezone(&cfg.timezone)?)),
    }
}
