//! Static data file: the event store, the cost table and the term start.

mod loader;
pub mod validate;

pub use loader::{load_data, parse_json, parse_yaml};
pub use validate::{DataIssue, validate};

use crate::models::event::{CostTable, Events};
use chrono::NaiveDate;

/// Validated contents of the data file.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusData {
    pub term_start: NaiveDate,
    pub location_costs: CostTable,
    pub events: Events,
}
