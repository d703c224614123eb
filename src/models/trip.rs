use chrono::NaiveDate;
use serde::Serialize;

/// A run of date-adjacent golf days at a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
}

impl Trip {
    pub fn start(date: NaiveDate, location: &str) -> Self {
        Self {
            location: location.to_string(),
            start_date: date,
            end_date: date,
            days: 1,
        }
    }

    pub fn extend_to(&mut self, date: NaiveDate) {
        self.end_date = date;
        self.days += 1;
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
