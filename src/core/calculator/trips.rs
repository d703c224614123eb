//! Groups golf days into trips.

use crate::models::event::EventRecord;
use crate::models::trip::Trip;
use crate::utils::date::days_between_dates;
use chrono::NaiveDate;

/// Largest date difference that still continues a trip.
pub const MAX_TRIP_GAP_DAYS: i64 = 1;

/// Walk golf days in ascending date order and split them into trips.
///
/// A new trip starts when the location changes or when the date is more
/// than [`MAX_TRIP_GAP_DAYS`] after the last day of the open trip.
pub fn build_trips<'a, I>(golf_days: I) -> Vec<Trip>
where
    I: IntoIterator<Item = (&'a NaiveDate, &'a EventRecord)>,
{
    let mut trips = Vec::new();
    let mut current: Option<Trip> = None;

    for (date, ev) in golf_days {
        let continues = current.as_ref().is_some_and(|trip| {
            trip.location == ev.location
                && days_between_dates(trip.end_date, *date) <= MAX_TRIP_GAP_DAYS
        });

        if continues {
            if let Some(trip) = current.as_mut() {
                trip.extend_to(*date);
            }
        } else {
            trips.extend(current.take());
            current = Some(Trip::start(*date, &ev.location));
        }
    }

    trips.extend(current);
    trips
}
