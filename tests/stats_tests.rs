mod common;
use common::{date, events};
use golfstats::core::calculator::breakdown::{
    golf_days_by_location, golf_event_on, recent_golf_days,
};
use golfstats::core::calculator::cost::{cost_for, trip_cost};
use golfstats::{CostTable, EventType, Events, Trip, compute_stats};

fn costs(entries: &[(&str, f64)]) -> CostTable {
    entries.iter().map(|(l, c)| (l.to_string(), *c)).collect()
}

#[test]
fn test_single_golf_day() {
    let ev = events(&[("2025-03-01", "A", EventType::Golf)]);
    let stats = compute_stats(&ev, &costs(&[("A", 100.0)]));

    assert_eq!(stats.days_golfed, 1);
    assert_eq!(stats.total_cost, 100.0);
    assert_eq!(
        stats.trips,
        vec![Trip {
            location: "A".into(),
            start_date: date("2025-03-01"),
            end_date: date("2025-03-01"),
            days: 1,
        }]
    );
}

#[test]
fn test_consecutive_days_form_one_trip_charged_per_day() {
    let ev = events(&[
        ("2025-03-01", "A", EventType::Golf),
        ("2025-03-02", "A", EventType::Golf),
    ]);
    let stats = compute_stats(&ev, &costs(&[("A", 100.0)]));

    assert_eq!(stats.days_golfed, 2);
    assert_eq!(stats.trips.len(), 1);
    assert_eq!(stats.trips[0].start_date, date("2025-03-01"));
    assert_eq!(stats.trips[0].end_date, date("2025-03-02"));
    assert_eq!(stats.trips[0].days, 2);
    assert_eq!(stats.total_cost, 200.0);
}

#[test]
fn test_combined_kind_counts_once() {
    let ev = events(&[("2025-03-01", "A", EventType::GolfArrival)]);
    let stats = compute_stats(&ev, &costs(&[("A", 100.0)]));

    assert_eq!(stats.days_golfed, 1);
    assert_eq!(stats.trips.len(), 1);
    assert_eq!(stats.trips[0].days, 1);
    assert_eq!(stats.total_cost, 100.0);
}

#[test]
fn test_empty_store() {
    let stats = compute_stats(&Events::new(), &costs(&[("A", 100.0)]));

    assert_eq!(stats.days_golfed, 0);
    assert_eq!(stats.total_cost, 0.0);
    assert!(stats.trips.is_empty());
}

#[test]
fn test_unknown_location_costs_nothing_but_counts() {
    let ev = events(&[
        ("2025-03-01", "A", EventType::Golf),
        ("2025-03-05", "Nowhere", EventType::Golf),
    ]);
    let stats = compute_stats(&ev, &costs(&[("A", 100.0)]));

    assert_eq!(stats.days_golfed, 2);
    assert_eq!(stats.total_cost, 100.0);
    assert_eq!(stats.trips.len(), 2);
    assert_eq!(stats.trips[1].location, "Nowhere");
}

#[test]
fn test_gap_of_two_days_splits_trip() {
    let ev = events(&[
        ("2025-03-01", "A", EventType::Golf),
        ("2025-03-03", "A", EventType::Golf),
    ]);
    let stats = compute_stats(&ev, &CostTable::new());

    assert_eq!(stats.trips.len(), 2);
    assert!(stats.trips.iter().all(|t| t.days == 1));
}

#[test]
fn test_location_change_splits_trip() {
    let ev = events(&[
        ("2025-03-01", "A", EventType::Golf),
        ("2025-03-02", "B", EventType::Golf),
    ]);
    let stats = compute_stats(&ev, &CostTable::new());

    assert_eq!(stats.trips.len(), 2);
    assert_eq!(stats.trips[0].location, "A");
    assert_eq!(stats.trips[1].location, "B");
}

#[test]
fn test_trip_crosses_month_and_year_boundaries() {
    let ev = events(&[
        ("2024-12-31", "A", EventType::GolfArrival),
        ("2025-01-01", "A", EventType::Golf),
        ("2025-01-31", "B", EventType::Golf),
        ("2025-02-01", "B", EventType::GolfDeparture),
    ]);
    let stats = compute_stats(&ev, &CostTable::new());

    assert_eq!(stats.trips.len(), 2);
    assert_eq!(stats.trips[0].days, 2);
    assert_eq!(stats.trips[1].start_date, date("2025-01-31"));
    assert_eq!(stats.trips[1].end_date, date("2025-02-01"));
}

#[test]
fn test_travel_days_are_ignored_and_do_not_bridge_trips() {
    // golf, arrival, golf at the same place: the arrival day is not a golf
    // day, so the two golf days are two days apart and form separate trips
    let ev = events(&[
        ("2025-03-01", "A", EventType::Golf),
        ("2025-03-02", "A", EventType::Arrival),
        ("2025-03-03", "A", EventType::Golf),
        ("2025-03-04", "A", EventType::Departure),
    ]);
    let stats = compute_stats(&ev, &costs(&[("A", 5.0)]));

    assert_eq!(stats.days_golfed, 2);
    assert_eq!(stats.trips.len(), 2);
    assert_eq!(stats.total_cost, 10.0);
}

#[test]
fn test_count_coverage_and_idempotence_on_mixed_store() {
    let ev = events(&[
        ("2025-01-25", "Florida", EventType::Arrival),
        ("2025-01-26", "Doral, FL", EventType::Golf),
        ("2025-01-27", "Doral, FL", EventType::GolfDeparture),
        ("2025-02-01", "Mar-a-Lago", EventType::Golf),
        ("2025-02-02", "Mar-a-Lago", EventType::GolfDeparture),
        ("2025-02-08", "West Palm Beach, FL", EventType::Golf),
        ("2025-02-09", "Mar-a-Lago", EventType::GolfDeparture),
        ("2025-02-10", "Mar-a-Lago", EventType::Departure),
    ]);
    let table = costs(&[("Doral, FL", 3.0), ("Mar-a-Lago", 7.0)]);

    let first = compute_stats(&ev, &table);
    let second = compute_stats(&ev, &table);
    assert_eq!(first, second);

    let golf_count = ev.values().filter(|e| e.kind.is_golf()).count();
    assert_eq!(first.days_golfed, golf_count);
    assert_eq!(first.days_golfed, 6);

    // every golf date lies in exactly one trip
    for (d, _) in ev.iter().filter(|(_, e)| e.kind.is_golf()) {
        assert_eq!(first.trips.iter().filter(|t| t.contains(*d)).count(), 1);
    }

    // trips ordered by start date, day counts add up
    assert!(first.trips.windows(2).all(|w| w[0].start_date < w[1].start_date));
    let trip_days: u32 = first.trips.iter().map(|t| t.days).sum();
    assert_eq!(trip_days as usize, first.days_golfed);

    assert_eq!(first.trips.len(), 4);
    assert_eq!(first.total_cost, 2.0 * 3.0 + 3.0 * 7.0);
    assert!(first.total_cost >= 0.0);
}

#[test]
fn test_is_golf_covers_exactly_three_kinds() {
    let golf: Vec<EventType> = EventType::ALL.into_iter().filter(|k| k.is_golf()).collect();
    assert_eq!(
        golf,
        vec![EventType::Golf, EventType::GolfArrival, EventType::GolfDeparture]
    );
    assert!(!EventType::Arrival.is_golf());
    assert!(!EventType::Departure.is_golf());
}

#[test]
fn test_event_type_parsing() {
    assert_eq!("golf_departure".parse::<EventType>().unwrap(), EventType::GolfDeparture);
    assert_eq!(" Arrival ".parse::<EventType>().unwrap(), EventType::Arrival);
    assert!("golfing".parse::<EventType>().is_err());
}

#[test]
fn test_cost_helpers() {
    let table = costs(&[("A", 250.0)]);
    assert_eq!(cost_for("A", &table), 250.0);
    assert_eq!(cost_for("B", &table), 0.0);

    let mut trip = Trip::start(date("2025-05-01"), "A");
    trip.extend_to(date("2025-05-02"));
    trip.extend_to(date("2025-05-03"));
    assert_eq!(trip_cost(&trip, &table), 750.0);
}

#[test]
fn test_breakdowns() {
    let ev = events(&[
        ("2025-04-01", "A", EventType::Golf),
        ("2025-04-02", "A", EventType::GolfDeparture),
        ("2025-04-05", "B", EventType::Arrival),
        ("2025-04-06", "B", EventType::Golf),
    ]);

    let by_loc = golf_days_by_location(&ev);
    assert_eq!(by_loc.get("A"), Some(&2));
    assert_eq!(by_loc.get("B"), Some(&1));

    let recent = recent_golf_days(&ev, 2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, date("2025-04-06"));
    assert_eq!(recent[1].date, date("2025-04-02"));
    assert_eq!(recent[1].kind, EventType::GolfDeparture);

    assert!(golf_event_on(&ev, date("2025-04-06")).is_some());
    assert!(golf_event_on(&ev, date("2025-04-05")).is_none());
    assert!(golf_event_on(&ev, date("2025-04-07")).is_none());
}
