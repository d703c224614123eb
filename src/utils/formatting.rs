//! Formatting utilities used for CLI and export outputs.

use super::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::models::event_type::EventType;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Whole-dollar amount with thousands separators, e.g. `$3,400,000`.
pub fn format_cost(amount: f64) -> String {
    let rounded = amount.round().max(0.0) as u64;
    let digits = rounded.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    format!("${out}")
}

/// Share of `part` over `whole` as a percentage with one decimal, ties
/// rounded up. Zero `whole` yields `"0.0"`.
pub fn format_percentage(part: usize, whole: i64) -> String {
    if whole <= 0 {
        return "0.0".to_string();
    }
    // tenths of a percent in integer arithmetic, so 25.25 becomes 25.3
    let part = part as i128;
    let whole = i128::from(whole);
    let tenths = (2000 * part + whole) / (2 * whole);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Human label and ANSI colour for an event kind.
pub fn describe_kind(kind: EventType) -> (&'static str, &'static str) {
    match kind {
        EventType::Golf => ("Golf", GREEN),
        EventType::GolfArrival => ("Arrival + golf", GREEN),
        EventType::GolfDeparture => ("Golf + departure", GREEN),
        EventType::Arrival => ("Arrival", CYAN),
        EventType::Departure => ("Departure", YELLOW),
    }
}

pub fn colorize_kind(kind: EventType) -> String {
    let (label, color) = describe_kind(kind);
    format!("{color}{label}{RESET}")
}

pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => format!("{GREY}--{RESET}"),
    }
}
