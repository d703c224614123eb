use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a logged day.
///
/// `Golf` is a plain golf day, `Arrival`/`Departure` are travel days without
/// golf, and the two combined kinds mark a travel day on which golf was also
/// played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Golf,
    Arrival,
    Departure,
    GolfArrival,
    GolfDeparture,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Golf,
        EventType::Arrival,
        EventType::Departure,
        EventType::GolfArrival,
        EventType::GolfDeparture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Golf => "golf",
            EventType::Arrival => "arrival",
            EventType::Departure => "departure",
            EventType::GolfArrival => "golf_arrival",
            EventType::GolfDeparture => "golf_departure",
        }
    }

    /// True for the kinds that count as a golf day.
    pub fn is_golf(&self) -> bool {
        match self {
            EventType::Golf | EventType::GolfArrival | EventType::GolfDeparture => true,
            EventType::Arrival | EventType::Departure => false,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EventType::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| AppError::InvalidEventType(s.to_string()))
    }
}
