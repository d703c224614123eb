use super::trip::Trip;
use serde::Serialize;

/// Output of the aggregation engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GolfStats {
    pub days_golfed: usize,
    pub trips: Vec<Trip>,
    pub total_cost: f64,
}
