pub mod breakdown;
pub mod cost;
pub mod stats;
pub mod trips;

pub use stats::compute_stats;
