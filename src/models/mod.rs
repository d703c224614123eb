pub mod event;
pub mod event_type;
pub mod location;
pub mod report;
pub mod stats;
pub mod trip;
