//! CLI commands for trains

pub mod dispatch;
pub mod distance;
pub mod exam;
pub mod shortest;
pub mod trips;
