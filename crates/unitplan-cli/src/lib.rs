//! CLI library components for the unit planner.

pub mod logging;
pub mod planner;
