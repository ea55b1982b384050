//! Cascading selection logic for the unit planner.
//!
//! [`filter`] holds the stateless option computations; [`session`] owns a
//! selection path over a shared record store and applies level changes.

pub mod filter;
pub mod session;

pub use filter::{
    category_options, compare_values, options_for_level, options_in, unique_learning_goal,
};
pub use session::{PlanningSession, Transition};
