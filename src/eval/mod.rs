//! Evaluation module for suicide checkers positions
//!
//! Two scoring functions feed the search:
//! - a static evaluation for nodes cut off at the depth limit
//! - a terminal value for nodes where the side to move has no legal move

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, terminal_value};
pub use weights::EvalScore;
