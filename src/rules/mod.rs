//! Game rules for suicide checkers
//!
//! This module implements the rule set:
//! - Forward-only diagonal moves and jumps, with jump chains
//! - Forced capture
//! - End of game and winner (fewer pieces wins)

pub mod movegen;
pub mod outcome;

// Re-exports for convenient access
pub use movegen::{has_jump, jumps_from, legal_moves};
pub use outcome::{
    calc_score, end_reason, game_outcome, is_game_over, winner, EndReason, GameOutcome,
};
