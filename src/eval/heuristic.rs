//! Heuristic evaluation for suicide checkers board positions
//!
//! This module provides both scoring functions used by the minimax search:
//! - `evaluate`: material heuristic at the depth cutoff
//! - `terminal_value`: decisive score when the side to move is stuck

use crate::board::{Board, Player};
use crate::rules::{calc_score, winner};

use super::weights::{terminal_margin, EvalScore};

/// Evaluate the board from the perspective of the given player.
///
/// Material only, with every piece weighted `EvalScore::PIECE`. Losing pieces
/// is the goal of the game, so the score rises as the player's own count
/// drops below the opponent's:
/// - Positive values: `player` has fewer pieces
/// - Negative values: `player` has more pieces
///
/// # Arguments
/// * `board` - The current board state
/// * `player` - The player to evaluate for
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let own = board.piece_count(player) as i32 * EvalScore::PIECE;
    let opponent = board.piece_count(player.opponent()) as i32 * EvalScore::PIECE;
    opponent - own
}

/// Score a finished position for `root_player`.
///
/// `+TERMINAL + margin` when `root_player` is the winner by piece count,
/// `-TERMINAL + margin` otherwise (ties included), where
/// `margin = 2 * own - opponent`.
#[must_use]
pub fn terminal_value(board: &Board, root_player: Player) -> i32 {
    let score = calc_score(board);
    let own = score[root_player.index()];
    let opponent = score[root_player.opponent().index()];
    let margin = terminal_margin(own, opponent);

    if winner(score) == Some(root_player) {
        EvalScore::TERMINAL + margin
    } else {
        -EvalScore::TERMINAL + margin
    }
}
