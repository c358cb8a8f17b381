//! End-of-game rules
//!
//! The game ends when a side has no pieces left or a side has no legal move.
//! The final score is a plain piece count, and the side with FEWER pieces
//! wins (suicide rule). Equal counts are a tie.

use crate::board::{Board, Player};

use super::movegen::legal_moves;

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// This side has no pieces left
    NoPieces(Player),
    /// This side has no legal move
    NoMoves(Player),
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// `None` on a tie
    pub winner: Option<Player>,
    pub reason: EndReason,
    /// Piece counts, `[black, white]`
    pub score: [usize; 2],
}

/// Piece count per side, `[black, white]`.
///
/// Every piece counts 1 wherever it stands; pieces on the far row get no bonus.
#[inline]
pub fn calc_score(board: &Board) -> [usize; 2] {
    [
        board.piece_count(Player::Black),
        board.piece_count(Player::White),
    ]
}

/// Winner by piece count: fewer pieces wins, `None` on a tie
pub fn winner(score: [usize; 2]) -> Option<Player> {
    let [black, white] = score;
    match black.cmp(&white) {
        std::cmp::Ordering::Less => Some(Player::Black),
        std::cmp::Ordering::Greater => Some(Player::White),
        std::cmp::Ordering::Equal => None,
    }
}

/// Check if the game is over: a side has no pieces or a side has no legal move
pub fn is_game_over(board: &Board) -> bool {
    end_reason(board).is_some()
}

/// First game-ending condition that holds, checking piece counts before mobility
pub fn end_reason(board: &Board) -> Option<EndReason> {
    if let Some(player) = Player::ALL.into_iter().find(|&p| board.piece_count(p) == 0) {
        return Some(EndReason::NoPieces(player));
    }
    Player::ALL
        .into_iter()
        .find(|&p| legal_moves(board, p).is_empty())
        .map(EndReason::NoMoves)
}

/// Final result if the game is over
pub fn game_outcome(board: &Board) -> Option<GameOutcome> {
    let reason = end_reason(board)?;
    let score = calc_score(board);
    Some(GameOutcome {
        winner: winner(score),
        reason,
        score,
    })
}
