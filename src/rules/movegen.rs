//! Move generation with the forced-capture rule
//!
//! Pieces only ever move forward: Black toward row 0, White toward row 5.
//! A simple move steps one cell diagonally onto an empty square. A jump
//! passes over an adjacent opposing piece onto the empty square behind it,
//! and may continue from the landing square with further forward jumps.
//!
//! As soon as any jump exists for the side to move, simple moves are illegal.

use crate::board::{Board, Diagonal, Move, Player, Pos};

/// Enumerate all legal moves for `player`.
///
/// The result holds either only simple moves or only jumps. Pieces are
/// scanned in the board's cached order, left diagonal before right.
///
/// # Arguments
/// * `board` - Current board state (not modified)
/// * `player` - Side to move
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut has_jumps = false;
    let opponent = player.opponent();

    for &from in board.pieces(player) {
        if from.row == player.last_row() {
            continue;
        }

        for diagonal in Diagonal::BOTH {
            let Some(next) = from.step(player, diagonal, 1) else {
                continue;
            };

            match board.occupant(next) {
                None if !has_jumps => moves.push(Move::simple(from, next)),
                None => {}
                Some(owner) if owner == opponent => {
                    let jumps = jumps_from(board, from, diagonal, player);
                    if jumps.is_empty() {
                        continue;
                    }
                    // First capture found: everything recorded so far was a simple move
                    if !has_jumps {
                        has_jumps = true;
                        moves.clear();
                    }
                    moves.extend(jumps);
                }
                Some(_) => {}
            }
        }
    }

    moves
}

/// Jumps starting at `from` whose first capture lies on `diagonal`.
///
/// Every chain prefix is its own candidate: a single jump that allows a
/// continuation is returned both on its own and extended by each
/// continuation. Longer chains come before the single jump they extend.
///
/// The board is never mutated. Chains only go forward, so a chain can't
/// reach a piece it already captured.
pub fn jumps_from(board: &Board, from: Pos, diagonal: Diagonal, player: Player) -> Vec<Move> {
    let mut jumps = Vec::new();

    let (Some(over), Some(landing)) = (
        from.step(player, diagonal, 1),
        from.step(player, diagonal, 2),
    ) else {
        return jumps;
    };

    if board.occupant(over) != Some(player.opponent()) || !board.is_empty(landing) {
        return jumps;
    }

    let single = Move::jump(from, landing, vec![over]);

    for next in Diagonal::BOTH {
        for rest in jumps_from(board, landing, next, player) {
            jumps.push(Move::chain(&single, &rest));
        }
    }
    jumps.push(single);

    jumps
}

/// Check if `player` has at least one capture available
pub fn has_jump(board: &Board, player: Player) -> bool {
    legal_moves(board, player).iter().any(Move::is_jump)
}
