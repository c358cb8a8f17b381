//! Scoring weights for suicide checkers evaluation

/// Score constants shared by the evaluation functions and the search
pub struct EvalScore;

impl EvalScore {
    /// Weight of a single piece in the static evaluation.
    /// Uniform: a piece on the far row is worth the same as any other.
    pub const PIECE: i32 = 100;

    /// Base value of a finished game, added for a win and subtracted for a loss
    pub const TERMINAL: i32 = 100;

    /// Search window bound. Larger than any reachable evaluation.
    pub const INF: i32 = 999;
}

/// Tie-break margin inside a terminal value: `2 * own - opponent`
#[inline]
pub fn terminal_margin(own: usize, opponent: usize) -> i32 {
    2 * own as i32 - opponent as i32
}
