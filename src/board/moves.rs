//! Move value type

use super::Pos;

/// A single move: either a one-step diagonal slide or a (possibly chained) jump.
///
/// Moves are produced by the move generator and never change afterwards, so
/// the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    start: Pos,
    end: Pos,
    is_jump: bool,
    /// Opposing pieces removed, in chain order
    captured: Vec<Pos>,
}

impl Move {
    /// Non-capturing diagonal step
    pub fn simple(start: Pos, end: Pos) -> Self {
        Self {
            start,
            end,
            is_jump: false,
            captured: Vec::new(),
        }
    }

    /// Capturing move. `captured` must hold at least one position.
    pub fn jump(start: Pos, end: Pos, captured: Vec<Pos>) -> Self {
        debug_assert!(!captured.is_empty());
        Self {
            start,
            end,
            is_jump: true,
            captured,
        }
    }

    /// Prepend a single jump to a continuation that starts where it lands
    pub(crate) fn chain(first: &Move, rest: &Move) -> Self {
        debug_assert!(first.is_jump && rest.is_jump);
        debug_assert_eq!(first.end, rest.start);
        let mut captured = Vec::with_capacity(first.captured.len() + rest.captured.len());
        captured.extend_from_slice(&first.captured);
        captured.extend_from_slice(&rest.captured);
        Self::jump(first.start, rest.end, captured)
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        self.is_jump
    }

    #[inline]
    pub fn captured(&self) -> &[Pos] {
        &self.captured
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}
