//! Main AI engine wrapping the alpha-beta search
//!
//! The engine is the entry point drivers use to pick a move:
//!
//! 1. **No legal move**: nothing to choose, the result carries no move
//! 2. **Forced**: exactly one legal move, played without searching
//! 3. **Alpha-Beta**: fixed-depth minimax with alpha-beta pruning
//!
//! # Example
//!
//! ```
//! use suicide_checkers::{AIEngine, Board, Player, SearchConfig};
//!
//! // Use smaller depth for faster example
//! let mut engine = AIEngine::with_config(SearchConfig::with_depth(4));
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Player::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Move, Player};
use crate::search::{SearchConfig, SearchResult, Searcher};

/// How the engine arrived at its move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// The side to move had no legal move
    NoMoves,
    /// Only one legal move, search skipped
    Forced,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move choice with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, if any
    pub best_move: Option<Move>,
    /// Search value for the mover (0 when no search ran)
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes searched
    pub nodes: u64,
    /// Deepest ply reached
    pub max_depth: u8,
    pub beta_cutoffs: u64,
    pub alpha_cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn no_moves(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMoves,
            time_ms,
            nodes: 0,
            max_depth: 0,
            beta_cutoffs: 0,
            alpha_cutoffs: 0,
        }
    }

    #[inline]
    fn forced(mv: Move, time_ms: u64) -> Self {
        Self {
            best_move: Some(mv),
            score: 0,
            search_type: SearchType::Forced,
            time_ms,
            nodes: 1,
            max_depth: 0,
            beta_cutoffs: 0,
            alpha_cutoffs: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.value,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
            max_depth: result.max_depth,
            beta_cutoffs: result.beta_cutoffs,
            alpha_cutoffs: result.alpha_cutoffs,
        }
    }
}

/// AI engine for suicide checkers.
///
/// # Configuration
///
/// See [`SearchConfig`]: depth limit, tie-breaking and RNG seed.
///
/// # Example
///
/// ```
/// use suicide_checkers::{AIEngine, Board, Player, SearchConfig};
///
/// let mut engine = AIEngine::with_config(SearchConfig::with_depth(4));
/// let board = Board::new();
/// if let Some(mv) = engine.choose_move(&board, Player::Black) {
///     println!("Play {}", mv);
/// }
/// ```
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an AI engine with default settings (depth 12, first-found ties).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create an AI engine with custom configuration.
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Choose a move for `player`, or `None` if it has no legal move.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn choose_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Choose a move for `player` and report how it was found.
    ///
    /// A single legal move is returned directly; two or more go through the
    /// alpha-beta search.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let mut legal = board.legal_moves(player);

        let result = match legal.len() {
            0 => MoveResult::no_moves(elapsed_ms(start)),
            1 => MoveResult::forced(legal.remove(0), elapsed_ms(start)),
            _ => {
                let search = self.searcher.search(board, player);
                MoveResult::from_alphabeta(search, elapsed_ms(start))
            }
        };

        debug!(
            player = %player,
            search_type = ?result.search_type,
            score = result.score,
            nodes = result.nodes,
            max_depth = result.max_depth,
            beta_cutoffs = result.beta_cutoffs,
            alpha_cutoffs = result.alpha_cutoffs,
            time_ms = result.time_ms,
            "AI move chosen"
        );

        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
