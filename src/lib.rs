//! Suicide checkers with an alpha-beta AI
//!
//! A 6x6 checkers variant where the goal is to get rid of your own pieces:
//! - Pieces move one square diagonally forward, never backward
//! - Jumps over an adjacent opposing piece are mandatory and may chain
//! - The game ends when a side has no pieces or no legal move
//! - The side with FEWER pieces left wins
//!
//! # Architecture
//!
//! - [`board`]: Board grid, cached piece positions, moves
//! - [`rules`]: Move generation (forced capture, jump chains) and game end
//! - [`eval`]: Static evaluation and terminal scoring
//! - [`search`]: Depth-limited alpha-beta minimax with diagnostics
//! - [`engine`]: Move selection entry point used by the drivers
//! - [`game`], [`console`], [`ui`]: Game state plus text and GUI drivers
//!
//! # Quick Start
//!
//! ```
//! use suicide_checkers::{AIEngine, Board, Player, SearchConfig};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(SearchConfig::with_depth(4));
//!
//! // Black moves first
//! if let Some(mv) = engine.choose_move(&board, Player::Black) {
//!     board.apply_move(&mv, Player::Black);
//!     println!("AI plays {}", mv);
//! }
//! ```

pub mod board;
pub mod console;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Player, Pos, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use game::{Game, GameError};
pub use search::{SearchConfig, TieBreak};
