//! Search module for the suicide checkers AI
//!
//! Contains:
//! - Search configuration (depth limit, tie-breaking)
//! - Fixed-depth alpha-beta minimax over owned board copies

pub mod alphabeta;
pub mod config;

pub use alphabeta::{SearchNode, SearchResult, Searcher};
pub use config::{SearchConfig, TieBreak, DEPTH_LIMIT};
