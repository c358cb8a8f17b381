//! Depth-limited minimax search with alpha-beta pruning
//!
//! This module implements the decision procedure for the AI. The root is a
//! MAX node for the player the AI is choosing for; plies alternate MAX/MIN
//! with the side to move flipped.
//!
//! # Features
//!
//! - Fixed depth limit with static evaluation at the cutoff
//! - Terminal scoring when the side to move has no legal move
//! - Every child owns its own copy of the board, so siblings never share state
//! - Diagnostics (nodes, depth, cutoffs) returned bottom-up with the value
//! - Configurable root tie-breaking (first found or uniform random)
//!
//! # Example
//!
//! ```
//! use suicide_checkers::board::{Board, Player};
//! use suicide_checkers::search::{SearchConfig, Searcher};
//!
//! let mut searcher = Searcher::new(SearchConfig::with_depth(4));
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Player::Black);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::board::{Board, Move, Player};
use crate::eval::{evaluate, terminal_value, EvalScore};

use super::{SearchConfig, TieBreak};

/// One node of the game tree. Owns its board outright.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    pub to_move: Player,
    /// Player the search is choosing a move for
    pub root_player: Player,
    /// Plies below the root
    pub depth: u8,
}

impl SearchNode {
    pub fn root(board: Board, player: Player) -> Self {
        Self {
            board,
            to_move: player,
            root_player: player,
            depth: 0,
        }
    }

    /// Child after `mv`: a fresh board copy with the move applied and the mover flipped
    pub fn child(&self, mv: &Move) -> Self {
        let mut board = self.board.clone();
        board.apply_move(mv, self.to_move);
        Self {
            board,
            to_move: self.to_move.opponent(),
            root_player: self.root_player,
            depth: self.depth + 1,
        }
    }
}

/// Search result containing the value, the chosen move and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Value from the root player's perspective
    pub value: i32,
    /// Move chosen at this node; `None` at leaves
    pub best_move: Option<Move>,
    /// Deepest ply visited in this subtree
    pub max_depth: u8,
    /// Nodes in this subtree, this node included
    pub nodes: u64,
    /// Cutoffs at MAX nodes (value >= beta)
    pub beta_cutoffs: u64,
    /// Cutoffs at MIN nodes (value <= alpha)
    pub alpha_cutoffs: u64,
}

impl SearchResult {
    fn new(value: i32, depth: u8) -> Self {
        Self {
            value,
            best_move: None,
            max_depth: depth,
            nodes: 1,
            beta_cutoffs: 0,
            alpha_cutoffs: 0,
        }
    }

    /// Fold a child's diagnostics into this node
    fn absorb(&mut self, child: &SearchResult) {
        self.max_depth = self.max_depth.max(child.max_depth);
        self.nodes += child.nodes;
        self.beta_cutoffs += child.beta_cutoffs;
        self.alpha_cutoffs += child.alpha_cutoffs;
    }
}

/// A node is either scored on the spot or expanded into its moves
enum Expansion {
    Leaf(i32),
    Moves(Vec<Move>),
}

/// Alpha-beta searcher.
///
/// Holds only configuration and the tie-break RNG; all per-node state lives
/// in `SearchNode` and `SearchResult`.
pub struct Searcher {
    config: SearchConfig,
    rng: StdRng,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for the best move for `player`.
    ///
    /// The caller's board is copied, never modified. `best_move` is `None`
    /// only if the root itself is a leaf (no legal move or depth limit 0).
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        let root = SearchNode::root(board.clone(), player);
        match self.config.tie_break {
            TieBreak::FirstFound => self.max_value(&root, -EvalScore::INF, EvalScore::INF),
            TieBreak::Random => self.search_root_random(&root),
        }
    }

    /// Terminal tests in order: depth cutoff, then no legal move
    fn expand(&self, node: &SearchNode) -> Expansion {
        if node.depth >= self.config.depth_limit {
            return Expansion::Leaf(evaluate(&node.board, node.root_player));
        }
        let moves = node.board.legal_moves(node.to_move);
        if moves.is_empty() {
            return Expansion::Leaf(terminal_value(&node.board, node.root_player));
        }
        Expansion::Moves(moves)
    }

    fn max_value(&self, node: &SearchNode, mut alpha: i32, beta: i32) -> SearchResult {
        let mut result = SearchResult::new(-EvalScore::INF, node.depth);
        let actions = match self.expand(node) {
            Expansion::Leaf(value) => {
                result.value = value;
                return result;
            }
            Expansion::Moves(moves) => moves,
        };

        for action in actions {
            let child = node.child(&action);
            let child_result = self.min_value(&child, alpha, beta);
            result.absorb(&child_result);

            if child_result.value > result.value {
                result.value = child_result.value;
                result.best_move = Some(action);
            }
            if result.value >= beta {
                result.beta_cutoffs += 1;
                return result;
            }
            alpha = alpha.max(result.value);
        }

        result
    }

    fn min_value(&self, node: &SearchNode, alpha: i32, mut beta: i32) -> SearchResult {
        let mut result = SearchResult::new(EvalScore::INF, node.depth);
        let actions = match self.expand(node) {
            Expansion::Leaf(value) => {
                result.value = value;
                return result;
            }
            Expansion::Moves(moves) => moves,
        };

        for action in actions {
            let child = node.child(&action);
            let child_result = self.max_value(&child, alpha, beta);
            result.absorb(&child_result);

            if child_result.value < result.value {
                result.value = child_result.value;
                result.best_move = Some(action);
            }
            if result.value <= alpha {
                result.alpha_cutoffs += 1;
                return result;
            }
            beta = beta.min(result.value);
        }

        result
    }

    /// Root MAX node that collects every move tied for the best value.
    ///
    /// Alpha trails the best value by one, so a child that comes back equal
    /// to the best was searched inside its window and its value is exact.
    fn search_root_random(&mut self, node: &SearchNode) -> SearchResult {
        let mut result = SearchResult::new(-EvalScore::INF, node.depth);
        let actions = match self.expand(node) {
            Expansion::Leaf(value) => {
                result.value = value;
                return result;
            }
            Expansion::Moves(moves) => moves,
        };

        let mut alpha = -EvalScore::INF;
        let mut ties: Vec<Move> = Vec::new();

        for action in actions {
            let child = node.child(&action);
            let child_result = self.min_value(&child, alpha, EvalScore::INF);
            result.absorb(&child_result);
            trace!(
                start = %action.start(),
                end = %action.end(),
                value = child_result.value,
                "root move searched"
            );

            if child_result.value > result.value {
                result.value = child_result.value;
                ties.clear();
                ties.push(action);
            } else if child_result.value == result.value {
                ties.push(action);
            }
            alpha = alpha.max(result.value - 1);
        }

        if !ties.is_empty() {
            let idx = self.rng.random_range(0..ties.len());
            result.best_move = Some(ties.swap_remove(idx));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    /// Plain minimax with the same leaf rules, no pruning
    fn minimax(board: &Board, to_move: Player, root: Player, depth: u8, limit: u8) -> i32 {
        if depth >= limit {
            return evaluate(board, root);
        }
        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            return terminal_value(board, root);
        }
        let values = moves.iter().map(|mv| {
            let mut next = board.clone();
            next.apply_move(mv, to_move);
            minimax(&next, to_move.opponent(), root, depth + 1, limit)
        });
        if to_move == root {
            values.max().unwrap()
        } else {
            values.min().unwrap()
        }
    }

    fn count_nodes(board: &Board, to_move: Player, depth: u8, limit: u8) -> u64 {
        if depth >= limit {
            return 1;
        }
        let moves = board.legal_moves(to_move);
        1 + moves
            .iter()
            .map(|mv| {
                let mut next = board.clone();
                next.apply_move(mv, to_move);
                count_nodes(&next, to_move.opponent(), depth + 1, limit)
            })
            .sum::<u64>()
    }

    /// Midgame position with captures available for both sides
    fn midgame_board() -> Board {
        let mut board = Board::empty();
        for (r, c) in [(4, 0), (4, 2), (3, 3), (5, 5)] {
            board.place_piece(Pos::new(r, c), Player::Black);
        }
        for (r, c) in [(0, 0), (1, 1), (2, 2), (1, 5)] {
            board.place_piece(Pos::new(r, c), Player::White);
        }
        board
    }

    /// Black at (4,1), White at (2,1). Stepping to (3,2) gets Black's last
    /// piece captured, which wins the game for Black.
    fn sacrifice_board() -> Board {
        let mut board = Board::empty();
        board.place_piece(Pos::new(4, 1), Player::Black);
        board.place_piece(Pos::new(2, 1), Player::White);
        board
    }

    #[test]
    fn test_matches_plain_minimax() {
        let cases = [
            (Board::new(), Player::Black, 4),
            (Board::new(), Player::White, 5),
            (midgame_board(), Player::Black, 5),
            (midgame_board(), Player::White, 4),
            (sacrifice_board(), Player::Black, 8),
        ];

        for (board, player, depth) in cases {
            let mut searcher = Searcher::new(SearchConfig::with_depth(depth));
            let result = searcher.search(&board, player);
            let expected = minimax(&board, player, player, 0, depth);
            assert_eq!(result.value, expected, "{} at depth {}", player, depth);
            assert!(result.best_move.is_some());
        }
    }

    #[test]
    fn test_best_move_achieves_value() {
        // The root's chosen child must carry the root value
        let board = midgame_board();
        let depth = 5;
        let mut searcher = Searcher::new(SearchConfig::with_depth(depth));
        let result = searcher.search(&board, Player::Black);

        let mv = result.best_move.expect("move");
        let mut next = board.clone();
        next.apply_move(&mv, Player::Black);
        let child_value = minimax(&next, Player::White, Player::Black, 1, depth);
        assert_eq!(child_value, result.value);
    }

    #[test]
    fn test_finds_winning_sacrifice() {
        let mut searcher = Searcher::new(SearchConfig::with_depth(6));
        let result = searcher.search(&sacrifice_board(), Player::Black);

        let mv = result.best_move.expect("move");
        assert_eq!(mv.end(), Pos::new(3, 2));
        // Black ends with 0 pieces against 1: 100 + (0 - 1)
        assert_eq!(result.value, 99);
    }

    #[test]
    fn test_pruning_reduces_nodes() {
        let board = Board::new();
        let depth = 6;
        let mut searcher = Searcher::new(SearchConfig::with_depth(depth));
        let result = searcher.search(&board, Player::Black);

        let full = count_nodes(&board, Player::Black, 0, depth);
        assert!(result.nodes < full, "{} >= {}", result.nodes, full);
        assert!(result.beta_cutoffs + result.alpha_cutoffs > 0);
        assert_eq!(result.max_depth, depth);
    }

    #[test]
    fn test_depth_zero_is_leaf() {
        let mut searcher = Searcher::new(SearchConfig::with_depth(0));
        let result = searcher.search(&Board::new(), Player::Black);

        assert_eq!(result.value, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.max_depth, 0);
    }

    #[test]
    fn test_root_without_moves_is_terminal() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(0, 2), Player::Black);
        board.place_piece(Pos::new(5, 1), Player::White);
        board.place_piece(Pos::new(5, 3), Player::White);

        let mut searcher = Searcher::new(SearchConfig::default());
        let result = searcher.search(&board, Player::Black);

        // Black has 1 piece vs 2: a win, 100 + (2 - 2)
        assert_eq!(result.value, 100);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = midgame_board();
        let config = SearchConfig::with_depth(6);

        let first = Searcher::new(config).search(&board, Player::White);
        let second = Searcher::new(config).search(&board, Player::White);
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_tie_break_keeps_value() {
        let board = Board::new();
        let depth = 5;
        let baseline = Searcher::new(SearchConfig::with_depth(depth)).search(&board, Player::White);
        let legal = board.legal_moves(Player::White);

        for seed in 0..8 {
            let config = SearchConfig::with_depth(depth).tie_break(TieBreak::Random).seed(seed);
            let result = Searcher::new(config).search(&board, Player::White);
            assert_eq!(result.value, baseline.value);

            // The picked move really is worth the best value
            let mv = result.best_move.expect("move");
            assert!(legal.contains(&mv));
            let mut next = board.clone();
            next.apply_move(&mv, Player::White);
            assert_eq!(
                minimax(&next, Player::Black, Player::White, 1, depth),
                baseline.value
            );
        }
    }

    #[test]
    fn test_random_tie_break_is_reproducible_with_seed() {
        let board = Board::new();
        let config = SearchConfig::with_depth(4).tie_break(TieBreak::Random).seed(42);

        let first = Searcher::new(config).search(&board, Player::Black);
        let second = Searcher::new(config).search(&board, Player::Black);
        assert_eq!(first.best_move, second.best_move);
    }

    #[test]
    fn test_search_does_not_touch_board() {
        let board = midgame_board();
        let before = board.clone();
        let _ = Searcher::new(SearchConfig::with_depth(5)).search(&board, Player::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_child_node_is_independent() {
        let root = SearchNode::root(Board::new(), Player::Black);
        let moves = root.board.legal_moves(Player::Black);
        let a = root.child(&moves[0]);
        let b = root.child(&moves[1]);

        assert_eq!(root.board, Board::new());
        assert_ne!(a.board, b.board);
        assert_eq!(a.to_move, Player::White);
        assert_eq!(a.root_player, Player::Black);
        assert_eq!(a.depth, 1);
    }
}
