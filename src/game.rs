//! Driver-independent game state
//!
//! `Game` owns the board, the side to move and the move history. The console
//! and GUI drivers both play through it, so legality checks, turn order and
//! game-end detection live in one place.

use thiserror::Error;
use tracing::{info, warn};

use crate::board::{Board, Move, Player};
use crate::rules::{game_outcome, GameOutcome};

/// Errors a driver can recover from
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is over")]
    GameOver,
    #[error("illegal move {mv} for {player}")]
    IllegalMove { mv: Move, player: Player },
    #[error("not your turn")]
    NotYourTurn,
    #[error("AI is thinking")]
    AiThinking,
    #[error("nothing to undo")]
    NothingToUndo,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    /// Position the history is replayed from
    initial: Board,
    first_player: Player,
    board: Board,
    turn: Player,
    history: Vec<(Move, Player)>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// New game from the default layout, Black to move
    pub fn new() -> Self {
        Self::from_position(Board::new(), Player::Black)
    }

    /// Game starting from an arbitrary position
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let outcome = game_outcome(&board);
        Self {
            initial: board.clone(),
            first_player: to_move,
            board,
            turn: to_move,
            history: Vec::new(),
            outcome,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn history(&self) -> &[(Move, Player)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|(mv, _)| mv)
    }

    /// Final result, once the game has ended
    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal moves for the side to move (empty once the game is over)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_moves(self.turn)
    }

    /// Play `mv` for the side to move.
    ///
    /// The move must be one the generator produces for this position; a move
    /// with the right squares but a different capture list is rejected.
    pub fn play(&mut self, mv: &Move) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.turn;
        if !self.board.legal_moves(player).contains(mv) {
            warn!(%player, %mv, "rejected illegal move");
            return Err(GameError::IllegalMove {
                mv: mv.clone(),
                player,
            });
        }

        self.board.apply_move(mv, player);
        self.history.push((mv.clone(), player));
        self.turn = player.opponent();
        self.outcome = game_outcome(&self.board);
        info!(%player, %mv, captured = mv.captured().len(), "move played");

        if let Some(outcome) = self.outcome {
            info!(winner = ?outcome.winner, reason = ?outcome.reason, "game over");
        }
        Ok(())
    }

    /// Take back the last move by replaying the history from the start
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let (undone, _) = self.history.pop().ok_or(GameError::NothingToUndo)?;

        self.board = self.initial.clone();
        self.turn = self.first_player;
        for (mv, player) in &self.history {
            self.board.apply_move(mv, *player);
            self.turn = player.opponent();
        }
        self.outcome = game_outcome(&self.board);
        Ok(undone)
    }

    /// Start over from the initial position
    pub fn reset(&mut self) {
        *self = Self::from_position(self.initial.clone(), self.first_player);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::EndReason;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Player::Black);
        assert!(!game.is_over());
        assert!(game.history().is_empty());
        assert_eq!(game.legal_moves().len(), 5);
    }

    #[test]
    fn test_play_alternates_turns() {
        let mut game = Game::new();
        let mv = game.legal_moves()[0].clone();
        game.play(&mv).unwrap();

        assert_eq!(game.turn(), Player::White);
        assert_eq!(game.last_move(), Some(&mv));
        assert_eq!(game.board().occupant(mv.end()), Some(Player::Black));
        assert!(game.board().is_empty(mv.start()));
    }

    #[test]
    fn test_play_rejects_illegal_move() {
        let mut game = Game::new();
        // White's piece, but Black to move
        let mv = Move::simple(Pos::new(1, 1), Pos::new(2, 2));
        let err = game.play(&mv).unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove {
                mv,
                player: Player::Black
            }
        );
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Player::Black);
    }

    #[test]
    fn test_play_enforces_capture() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(2, 2), Player::White);
        board.place_piece(Pos::new(3, 3), Player::Black);
        board.place_piece(Pos::new(0, 4), Player::White);
        board.place_piece(Pos::new(5, 1), Player::Black);
        let mut game = Game::from_position(board, Player::White);

        let quiet = Move::simple(Pos::new(0, 4), Pos::new(1, 5));
        assert!(matches!(
            game.play(&quiet),
            Err(GameError::IllegalMove { .. })
        ));

        let jump = Move::jump(Pos::new(2, 2), Pos::new(4, 4), vec![Pos::new(3, 3)]);
        game.play(&jump).unwrap();
        assert_eq!(game.board().piece_count(Player::Black), 1);
    }

    #[test]
    fn test_game_ends_when_pieces_run_out() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(2, 2), Player::White);
        board.place_piece(Pos::new(3, 3), Player::Black);
        let mut game = Game::from_position(board, Player::White);

        let jump = game.legal_moves().remove(0);
        game.play(&jump).unwrap();

        let outcome = game.outcome().expect("game over");
        assert_eq!(outcome.reason, EndReason::NoPieces(Player::Black));
        assert_eq!(outcome.winner, Some(Player::Black));
        assert_eq!(outcome.score, [0, 1]);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.play(&jump), Err(GameError::GameOver));
    }

    #[test]
    fn test_undo_restores_position() {
        let mut game = Game::new();
        let first = game.legal_moves()[2].clone();
        game.play(&first).unwrap();
        let after_first = game.board().clone();
        let second = game.legal_moves()[0].clone();
        game.play(&second).unwrap();

        assert_eq!(game.undo(), Ok(second));
        assert_eq!(game.board(), &after_first);
        assert_eq!(game.turn(), Player::White);

        assert_eq!(game.undo(), Ok(first));
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Player::Black);
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(2, 2), Player::White);
        board.place_piece(Pos::new(3, 3), Player::Black);
        let mut game = Game::from_position(board.clone(), Player::White);

        let jump = game.legal_moves().remove(0);
        game.play(&jump).unwrap();
        assert!(game.is_over());

        game.undo().unwrap();
        assert!(!game.is_over());
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        let mv = game.legal_moves()[0].clone();
        game.play(&mv).unwrap();
        game.reset();

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Player::Black);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_error_messages() {
        let mv = Move::simple(Pos::new(4, 0), Pos::new(3, 1));
        let err = GameError::IllegalMove {
            mv,
            player: Player::Black,
        };
        assert_eq!(err.to_string(), "illegal move (4, 0) (3, 1) for Black");
        assert_eq!(GameError::NothingToUndo.to_string(), "nothing to undo");
    }
}
