//! Game state management for the suicide checkers GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::board::{Move, Player, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::game::{Game, GameError};
use crate::search::SearchConfig;

/// Depth cap for hints so they come back quickly
const HINT_DEPTH: u8 = 6;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human: Player::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main GUI state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    /// Piece picked as the start of the next move
    pub selected: Option<Pos>,
    /// Squares emptied by the last capture
    pub last_captures: Vec<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
    config: SearchConfig,
}

impl GameState {
    pub fn new(mode: GameMode, config: SearchConfig) -> Self {
        Self {
            game: Game::new(),
            mode,
            selected: None,
            last_captures: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            config,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.config);
    }

    /// Side to move
    pub fn current_turn(&self) -> Player {
        self.game.turn()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.game.turn() == human,
            GameMode::PvP => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    fn check_human_input(&self) -> Result<(), GameError> {
        if self.game.is_over() {
            return Err(GameError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// Legal moves starting from the selected piece
    pub fn selected_moves(&self) -> Vec<Move> {
        match self.selected {
            Some(from) => self
                .game
                .legal_moves()
                .into_iter()
                .filter(|mv| mv.start() == from)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Handle a click on a board square.
    ///
    /// Clicking a piece that can move selects it. Clicking a destination of
    /// the selected piece plays the move, unless several capture chains end
    /// there; those have to be picked from the move list.
    pub fn click(&mut self, pos: Pos) -> Result<(), GameError> {
        self.check_human_input()?;
        let legal = self.game.legal_moves();

        if legal.iter().any(|mv| mv.start() == pos) {
            self.selected = Some(pos);
            return Ok(());
        }

        let Some(from) = self.selected else {
            return Ok(());
        };
        let candidates: Vec<&Move> = legal
            .iter()
            .filter(|mv| mv.start() == from && mv.end() == pos)
            .collect();
        match candidates.as_slice() {
            [] => {
                self.selected = None;
                Ok(())
            }
            [mv] => {
                let mv = (*mv).clone();
                self.try_play(&mv)
            }
            _ => {
                self.message = Some("Several captures end there, pick one from the list".to_string());
                Ok(())
            }
        }
    }

    /// Play a move for the human
    pub fn try_play(&mut self, mv: &Move) -> Result<(), GameError> {
        self.check_human_input()?;
        self.execute_move(mv)
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: &Move) -> Result<(), GameError> {
        self.game.play(mv)?;

        self.last_captures = mv.captured().to_vec();
        self.selected = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
        Ok(())
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game.is_over() {
            return;
        }

        let board = self.game.board().clone();
        let player = self.game.turn();
        let config = self.config;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board, player);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);

            match &move_result.best_move {
                Some(mv) => {
                    if let Err(err) = self.execute_move(mv) {
                        warn!(%err, "AI move rejected");
                        self.message = Some(err.to_string());
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
            self.last_ai_result = Some(move_result);
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Compute a move suggestion for the side to move (hotseat)
    pub fn request_suggestion(&mut self) {
        if self.game.is_over() || self.is_ai_thinking() {
            return;
        }

        let config = SearchConfig {
            depth_limit: self.config.depth_limit.min(HINT_DEPTH),
            ..self.config
        };
        let mut engine = AIEngine::with_config(config);
        let result = engine.get_move_with_stats(self.game.board(), self.game.turn());

        self.suggested_move = result.best_move.clone();
        self.last_ai_result = Some(result);
    }

    /// Undo the last move, or the last human + AI pair against the AI
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }

        self.game.undo()?;
        if let GameMode::PvE { human } = self.mode {
            if self.game.turn() != human && !self.game.history().is_empty() {
                self.game.undo()?;
            }
        }

        self.selected = None;
        self.suggested_move = None;
        self.last_captures.clear();
        self.message = None;
        self.move_timer.start();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> GameState {
        GameState::new(GameMode::PvP, SearchConfig::with_depth(3))
    }

    #[test]
    fn test_click_selects_then_moves() {
        let mut state = pvp();

        state.click(Pos::new(4, 2)).unwrap();
        assert_eq!(state.selected, Some(Pos::new(4, 2)));
        assert_eq!(state.selected_moves().len(), 2);

        state.click(Pos::new(3, 3)).unwrap();
        assert_eq!(state.selected, None);
        assert_eq!(state.current_turn(), Player::White);
        assert_eq!(state.game.board().occupant(Pos::new(3, 3)), Some(Player::Black));
    }

    #[test]
    fn test_click_on_unreachable_square_clears_selection() {
        let mut state = pvp();
        state.click(Pos::new(4, 2)).unwrap();
        state.click(Pos::new(2, 2)).unwrap();

        assert_eq!(state.selected, None);
        assert_eq!(state.current_turn(), Player::Black);
    }

    #[test]
    fn test_click_rejected_on_ai_turn() {
        let mut state = GameState::new(
            GameMode::PvE {
                human: Player::White,
            },
            SearchConfig::with_depth(3),
        );
        assert_eq!(state.click(Pos::new(1, 1)), Err(GameError::NotYourTurn));
    }

    #[test]
    fn test_ai_thread_plays_reply() {
        let mut state = GameState::new(GameMode::default(), SearchConfig::with_depth(3));
        state.click(Pos::new(4, 0)).unwrap();
        state.click(Pos::new(3, 1)).unwrap();
        assert!(state.is_ai_turn());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.click(Pos::new(4, 2)), Err(GameError::AiThinking));

        while state.is_ai_thinking() {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(state.current_turn(), Player::Black);
        assert_eq!(state.game.history().len(), 2);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_undo_pve_takes_back_pair() {
        let mut state = GameState::new(GameMode::default(), SearchConfig::with_depth(3));
        state.click(Pos::new(4, 0)).unwrap();
        state.click(Pos::new(3, 1)).unwrap();

        // Pretend the AI answered
        let reply = state.game.legal_moves()[0].clone();
        state.game.play(&reply).unwrap();

        state.undo().unwrap();
        assert!(state.game.history().is_empty());
        assert_eq!(state.current_turn(), Player::Black);
        assert_eq!(state.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn test_hint_is_legal() {
        let mut state = pvp();
        state.request_suggestion();

        let hint = state.suggested_move.clone().expect("hint");
        assert!(state.game.legal_moves().contains(&hint));
    }
}
