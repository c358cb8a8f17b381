//! Text driver
//!
//! Plays a full game on any `BufRead`/`Write` pair: stdin/stdout from the
//! binary, in-memory buffers from tests. Each side is either a human picking
//! from a numbered move list or the AI engine.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::board::{Move, Player};
use crate::engine::AIEngine;
use crate::game::{Game, GameError};
use crate::rules::GameOutcome;
use crate::search::SearchConfig;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before the game ended")]
    InputClosed,
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Console game between a human (or nobody) and the AI
pub struct Console<R, W> {
    input: R,
    output: W,
    game: Game,
    engine: AIEngine,
    /// Side played from the input; `None` lets the AI play both
    human: Option<Player>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, human: Option<Player>, config: SearchConfig) -> Self {
        Self::with_game(input, output, Game::new(), human, config)
    }

    /// Console continuing an existing game
    pub fn with_game(
        input: R,
        output: W,
        game: Game,
        human: Option<Player>,
        config: SearchConfig,
    ) -> Self {
        Self {
            input,
            output,
            game,
            engine: AIEngine::with_config(config),
            human,
        }
    }

    /// Run the game to the end and return its outcome
    pub fn run(&mut self) -> Result<GameOutcome, ConsoleError> {
        loop {
            if let Some(outcome) = self.game.outcome() {
                self.report(&outcome)?;
                return Ok(outcome);
            }

            write!(self.output, "{}", self.game.board())?;
            let player = self.game.turn();
            writeln!(self.output, "Current Player: {}", player)?;

            let legal = self.game.legal_moves();
            let mv = if self.human == Some(player) {
                self.ask_move(&legal)?
            } else {
                writeln!(self.output, "AI: Valid Moves:")?;
                self.list_moves(&legal)?;
                let mv = self
                    .engine
                    .choose_move(self.game.board(), player)
                    .ok_or(GameError::GameOver)?;
                writeln!(self.output, "Computer chooses {}", mv)?;
                mv
            };

            self.game.play(&mv)?;
            if mv.is_jump() {
                writeln!(
                    self.output,
                    "Removed {} {} pieces",
                    mv.captured().len(),
                    player.opponent()
                )?;
            }
        }
    }

    /// The game being played
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn list_moves(&mut self, legal: &[Move]) -> Result<(), ConsoleError> {
        for (i, mv) in legal.iter().enumerate() {
            writeln!(self.output, "{}: {}", i + 1, mv)?;
        }
        Ok(())
    }

    /// Prompt until the human picks an entry from the list
    fn ask_move(&mut self, legal: &[Move]) -> Result<Move, ConsoleError> {
        loop {
            writeln!(self.output, "Valid Moves:")?;
            self.list_moves(legal)?;
            write!(self.output, "Pick a move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }

            let choice = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| legal.get(idx));
            match choice {
                Some(mv) => {
                    writeln!(self.output, "Legal move")?;
                    return Ok(mv.clone());
                }
                None => writeln!(self.output, "Illegal move")?,
            }
        }
    }

    fn report(&mut self, outcome: &GameOutcome) -> Result<(), ConsoleError> {
        writeln!(self.output, "The game is over!")?;
        match outcome.winner {
            Some(winner) => writeln!(self.output, "{} wins!", winner)?,
            None => writeln!(self.output, "It's a tie!")?,
        }
        write!(self.output, "{}", self.game.board())?;
        self.output.flush()?;

        let [black, white] = outcome.score;
        info!(winner = ?outcome.winner, black, white, "console game finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use std::io::Cursor;

    fn run_game(input: &str, human: Option<Player>) -> (Result<GameOutcome, ConsoleError>, String) {
        let mut output = Vec::new();
        let result = {
            let mut console = Console::new(
                Cursor::new(input.as_bytes()),
                &mut output,
                human,
                SearchConfig::with_depth(3),
            );
            console.run()
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_ai_vs_ai_plays_to_the_end() {
        let (result, output) = run_game("", None);
        let outcome = result.unwrap();

        assert!(output.starts_with("  0 1 2 3 4 5 \n"));
        assert!(output.contains("Current Player: Black"));
        assert!(output.contains("Current Player: White"));
        assert!(output.contains("AI: Valid Moves:"));
        assert!(output.contains("1: (4, 0) (3, 1)"));
        assert!(output.contains("Computer chooses"));
        assert!(output.contains("The game is over!"));

        let verdict = match outcome.winner {
            Some(player) => format!("{} wins!", player),
            None => "It's a tie!".to_string(),
        };
        assert!(output.contains(&verdict));
    }

    #[test]
    fn test_ai_vs_ai_is_deterministic() {
        let (_, first) = run_game("", None);
        let (_, second) = run_game("", None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_human_reprompts_on_bad_input() {
        let mut input = String::from("0\nabc\n\n6\n");
        input.push_str(&"1\n".repeat(60));
        let (result, output) = run_game(&input, Some(Player::Black));

        assert!(result.is_ok());
        assert!(output.contains("Pick a move: "));
        // "0", "abc", "" and "6" are all rejected on the 5-move opening
        assert_eq!(output.matches("Illegal move").count(), 4);
        assert!(output.contains("Legal move"));
        assert!(output.contains("The game is over!"));
    }

    #[test]
    fn test_human_first_choice_is_applied() {
        let input = "2\n".to_string() + &"1\n".repeat(60);
        let (result, output) = run_game(&input, Some(Player::Black));
        assert!(result.is_ok());

        // Second opening move for Black is (4, 2) -> (3, 1)
        let first_pick = output.find("Legal move").unwrap();
        let after = &output[first_pick..];
        assert!(after.contains("3 - B - - - - "));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, output) = run_game("", Some(Player::Black));
        assert!(matches!(result, Err(ConsoleError::InputClosed)));
        assert!(output.contains("Pick a move: "));
    }

    #[test]
    fn test_captures_are_reported() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(2, 2), Player::White);
        board.place_piece(Pos::new(3, 3), Player::Black);
        let game = Game::from_position(board, Player::White);

        let mut output = Vec::new();
        let outcome = Console::with_game(
            Cursor::new(&b""[..]),
            &mut output,
            game,
            None,
            SearchConfig::with_depth(3),
        )
        .run()
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(outcome.winner, Some(Player::Black));
        assert!(output.contains("Computer chooses (2, 2) (4, 4)"));
        assert!(output.contains("Removed 1 Black pieces"));
        assert!(output.contains("Black wins!"));
        assert!(output.ends_with("5 - - - - - - \n"));
    }
}
