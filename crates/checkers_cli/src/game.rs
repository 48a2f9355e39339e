//! Game runner for playing checkers between engines

use checkers_core::{play_path, Board, Engine, EngineError, Move, Side};
use serde::Serialize;
use tracing::{debug, info};

/// Configuration for a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Turns (both sides counted) before the game is declared drawn
    pub max_turns: u32,
    /// Side making the first turn
    pub first: Side,
    /// Log every turn at info level
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            first: Side::Black,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win(Side),
    Draw,
}

/// One turn as it was played
#[derive(Debug, Clone, Serialize)]
pub struct PlayedTurn {
    pub side: Side,
    pub text: String,
    pub captures: usize,
}

impl PlayedTurn {
    fn new(side: Side, mv: &Move) -> Self {
        Self {
            side,
            text: mv.to_string(),
            captures: mv.captures(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub turns: Vec<PlayedTurn>,
    pub outcome: GameOutcome,
    pub final_board: Board,
}

/// Plays games between two engines
pub struct GameRunner {
    config: GameConfig,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Play a game from the standard opening
    pub fn play(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> Result<GameRecord, EngineError> {
        self.play_from(Board::initial(), white, black)
    }

    /// Play a game from `board`.
    ///
    /// A side loses when it has no pieces left or no legal turn. Every turn
    /// an engine returns is checked against the legal turns before it is
    /// applied.
    pub fn play_from(
        &self,
        mut board: Board,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, EngineError> {
        white.new_game();
        black.new_game();

        let mut record = GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            turns: Vec::new(),
            outcome: GameOutcome::Draw,
            final_board: board,
        };
        let mut side = self.config.first;

        for turn_num in 0..self.config.max_turns {
            if let Some(winner) = board.winner() {
                record.outcome = GameOutcome::Win(winner);
                break;
            }

            let engine: &mut dyn Engine = match side {
                Side::White => &mut *white,
                Side::Black => &mut *black,
            };
            let result = match engine.choose(&board, side) {
                Ok(result) => result,
                Err(EngineError::NoLegalMove { .. }) => {
                    // Blocked side loses
                    record.outcome = GameOutcome::Win(side.opposite());
                    break;
                }
                Err(e) => return Err(e),
            };

            let turn = play_path(&board, &result.best_move.path(), side)?;
            if self.config.verbose {
                info!(turn = turn_num + 1, %side, mv = %turn.chain, score = result.score, "played");
            } else {
                debug!(turn = turn_num + 1, %side, mv = %turn.chain, "played");
            }
            record.turns.push(PlayedTurn::new(side, &turn.chain));
            board = turn.board;
            side = side.opposite();
        }

        // The last turn may have ended the game
        if record.outcome == GameOutcome::Draw {
            if let Some(winner) = board.winner() {
                record.outcome = GameOutcome::Win(winner);
            }
        }
        record.final_board = board;
        Ok(record)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
