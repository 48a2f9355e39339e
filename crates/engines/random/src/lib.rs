//! Random Move Checkers Engine
//!
//! A simple engine that selects turns uniformly at random from all legal
//! turns (forced captures included). Useful for:
//! - Baseline comparisons (the lookahead engine should easily beat this)
//! - Stress testing move generation through self-play

use checkers_core::{complete_turns, Board, Engine, EngineError, SearchResult, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A checkers engine that plays random legal turns.
///
/// This engine provides no evaluation - it simply picks a random turn
/// from all available legal turns.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic engine for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose(&mut self, board: &Board, side: Side) -> Result<SearchResult, EngineError> {
        let turns = complete_turns(board, side);
        let turn = turns
            .choose(&mut self.rng)
            .ok_or(EngineError::NoLegalMove { side })?;

        Ok(SearchResult {
            best_move: turn.chain.clone(),
            score: 0,
            depth: 1,
            leaves: turns.len() as u64,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
