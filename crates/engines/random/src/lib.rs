//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. Useful as a
//! baseline opponent for the tactical engine and for exercising the host.

use chess_core::{Engine, Game, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;


/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine<R = StdRng> {
    rng: R,
}

impl RandomEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + SeedableRng + Send> Engine for RandomEngine<R> {
    fn search(&mut self, game: &mut Game) -> SearchResult {
        let moves = game.legal_moves();
        let best_move = moves.choose(&mut self.rng).copied();
        if let Some(mv) = best_move {
            debug!(%mv, choices = moves.len(), "random move");
        }

        SearchResult {
            best_move,
            score: None,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match (name.eq_ignore_ascii_case("seed"), value.parse::<u64>()) {
            (true, Ok(seed)) => {
                self.rng = R::seed_from_u64(seed);
                true
            }
            _ => false,
        }
    }
}
