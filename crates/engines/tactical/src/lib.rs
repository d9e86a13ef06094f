//! Tactical Chess Engine
//!
//! Chooses one move per ply without a game-tree search:
//! - a forced move is played immediately
//! - at ply 2 an uncontested centre pawn is joined by its neighbour
//! - early on, a continuation from a small opening book
//! - otherwise every legal move gets a one-ply tactical score and a random
//!   move among the best is played

mod book;
mod config;
mod error;
mod eval;
mod select;

use chess_core::{Engine, Game, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};

pub use book::{OpeningBook, OpeningLine, OPENING_LINES};
pub use config::{EngineConfig, EvalWeights};
pub use error::{ConfigError, EngineError};
pub use eval::{MoveEvaluator, TacticalEvaluator};
pub use select::{Origin, Selection, Selector, BOOK_BREAK_PLY};

#[derive(Debug, Clone)]
pub struct TacticalEngine<R = StdRng> {
    selector: Selector<TacticalEvaluator, R>,
}

impl TacticalEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Build from config; `config.seed` fixes the tie-break sequence.
    pub fn with_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for TacticalEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TacticalEngine<R> {
    pub fn with_rng(config: &EngineConfig, rng: R) -> Self {
        let evaluator = TacticalEvaluator::new(config.weights.clone());
        Self {
            selector: Selector::with_config(evaluator, rng, config),
        }
    }

    pub fn select_move(&mut self, game: &mut Game) -> Result<Selection, EngineError> {
        self.selector.select_move(game)
    }
}

impl<R: Rng + SeedableRng + Send> Engine for TacticalEngine<R> {
    fn search(&mut self, game: &mut Game) -> SearchResult {
        let before = self.selector.evaluations();
        let outcome = self.selector.select_move(game);
        let nodes = self.selector.evaluations() - before;

        match outcome {
            Ok(selection) => {
                info!(
                    mv = %selection.mv,
                    origin = ?selection.origin,
                    score = ?selection.score,
                    nodes,
                    "move selected"
                );
                SearchResult {
                    best_move: Some(selection.mv),
                    score: selection.score,
                    nodes,
                }
            }
            Err(EngineError::NoLegalMoves) => SearchResult::default(),
            Err(err) => {
                error!(%err, "move selection failed");
                SearchResult {
                    nodes,
                    ..SearchResult::default()
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Tactical v1.0"
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "seed" => match value.parse::<u64>() {
                Ok(seed) => {
                    self.selector.set_rng(R::seed_from_u64(seed));
                    true
                }
                Err(_) => false,
            },
            "ownbook" => match value.parse::<bool>() {
                Ok(enabled) => {
                    self.selector.set_use_book(enabled);
                    true
                }
                Err(_) => false,
            },
            "bookplies" => match value.parse::<u32>() {
                Ok(plies) => {
                    self.selector.set_book_plies(plies);
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}
