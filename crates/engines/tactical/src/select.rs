//! Per-ply move selection: forced moves, the ply-2 centre break, the opening
//! book, and finally a full one-ply evaluation with random tie-breaks.

use chess_core::{parse_uci_move, Game, Move, Piece, PieceKind};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::book::OpeningBook;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::eval::MoveEvaluator;

// Centre squares, indexed rank * 8 + file from a1 = 0.
const D4: u8 = 3 * 8 + 3;
const E4: u8 = 3 * 8 + 4;

/// The ply at which the centre-break rule fires (one move by each side).
pub const BOOK_BREAK_PLY: u32 = 2;

/// Which step of the selection produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Only one legal move existed
    Forced,
    /// Second centre pawn pushed at ply 2
    BookBreak,
    /// Continuation of a live opening line
    Book,
    /// Best-scoring move from the evaluator
    Evaluated,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub mv: Move,
    pub origin: Origin,
    /// Score of the chosen move, present only for [`Origin::Evaluated`]
    pub score: Option<f64>,
}

/// Chooses one move per call. Holds no game state between calls; the random
/// source is injected so tests can seed it.
#[derive(Debug, Clone)]
pub struct Selector<E, R> {
    evaluator: E,
    book: OpeningBook,
    rng: R,
    use_book: bool,
    book_plies: u32,
    book_break: bool,
    evaluations: u64,
}

impl<E: MoveEvaluator, R: Rng> Selector<E, R> {
    pub fn new(evaluator: E, rng: R) -> Self {
        Self::with_config(evaluator, rng, &EngineConfig::default())
    }

    pub fn with_config(evaluator: E, rng: R, config: &EngineConfig) -> Self {
        Self {
            evaluator,
            book: OpeningBook::default(),
            rng,
            use_book: config.use_book,
            book_plies: config.book_plies,
            book_break: config.book_break,
            evaluations: 0,
        }
    }

    pub fn with_book(mut self, book: OpeningBook) -> Self {
        self.book = book;
        self
    }

    pub fn set_use_book(&mut self, enabled: bool) {
        self.use_book = enabled;
    }

    pub fn set_book_plies(&mut self, plies: u32) {
        self.book_plies = plies;
    }

    pub fn set_rng(&mut self, rng: R) {
        self.rng = rng;
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Total evaluator calls made by this selector.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn select_move(&mut self, game: &mut Game) -> Result<Selection, EngineError> {
        let legal = game.legal_moves();
        match legal.as_slice() {
            [] => return Err(EngineError::NoLegalMoves),
            [only] => {
                debug!(mv = %only, "single legal move");
                return Ok(Selection {
                    mv: *only,
                    origin: Origin::Forced,
                    score: None,
                });
            }
            _ => {}
        }

        if self.book_break && game.ply() == BOOK_BREAK_PLY {
            if let Some(mv) = centre_break(game, &legal) {
                debug!(%mv, "uncontested centre, breaking from book");
                return Ok(Selection {
                    mv,
                    origin: Origin::BookBreak,
                    score: None,
                });
            }
        }

        if self.use_book && game.ply() < self.book_plies {
            let pool = self.book.match_continuations(game.history(), &legal);
            if let Some(&mv) = pool.choose(&mut self.rng) {
                debug!(%mv, candidates = pool.len(), "book move");
                return Ok(Selection {
                    mv,
                    origin: Origin::Book,
                    score: None,
                });
            }
        }

        self.best_by_evaluation(game, &legal)
    }

    fn best_by_evaluation(&mut self, game: &mut Game, legal: &[Move]) -> Result<Selection, EngineError> {
        let mut best = f64::NEG_INFINITY;
        let mut candidates: Vec<Move> = Vec::new();

        for &mv in legal {
            let score = self.evaluator.evaluate(game, mv);
            self.evaluations += 1;
            debug!(%mv, score, "scored");

            if score > best {
                best = score;
                candidates.clear();
                candidates.push(mv);
            } else if score == best {
                candidates.push(mv);
            }
        }

        let mv = *candidates
            .choose(&mut self.rng)
            .ok_or(EngineError::EmptyCandidateSet)?;
        debug!(%mv, score = best, tied = candidates.len(), "best evaluated move");
        Ok(Selection {
            mv,
            origin: Origin::Evaluated,
            score: Some(best),
        })
    }
}

/// If the opponent attacks neither d4 nor e4 and one of them already holds
/// our pawn, push the other centre pawn two squares.
fn centre_break(game: &Game, legal: &[Move]) -> Option<Move> {
    let us = game.side_to_move();
    let them = us.other();
    if game.is_attacked_by(them, D4) || game.is_attacked_by(them, E4) {
        return None;
    }

    let our_pawn = Some(Piece::new(us, PieceKind::Pawn));
    let push = if game.piece_at(D4) == our_pawn {
        "e2e4"
    } else if game.piece_at(E4) == our_pawn {
        "d2d4"
    } else {
        return None;
    };
    parse_uci_move(push).ok()?.resolve(legal)
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
