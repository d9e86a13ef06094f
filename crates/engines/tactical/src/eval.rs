//! One-ply tactical scoring of a single candidate move.
//!
//! The score is a sum of small deltas (see [`EvalWeights`]) gathered by
//! playing the move and inspecting what the opponent can do on the
//! destination square, and how our check can be answered.

use chess_core::{Color, Game, Move, MoveLookup, PieceKind};

use crate::config::EvalWeights;

/// Scores candidate moves for the side to move. Higher is better.
///
/// Implementations may push and pop moves on `game` but must return it
/// unchanged.
pub trait MoveEvaluator {
    fn evaluate(&mut self, game: &mut Game, mv: Move) -> f64;
}

#[derive(Debug, Clone, Default)]
pub struct TacticalEvaluator {
    weights: EvalWeights,
}

impl TacticalEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

impl MoveEvaluator for TacticalEvaluator {
    fn evaluate(&mut self, game: &mut Game, mv: Move) -> f64 {
        let w = &self.weights;
        let mover = game.side_to_move();
        let gives_check = game.gives_check(mv);

        let mut score = 0.0;
        if game.is_capture(mv) {
            score += w.capture;
        }
        if gives_check {
            score += w.check;
        }
        if game.piece_at(mv.from).is_some_and(|pc| pc.kind == PieceKind::King) {
            score += w.king_move;
        }

        let mut after = game.play(mv);
        score_exchanges(&mut after, mover, mv.to, w, &mut score);
        if gives_check {
            score_check_responses(&mut after, w, &mut score);
        }
        score
    }
}

/// For each enemy piece bearing on `target`, try its capture and count how
/// many of `mover`'s pieces could legally take back.
///
/// Attackers whose capture is illegal (pinned to their king) are skipped.
fn score_exchanges(game: &mut Game, mover: Color, target: u8, w: &EvalWeights, score: &mut f64) {
    for attacker in game.attackers(mover.other(), target) {
        let MoveLookup::Found(capture) = game.find_move(attacker, target) else {
            continue;
        };

        let mut after_capture = game.play(capture);
        let mut recaptures = 0;
        for defender in after_capture.attackers(mover, target) {
            match after_capture.find_move(defender, target) {
                MoveLookup::Found(_) => {
                    *score += w.defended;
                    recaptures += 1;
                }
                MoveLookup::NotFound => *score += w.pinned_defender,
            }
        }
        if recaptures == 0 {
            *score += w.undefended;
        }
    }
}

/// Penalise checks the opponent can answer by capturing with something other
/// than the king, and checks answered by a pawn move. One reply can hit both.
fn score_check_responses(game: &mut Game, w: &EvalWeights, score: &mut f64) {
    for reply in game.legal_moves() {
        let kind = game.piece_at(reply.from).map(|pc| pc.kind);
        if game.is_capture(reply) && kind != Some(PieceKind::King) {
            *score += w.refuting_capture;
        }
        if kind == Some(PieceKind::Pawn) {
            *score += w.pawn_response;
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
