//! A position together with the moves that led to it.
//!
//! `Game` is the surface engines talk to: it answers the tactical queries a
//! move heuristic needs (attackers, capture/check predicates, legal move
//! lookup between two squares) and lets callers simulate moves through
//! [`Game::play`], whose guard takes the move back when it goes out of scope.

use std::ops::{Deref, DerefMut};

use crate::bitboard::Bitboard;
use crate::board::{Position, Undo};
use crate::error::FenError;
use crate::movegen::legal_moves_into;
use crate::types::*;

/// Outcome of asking for a legal move between two squares.
///
/// `NotFound` is an ordinary answer: the piece on the source square may be
/// pinned, or the destination may be unreachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveLookup {
    Found(Move),
    NotFound,
}

impl MoveLookup {
    pub fn is_found(self) -> bool {
        matches!(self, MoveLookup::Found(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    position: Position,
    moves: Vec<Move>,
    undos: Vec<Undo>,
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Game {
    pub fn startpos() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Start a game at `position` with an empty move history.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            moves: Vec::new(),
            undos: Vec::new(),
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn ply(&self) -> u32 {
        self.position.ply()
    }

    /// Moves pushed since the game was set up, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    pub fn in_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move)
    }

    pub fn attackers(&self, by: Color, sq: u8) -> Bitboard {
        self.position.attackers_to(sq, by)
    }

    pub fn is_attacked_by(&self, by: Color, sq: u8) -> bool {
        self.position.is_square_attacked(sq, by)
    }

    /// Play a legal move and record it.
    pub fn push(&mut self, mv: Move) {
        let undo = self.position.make_move(mv);
        self.moves.push(mv);
        self.undos.push(undo);
    }

    /// Take back the most recent move, if any.
    pub fn pop(&mut self) -> Option<Move> {
        let mv = self.moves.pop()?;
        let undo = self.undos.pop()?;
        self.position.unmake_move(mv, undo);
        Some(mv)
    }

    /// Push `mv` for the lifetime of the returned guard.
    ///
    /// The guard derefs to the game, so nested simulations are just further
    /// `play` calls on it; each one is popped when its guard drops.
    pub fn play(&mut self, mv: Move) -> ScopedMove<'_> {
        self.push(mv);
        ScopedMove { game: self }
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        legal_moves_into(&mut self.position, &mut out);
        out
    }

    /// Find the legal move from `from` to `to`. Promotions resolve to a queen.
    pub fn find_move(&mut self, from: u8, to: u8) -> MoveLookup {
        let mut found = MoveLookup::NotFound;
        for mv in self.legal_moves() {
            if mv.from != from || mv.to != to {
                continue;
            }
            if mv.promo.is_none() || mv.promo == Some(PieceKind::Queen) {
                return MoveLookup::Found(mv);
            }
            found = MoveLookup::Found(mv);
        }
        found
    }

    pub fn is_capture(&self, mv: Move) -> bool {
        mv.is_en_passant
            || self
                .piece_at(mv.to)
                .is_some_and(|pc| pc.color != self.side_to_move())
    }

    pub fn gives_check(&mut self, mv: Move) -> bool {
        self.play(mv).in_check()
    }
}

/// A move pushed by [`Game::play`]; dropping it pops the move again.
pub struct ScopedMove<'a> {
    game: &'a mut Game,
}

impl Deref for ScopedMove<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.game.pop();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
