use std::fmt;

use crate::error::UciError;
use crate::game::Game;
use crate::types::*;

pub fn move_to_uci(mv: Move) -> String {
    let mut s = sq_to_coord(mv.from);
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.to_char());
    }
    s
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_uci(*self))
    }
}

/// A coordinate move token before it is checked against a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UciMove {
    pub from: u8,
    pub to: u8,
    pub promo: Option<PieceKind>,
}

impl UciMove {
    /// True when `mv` is the move this token spells.
    pub fn matches(&self, mv: Move) -> bool {
        mv.from == self.from && mv.to == self.to && mv.promo == self.promo
    }

    /// Pick the legal move this token names, carrying over its castle/en-passant flags.
    pub fn resolve(&self, legal: &[Move]) -> Option<Move> {
        legal.iter().copied().find(|&m| self.matches(m))
    }
}

pub fn parse_uci_move(txt: &str) -> Result<UciMove, UciError> {
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(UciError::TokenLength(txt.to_string()));
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(|| UciError::InvalidSquare(txt.to_string()))?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(|| UciError::InvalidSquare(txt.to_string()))?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Some(kind)
            }
            _ => return Err(UciError::InvalidPromotion(txt.to_string())),
        },
    };
    Ok(UciMove { from, to, promo })
}

impl Game {
    /// Parse a token and match it against the current legal moves.
    pub fn parse_move(&mut self, txt: &str) -> Result<Move, UciError> {
        let token = parse_uci_move(txt)?;
        token
            .resolve(&self.legal_moves())
            .ok_or_else(|| UciError::IllegalMove(txt.to_string()))
    }

    /// Build a game from the arguments of a UCI `position` command:
    /// `startpos [moves ...]` or `fen <fields...> [moves ...]`.
    pub fn from_uci_position(args: &[&str]) -> Result<Game, UciError> {
        let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
        let (setup, moves) = args.split_at(moves_at);

        let mut game = match setup.split_first() {
            Some((&"startpos", _)) => Game::startpos(),
            Some((&"fen", fields)) => Game::from_fen(&fields.join(" "))?,
            _ => return Err(UciError::MissingPosition),
        };

        for txt in moves.iter().skip(1) {
            let mv = game.parse_move(txt)?;
            game.push(mv);
        }
        Ok(game)
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
