//! Fixed opening book: named move sequences matched prefix-wise against the
//! moves played so far.

use chess_core::{parse_uci_move, Move};
use tracing::trace;

/// A named opening as a flat list of coordinate move tokens, both colours
/// interleaved from the initial position.
#[derive(Debug, Clone, Copy)]
pub struct OpeningLine {
    pub name: &'static str,
    pub moves: &'static [&'static str],
}

/// Two lines are the same opening when they list the same moves.
impl PartialEq for OpeningLine {
    fn eq(&self, other: &Self) -> bool {
        self.moves == other.moves
    }
}

impl Eq for OpeningLine {}

impl OpeningLine {
    /// True when every move in `history` is the line's move at the same index.
    /// A malformed token ends the line.
    pub fn follows(&self, history: &[Move]) -> bool {
        history.len() <= self.moves.len()
            && history
                .iter()
                .zip(self.moves)
                .all(|(&played, token)| match parse_uci_move(token) {
                    Ok(expected) => expected.matches(played),
                    Err(err) => {
                        trace!(line = self.name, %err, "malformed book token");
                        false
                    }
                })
    }

    /// The line's next move after `history`, if the line is still live and
    /// that move is among `legal`.
    pub fn continuation(&self, history: &[Move], legal: &[Move]) -> Option<Move> {
        let token = self.moves.get(history.len())?;
        if !self.follows(history) {
            return None;
        }
        let next = parse_uci_move(token)
            .inspect_err(|err| trace!(line = self.name, %err, "malformed book token"))
            .ok()?
            .resolve(legal);
        if next.is_none() {
            trace!(line = self.name, token, "book move is not legal here");
        }
        next
    }
}

pub static OPENING_LINES: &[OpeningLine] = &[
    OpeningLine {
        name: "Italian Game",
        moves: &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"],
    },
    OpeningLine {
        name: "Ruy Lopez",
        moves: &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6"],
    },
    OpeningLine {
        name: "Scandinavian Defense",
        moves: &["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5d8"],
    },
    OpeningLine {
        name: "Sicilian Defense",
        moves: &["e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4"],
    },
    OpeningLine {
        name: "French Defense",
        moves: &["e2e4", "e7e6", "d2d4", "d7d5", "b1c3", "g8f6"],
    },
    OpeningLine {
        name: "Caro-Kann Defense",
        moves: &["e2e4", "c7c6", "d2d4", "d7d5", "b1c3", "d5e4"],
    },
    OpeningLine {
        name: "Queen's Gambit Declined",
        moves: &["d2d4", "d7d5", "c2c4", "e7e6", "b1c3", "g8f6"],
    },
    OpeningLine {
        name: "Queen's Gambit Accepted",
        moves: &["d2d4", "d7d5", "c2c4", "d5c4", "g1f3", "g8f6"],
    },
    OpeningLine {
        name: "Slav Defense",
        moves: &["d2d4", "d7d5", "c2c4", "c7c6", "g1f3", "g8f6"],
    },
    OpeningLine {
        name: "King's Indian Defense",
        moves: &["d2d4", "g8f6", "c2c4", "g7g6", "b1c3", "f8g7"],
    },
    OpeningLine {
        name: "London System",
        moves: &["d2d4", "d7d5", "c1f4", "g8f6", "e2e3", "e7e6"],
    },
    OpeningLine {
        name: "English Opening",
        moves: &["c2c4", "e7e5", "b1c3", "g8f6", "g1f3", "b8c6"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct OpeningBook {
    lines: &'static [OpeningLine],
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self::new(OPENING_LINES)
    }
}

impl OpeningBook {
    pub const fn new(lines: &'static [OpeningLine]) -> Self {
        Self { lines }
    }

    /// Next moves of every line the game is still following, restricted to
    /// `legal`. Duplicates are dropped; order follows the table.
    pub fn match_continuations(&self, history: &[Move], legal: &[Move]) -> Vec<Move> {
        let mut pool = Vec::new();
        for line in self.lines {
            if let Some(mv) = line.continuation(history, legal) {
                if !pool.contains(&mv) {
                    pool.push(mv);
                }
            }
        }
        pool
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
