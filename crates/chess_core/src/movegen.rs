use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::{board::Position, types::*};

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// The position is played forward and back for every candidate, so it is left
/// exactly as it was passed in.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn own_pieces(pos: &Position, c: Color) -> Bitboard {
    let mut own = Bitboard::EMPTY;
    for s in 0..64u8 {
        if pos.piece_at(s).is_some_and(|pc| pc.color == c) {
            own.set(s);
        }
    }
    own
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let occ = pos.occupancy();
    let not_own = !own_pieces(pos, us);

    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) if p.color == us => p,
            _ => continue,
        };
        let targets = match pc.kind {
            PieceKind::Pawn => {
                gen_pawn(pos, from, us, out);
                continue;
            }
            PieceKind::Knight => knight_attacks(from),
            PieceKind::Bishop => bishop_attacks(from, occ),
            PieceKind::Rook => rook_attacks(from, occ),
            PieceKind::Queen => queen_attacks(from, occ),
            PieceKind::King => {
                gen_castle(pos, from, us, out);
                king_attacks(from)
            }
        };
        out.extend((targets & not_own).map(|to| Move::new(from, to)));
    }
}

fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    let promo_rank = match c {
        Color::White => 7,
        Color::Black => 0,
    };
    if rank_of(to) == promo_rank {
        out.extend(PieceKind::PROMOTIONS.map(|pk| Move::promoting(from, to, pk)));
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();
    let start_rank = match c {
        Color::White => 1,
        Color::Black => 6,
    };

    if let Some(one) = sq(f, r + dir)
        && pos.piece_at(one).is_none()
    {
        push_pawn_move(from, one, c, out);
        if r == start_rank
            && let Some(two) = sq(f, r + 2 * dir)
            && pos.piece_at(two).is_none()
        {
            out.push(Move::new(from, two));
        }
    }

    for to in pawn_attacks(from, c) {
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, c, out),
            None if pos.en_passant == Some(to) => out.push(Move {
                is_en_passant: true,
                ..Move::new(from, to)
            }),
            _ => {}
        }
    }
}

/// Castling squares: (king from, king to, squares that must be empty, squares that must be safe).
const CASTLES: [(u8, u8, &[u8], &[u8]); 4] = [
    (4, 6, &[5, 6], &[5, 6]),
    (4, 2, &[1, 2, 3], &[2, 3]),
    (60, 62, &[61, 62], &[61, 62]),
    (60, 58, &[57, 58, 59], &[58, 59]),
];

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let rights = match c {
        Color::White => [pos.castling.wk, pos.castling.wq],
        Color::Black => [pos.castling.bk, pos.castling.bq],
    };
    let sides = match c {
        Color::White => &CASTLES[0..2],
        Color::Black => &CASTLES[2..4],
    };
    if !rights.contains(&true) || pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    for (&allowed, &(king_from, king_to, empty, safe)) in rights.iter().zip(sides) {
        if allowed
            && from == king_from
            && empty.iter().all(|&s| pos.piece_at(s).is_none())
            && safe.iter().all(|&s| !pos.is_square_attacked(s, enemy))
        {
            out.push(Move {
                is_castle: true,
                ..Move::new(king_from, king_to)
            });
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
