//! Move generator node counts against published perft results.
//!
//! The evaluator's pin detection relies on legal move generation being exact,
//! so these run through `Game::push`/`Game::pop` the same way engines do.

use chess_core::Game;

fn perft(game: &mut Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for mv in game.legal_moves() {
        let mut child = game.play(mv);
        nodes += perft(&mut child, depth - 1);
    }
    nodes
}

fn check(fen: &str, expected: &[u64]) {
    let mut game = Game::from_fen(fen).unwrap();
    let before = game.clone();
    for (i, &want) in expected.iter().enumerate() {
        let depth = i as u8 + 1;
        assert_eq!(perft(&mut game, depth), want, "perft({depth}) of {fen}");
    }
    assert_eq!(game, before, "perft left the game modified");
}

#[test]
fn perft_startpos() {
    check(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[20, 400, 8902],
    );
}

#[test]
fn perft_kiwipete() {
    check(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[48, 2039],
    );
}

#[test]
fn perft_en_passant_pins() {
    check("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[14, 191, 2812]);
}

#[test]
fn perft_promotions() {
    check(
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[6, 264],
    );
}
