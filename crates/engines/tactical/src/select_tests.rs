use super::*;
use crate::eval::TacticalEvaluator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// Counts calls and scores everything the same.
#[derive(Debug, Default)]
struct Counting {
    calls: usize,
}

impl MoveEvaluator for Counting {
    fn evaluate(&mut self, _game: &mut Game, _mv: Move) -> f64 {
        self.calls += 1;
        0.0
    }
}

/// Returns a fixed score per move.
#[derive(Debug)]
struct Scripted {
    scores: Vec<(Move, f64)>,
}

impl MoveEvaluator for Scripted {
    fn evaluate(&mut self, _game: &mut Game, mv: Move) -> f64 {
        self.scores
            .iter()
            .find(|(m, _)| *m == mv)
            .map(|&(_, s)| s)
            .unwrap_or(f64::NEG_INFINITY)
    }
}

fn seeded<E: MoveEvaluator>(evaluator: E) -> Selector<E, StdRng> {
    Selector::new(evaluator, StdRng::seed_from_u64(7))
}

fn play(tokens: &[&str]) -> Game {
    let mut game = Game::startpos();
    for token in tokens {
        let mv = game.parse_move(token).unwrap();
        game.push(mv);
    }
    game
}

#[test]
fn single_legal_move_skips_evaluation() {
    // Kxb2 is the only way out
    let mut game = Game::from_fen("k7/8/8/8/8/8/1q6/K7 w - - 0 1").unwrap();
    let mut selector = seeded(Counting::default());

    let selection = selector.select_move(&mut game).unwrap();
    assert_eq!(selection.mv.to_string(), "a1b2");
    assert_eq!(selection.origin, Origin::Forced);
    assert_eq!(selector.evaluator().calls, 0);
    assert_eq!(selector.evaluations(), 0);
}

#[test]
fn uncontested_e4_is_answered_with_d4() {
    let mut game = play(&["e2e4", "a7a6"]);
    let mut selector = seeded(Counting::default());

    let selection = selector.select_move(&mut game).unwrap();
    assert_eq!(selection.mv.to_string(), "d2d4");
    assert_eq!(selection.origin, Origin::BookBreak);
    assert_eq!(selector.evaluator().calls, 0);
}

#[test]
fn uncontested_d4_is_answered_with_e4() {
    let mut game = play(&["d2d4", "h7h6"]);
    let selection = seeded(Counting::default()).select_move(&mut game).unwrap();
    assert_eq!(selection.mv.to_string(), "e2e4");
    assert_eq!(selection.origin, Origin::BookBreak);
}

#[test]
fn contested_centre_falls_back_to_book() {
    // e5 hits d4, so the break does not apply; both e4-e5 lines play Nf3
    let mut game = play(&["e2e4", "e7e5"]);
    let selection = seeded(Counting::default()).select_move(&mut game).unwrap();
    assert_eq!(selection.mv.to_string(), "g1f3");
    assert_eq!(selection.origin, Origin::Book);
}

#[test]
fn book_break_can_be_disabled() {
    let mut game = play(&["e2e4", "a7a6"]);
    let config = EngineConfig {
        book_break: false,
        ..EngineConfig::default()
    };
    let mut selector = Selector::with_config(Counting::default(), StdRng::seed_from_u64(1), &config);
    let selection = selector.select_move(&mut game).unwrap();
    assert_eq!(selection.origin, Origin::Evaluated);
    assert_eq!(selector.evaluator().calls, game.legal_moves().len());
}

#[test]
fn opening_move_comes_from_book() {
    let mut game = Game::startpos();
    let selection = seeded(Counting::default()).select_move(&mut game).unwrap();
    assert_eq!(selection.origin, Origin::Book);
    assert!(["e2e4", "d2d4", "c2c4"].contains(&selection.mv.to_string().as_str()));
}

#[test]
fn book_is_not_consulted_past_its_depth() {
    // Italian Game played to its last book move: ply 6
    let mut game = play(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"]);
    let mut selector = seeded(Counting::default());
    let selection = selector.select_move(&mut game).unwrap();
    assert_eq!(selection.origin, Origin::Evaluated);
    assert!(selector.evaluator().calls > 0);
}

#[test]
fn ties_are_broken_uniformly() {
    // Lone king in the corner: exactly three legal moves
    let mut game = Game::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").unwrap();
    let legal = game.legal_moves();
    assert_eq!(legal.len(), 3);
    let (a, b, c) = (legal[0], legal[1], legal[2]);

    let mut selector = seeded(Scripted {
        scores: vec![(a, 0.6), (b, 0.6), (c, 0.3)],
    });
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let selection = selector.select_move(&mut game).unwrap();
        assert_ne!(selection.mv, c);
        assert_eq!(selection.score, Some(0.6));
        seen.insert(selection.mv);
    }
    assert_eq!(seen, HashSet::from([a, b]));
}

#[test]
fn later_strictly_better_move_resets_candidates() {
    let mut game = Game::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").unwrap();
    let legal = game.legal_moves();
    let mut selector = seeded(Scripted {
        scores: vec![(legal[0], 0.2), (legal[1], 0.2), (legal[2], 0.5)],
    });
    for _ in 0..20 {
        assert_eq!(selector.select_move(&mut game).unwrap().mv, legal[2]);
    }
}

#[test]
fn nan_scores_leave_no_candidate() {
    struct Nan;
    impl MoveEvaluator for Nan {
        fn evaluate(&mut self, _game: &mut Game, _mv: Move) -> f64 {
            f64::NAN
        }
    }
    let mut game = Game::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").unwrap();
    assert_eq!(
        seeded(Nan).select_move(&mut game),
        Err(EngineError::EmptyCandidateSet)
    );
}

#[test]
fn finished_game_is_rejected() {
    let mut game =
        Game::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1").unwrap();
    assert_eq!(
        seeded(Counting::default()).select_move(&mut game),
        Err(EngineError::NoLegalMoves)
    );
}

#[test]
fn selected_move_is_legal_and_game_is_untouched() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "4k3/5p2/8/8/8/8/4Q3/K7 w - - 0 1",
    ];
    let mut selector = seeded(TacticalEvaluator::default());
    for fen in fens {
        let mut game = Game::from_fen(fen).unwrap();
        let before = game.clone();
        let selection = selector.select_move(&mut game).unwrap();
        assert_eq!(game, before);
        assert!(game.legal_moves().contains(&selection.mv), "{fen}");
    }
}

#[test]
fn centre_squares_are_d4_and_e4() {
    assert_eq!(chess_core::coord_to_sq("d4"), Some(D4));
    assert_eq!(chess_core::coord_to_sq("e4"), Some(E4));
}

#[test]
fn custom_book_replaces_default_lines() {
    static LINES: &[crate::book::OpeningLine] = &[crate::book::OpeningLine {
        name: "Anderssen",
        moves: &["a2a3", "e7e5"],
    }];
    let mut selector = seeded(Counting::default()).with_book(OpeningBook::new(LINES));

    let mut game = Game::startpos();
    let selection = selector.select_move(&mut game).unwrap();
    assert_eq!(selection.mv.to_string(), "a2a3");
    assert_eq!(selection.origin, Origin::Book);

    // Off the custom line the default openings no longer apply
    let mut game = play(&["e2e4", "e7e5"]);
    let selection = selector.select_move(&mut game).unwrap();
    assert_eq!(selection.origin, Origin::Evaluated);
    assert_eq!(selector.evaluator().calls, game.legal_moves().len());
}
