use chess_core::{Engine, Game};
use rand::rngs::StdRng;
use tactical_engine::{EngineConfig, Origin, TacticalEngine};

fn seeded(seed: u64) -> TacticalEngine<StdRng> {
    TacticalEngine::with_config(&EngineConfig {
        seed: Some(seed),
        ..EngineConfig::default()
    })
}

#[test]
fn search_returns_legal_move_and_restores_game() {
    let mut engine = seeded(3);
    let mut game = Game::from_uci_position(&["startpos", "moves", "e2e4", "c7c5", "g1f3"]).unwrap();
    let before = game.clone();

    let result = engine.search(&mut game);

    assert_eq!(game, before);
    let mv = result.best_move.expect("a move");
    assert!(game.legal_moves().contains(&mv));
}

#[test]
fn book_and_forced_moves_report_no_score() {
    let mut engine = seeded(3);
    let mut game = Game::startpos();
    let result = engine.search(&mut game);
    assert!(result.best_move.is_some());
    assert_eq!(result.score, None);
    assert_eq!(result.nodes, 0);
}

#[test]
fn evaluated_moves_report_score_and_nodes() {
    let mut engine = seeded(3);
    let mut game = Game::from_fen("3r3k/8/8/8/8/8/8/3R2K1 w - - 0 1").unwrap();
    let legal = game.legal_moves().len() as u64;

    let result = engine.search(&mut game);

    // Rxd8+ is the only capture and the only check
    assert_eq!(result.best_move.map(|m| m.to_string()), Some("d1d8".to_string()));
    assert!(result.score.is_some_and(|s| (s - 0.6).abs() < 1e-9));
    assert_eq!(result.nodes, legal);
}

#[test]
fn mated_position_yields_no_move() {
    let mut engine = seeded(3);
    let mut game =
        Game::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1").unwrap();
    let result = engine.search(&mut game);
    assert!(result.best_move.is_none());
}

#[test]
fn same_seed_plays_same_game() {
    fn self_play(seed: u64) -> Vec<String> {
        let mut engine = seeded(seed);
        let mut game = Game::startpos();
        let mut played = Vec::new();
        for _ in 0..16 {
            let Some(mv) = engine.search(&mut game).best_move else {
                break;
            };
            played.push(mv.to_string());
            game.push(mv);
        }
        played
    }
    assert_eq!(self_play(11), self_play(11));
}

#[test]
fn uci_options_toggle_book() {
    let mut engine = seeded(5);
    assert!(engine.set_option("OwnBook", "false"));
    assert!(engine.set_option("Seed", "9"));
    assert!(!engine.set_option("BookPlies", "many"));
    assert!(!engine.set_option("Hash", "16"));

    let mut game = Game::startpos();
    let selection = engine.select_move(&mut game).unwrap();
    assert_eq!(selection.origin, Origin::Evaluated);
}
