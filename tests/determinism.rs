use patzer::board::{GameStatus, Position};
use patzer::registry;
use patzer::search::{AlphaBeta, Engine, Greedy, Minimax, Random};

#[test]
fn fixed_depth_engines_repeat_exactly() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3";
    let mut engines: Vec<Box<dyn Engine>> = vec![
        Box::new(Greedy),
        Box::new(Minimax::new(3)),
        Box::new(AlphaBeta::new(4)),
        registry::build("v4").expect("v4 is constructible"),
    ];
    for eng in engines.iter_mut() {
        let mut pos = Position::from_fen(fen).expect("valid fen");
        let first = eng.search(&mut pos).expect("searchable");
        let second = eng.search(&mut pos).expect("searchable");
        assert_eq!(
            first.best_move,
            second.best_move,
            "{} must repeat its move on the same position",
            eng.name()
        );
        assert_eq!(first.score_cp, second.score_cp, "{} must repeat its score", eng.name());
        assert_eq!(first.nodes, second.nodes, "{} must repeat its node count", eng.name());
    }
}

#[test]
fn seeded_random_replays_the_same_game() {
    let mut lines: Vec<Vec<String>> = Vec::new();
    for _ in 0..2 {
        let mut pos = Position::startpos();
        let mut white = Random::with_seed(42);
        let mut black = Random::with_seed(977);
        let mut line = Vec::new();
        for ply in 0..12 {
            if pos.status() != GameStatus::Ongoing {
                break;
            }
            let eng: &mut Random = if ply % 2 == 0 { &mut white } else { &mut black };
            let res = eng.search(&mut pos).expect("searchable");
            line.push(format!("{}", res.best_move));
            pos.make(res.best_move);
        }
        lines.push(line);
    }
    assert_eq!(lines[0], lines[1], "seeded games should replay move for move");
}

#[test]
fn random_move_is_always_legal() {
    let mut pos = Position::startpos();
    let mut eng = Random::with_seed(7);
    for _ in 0..20 {
        if pos.status() != GameStatus::Ongoing {
            break;
        }
        let res = eng.search(&mut pos).expect("searchable");
        let uci = format!("{}", res.best_move);
        assert!(pos.find_uci(&uci).is_some(), "random pick must be legal: {uci}");
        assert_eq!(res.nodes, 0, "random search does not visit nodes");
        assert_eq!(res.score_cp, 0, "random search does not score");
        pos.make(res.best_move);
    }
}
