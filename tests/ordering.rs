use pleco::BitMove;

use patzer::board::Position;
use patzer::search::ordering::order_moves;
use patzer::search::{AlphaBeta, Engine};

#[test]
fn captures_first_reduces_nodes() {
    // Position with a clear capture line available
    let fen = "4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1";

    // Baseline: generation order only
    let mut pos = Position::from_fen(fen).expect("valid fen");
    let mut plain = AlphaBeta::new(4);
    plain.set_ordering(false);
    let r1 = plain.search(&mut pos).expect("searchable");

    // With the tactical sort at interior nodes
    let mut pos = Position::from_fen(fen).expect("valid fen");
    let mut sorted = AlphaBeta::new(4);
    let r2 = sorted.search(&mut pos).expect("searchable");

    assert!(
        r2.nodes < r1.nodes,
        "captures-first should reduce nodes: {} vs {}",
        r2.nodes,
        r1.nodes
    );
    assert_eq!(r2.best_move, r1.best_move, "ordering must not change the chosen move");
    assert_eq!(r2.score_cp, r1.score_cp, "ordering must not change the score");
}

#[test]
fn biggest_capture_sorts_to_the_front() {
    // Pawn on e4 can take the d5 queen or push; the capture must come first
    let mut pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("valid fen");
    let mut moves: Vec<BitMove> = pos.legal_moves().iter().copied().collect();
    order_moves(&mut pos, &mut moves, false);
    let first = format!("{}", moves[0]);
    assert_eq!(first, "e4d5", "queen capture should sort first, got {first}");
}

#[test]
fn higher_victim_outranks_lower() {
    // e4 pawn can take the d5 queen or the f5 rook
    let mut pos = Position::from_fen("4k3/8/8/3q1r2/4P3/8/8/4K3 w - - 0 1").expect("valid fen");
    let mut moves: Vec<BitMove> = pos.legal_moves().iter().copied().collect();
    order_moves(&mut pos, &mut moves, false);
    let ucis: Vec<String> = moves.iter().map(|m| format!("{m}")).collect();
    let queen_at = ucis.iter().position(|u| u == "e4d5").expect("Qxd5 is legal");
    let rook_at = ucis.iter().position(|u| u == "e4f5").expect("Rxf5 is legal");
    assert!(
        queen_at < rook_at,
        "queen capture should outrank rook capture: {queen_at} vs {rook_at}"
    );
}

#[test]
fn equal_keys_keep_generation_order() {
    // Every start-position move is quiet, so all keys tie at zero and the
    // sort must change nothing
    let mut pos = Position::startpos();
    let generated: Vec<BitMove> = pos.legal_moves().iter().copied().collect();
    let mut moves = generated.clone();
    order_moves(&mut pos, &mut moves, false);
    assert_eq!(moves, generated, "an all-quiet move list must keep generation order");
}

#[test]
fn quiet_moves_keep_their_order_behind_a_capture() {
    // Only the pawn capture is tactical here; everything else must trail it
    // in generation order
    let mut pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("valid fen");
    let generated: Vec<BitMove> = pos.legal_moves().iter().copied().collect();
    let quiet: Vec<BitMove> = generated.iter().copied().filter(|m| !m.is_capture()).collect();
    let mut moves = generated;
    order_moves(&mut pos, &mut moves, false);
    let first = format!("{}", moves[0]);
    assert_eq!(first, "e4d5", "the lone capture should sort first, got {first}");
    assert_eq!(
        &moves[1..],
        &quiet[..],
        "quiet moves must keep generation order behind the capture"
    );
}

#[test]
fn check_probe_promotes_checking_moves() {
    // Ra8 is the only check here; with probing on it joins the tactical bucket
    let mut pos = Position::from_fen("7k/8/8/8/8/8/8/R5K1 w - - 0 1").expect("valid fen");
    let mut moves: Vec<BitMove> = pos.legal_moves().iter().copied().collect();
    order_moves(&mut pos, &mut moves, true);
    let first = format!("{}", moves[0]);
    assert_eq!(first, "a1a8", "the checking rook lift should sort first, got {first}");
}
