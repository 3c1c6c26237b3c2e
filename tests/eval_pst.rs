use pleco::{PieceType, Player, SQ};

use patzer::board::Position;
use patzer::search::eval::{eval_cp, EvalMode};
use patzer::search::psqt::psqt_bonus;

#[test]
fn knight_center_better_than_rim() {
    // White: Kh1 plus a knight on d4 vs a1; Black: Ka8. Material identical.
    let center = Position::from_fen("k7/8/8/8/3N4/8/8/7K w - - 0 1").expect("valid fen");
    let rim = Position::from_fen("k7/8/8/8/8/8/8/N6K w - - 0 1").expect("valid fen");
    let c = eval_cp(&center, EvalMode::MaterialPst);
    let r = eval_cp(&rim, EvalMode::MaterialPst);
    assert!(c > r, "center eval {c} should be greater than rim {r}");
}

#[test]
fn pawn_advanced_better_than_back() {
    // White pawn on e4 vs e2; kings only otherwise.
    let advanced = Position::from_fen("k7/8/8/8/4P3/8/8/7K w - - 0 1").expect("valid fen");
    let back = Position::from_fen("k7/8/8/8/8/8/4P3/7K w - - 0 1").expect("valid fen");
    let a = eval_cp(&advanced, EvalMode::MaterialPst);
    let b = eval_cp(&back, EvalMode::MaterialPst);
    assert!(a > b, "advanced pawn eval {a} should exceed back pawn {b}");
}

#[test]
fn bonus_is_mirrored_between_sides() {
    // e4 for White and e5 for Black are the same square after the per-side flip
    let e4 = SQ(28);
    let e5 = SQ(36);
    let w = psqt_bonus(PieceType::N, Player::White, e4);
    let b = psqt_bonus(PieceType::N, Player::Black, e5);
    assert_eq!(w, b, "knight bonus should mirror: e4 white {w} vs e5 black {b}");

    // Same for a home-rank pawn: e2 vs e7
    let e2 = SQ(12);
    let e7 = SQ(52);
    let w = psqt_bonus(PieceType::P, Player::White, e2);
    let b = psqt_bonus(PieceType::P, Player::Black, e7);
    assert_eq!(w, b, "pawn bonus should mirror: e2 white {w} vs e7 black {b}");
}

#[test]
fn mirrored_position_scores_zero() {
    // Startpos is symmetric, so material plus placement must cancel exactly.
    let pos = Position::startpos();
    let cp = eval_cp(&pos, EvalMode::MaterialPst);
    assert_eq!(cp, 0, "symmetric startpos should score 0, got {cp}");
}
