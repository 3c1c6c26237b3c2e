use std::cmp::Reverse;

use pleco::{BitMove, Piece, PieceType};

use crate::board::{is_castle_move, is_promotion_move, Position};
use crate::search::eval::piece_value_cp;

const CAPTURE_BASE: i32 = 10_000;
const PROMO_BASE: i32 = 5_000;
const CASTLE_BONUS: i32 = 1_000;
const CHECK_BONUS: i32 = 500;

/// Value of the piece a capture removes. The one capture that lands on an
/// empty square is en passant, which removes a pawn.
pub fn victim_value_cp(pos: &Position, mv: BitMove) -> i32 {
    let victim = pos.piece_at(mv.get_dest());
    if victim == Piece::None {
        piece_value_cp(PieceType::P)
    } else {
        piece_value_cp(victim.type_of())
    }
}

fn move_key(pos: &mut Position, mv: BitMove, probe_checks: bool) -> i32 {
    let src = mv.get_src();
    let dest = mv.get_dest();
    let mover = pos.piece_at(src).type_of();
    let mut key = 0;
    if mv.is_capture() {
        key += CAPTURE_BASE + victim_value_cp(pos, mv);
    }
    if is_promotion_move(mover, dest) {
        key += PROMO_BASE + piece_value_cp(mv.promo_piece());
    }
    if is_castle_move(mover, src, dest) {
        key += CASTLE_BONUS;
    }
    if probe_checks && pos.gives_check(mv) {
        key += CHECK_BONUS;
    }
    key
}

/// Stable tactical sort: captures first (bigger victims earlier), then
/// promotions and castles ahead of quiet moves; checking moves join the
/// tactical bucket when `probe_checks` is set, at the price of one
/// make/unmake per move. Ordering only changes the visit order, never which
/// move a search returns.
pub fn order_moves(pos: &mut Position, moves: &mut Vec<BitMove>, probe_checks: bool) {
    if moves.len() <= 1 {
        return;
    }
    moves.sort_by_cached_key(|&m| Reverse(move_key(pos, m, probe_checks)));
}
