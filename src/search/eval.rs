use pleco::{Piece, PieceType, Player, SQ};

use crate::board::Position;
use crate::search::psqt;

pub const MATE_SCORE: i32 = 100_000;
pub const DRAW_SCORE: i32 = 0;

const PAWN: i32 = 100;
const KNIGHT: i32 = 320;
const BISHOP: i32 = 330;
const ROOK: i32 = 500;
const QUEEN: i32 = 900;

pub fn piece_value_cp(pt: PieceType) -> i32 {
    match pt {
        PieceType::P => PAWN,
        PieceType::N => KNIGHT,
        PieceType::B => BISHOP,
        PieceType::R => ROOK,
        PieceType::Q => QUEEN,
        _ => 0,
    }
}

/// Which static terms an engine's evaluation includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    /// Always zero. The random engine never consults its evaluator to decide.
    Null,
    Material,
    MaterialPst,
}

fn count(pos: &Position, player: Player, pt: PieceType) -> i32 {
    i32::from(pos.count_piece(player, pt))
}

// Material in centipawns: positive means White has more material.
pub fn material_cp(pos: &Position) -> i32 {
    let w = Player::White;
    let b = Player::Black;
    (count(pos, w, PieceType::P) - count(pos, b, PieceType::P)) * PAWN
        + (count(pos, w, PieceType::N) - count(pos, b, PieceType::N)) * KNIGHT
        + (count(pos, w, PieceType::B) - count(pos, b, PieceType::B)) * BISHOP
        + (count(pos, w, PieceType::R) - count(pos, b, PieceType::R)) * ROOK
        + (count(pos, w, PieceType::Q) - count(pos, b, PieceType::Q)) * QUEEN
}

// Piece-square bonuses in centipawns, white-positive.
pub fn psqt_cp(pos: &Position) -> i32 {
    let mut score = 0;
    for idx in 0..64u8 {
        let sq = SQ(idx);
        let p = pos.piece_at(sq);
        if p == Piece::None {
            continue;
        }
        let side = p.player_lossy();
        let bonus = psqt::psqt_bonus(p.type_of(), side, sq);
        if side == Player::White {
            score += bonus;
        } else {
            score -= bonus;
        }
    }
    score
}

/// Sentinel for finished positions, `None` while the game is still on. Mate
/// favors the side that delivered it, shrunk by the ply it was found at so
/// nearer mates outrank later ones; stalemate and draws are exactly zero.
pub fn terminal_cp(pos: &Position) -> Option<i32> {
    if pos.is_checkmate() {
        let n = pos.ply() as i32;
        let mated_white = pos.side_to_move() == Player::White;
        return Some(if mated_white { -MATE_SCORE + n } else { MATE_SCORE - n });
    }
    if pos.is_stalemate() || pos.is_draw() {
        return Some(DRAW_SCORE);
    }
    None
}

pub fn eval_cp(pos: &Position, mode: EvalMode) -> i32 {
    match mode {
        EvalMode::Null => 0,
        EvalMode::Material => material_cp(pos),
        EvalMode::MaterialPst => material_cp(pos) + psqt_cp(pos),
    }
}
