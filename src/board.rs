use std::fmt;

use pleco::{BitMove, Board as PlecoBoard, MoveList, Piece, PieceType, Player, SQ};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid FEN '{fen}': {reason}")]
pub struct FenError {
    pub fen: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    Draw,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

fn file_char(sq: SQ) -> char {
    (b'a' + (sq.0 & 7)) as char
}

fn rank_char(sq: SQ) -> char {
    (b'1' + (sq.0 >> 3)) as char
}

fn piece_letter(pt: PieceType) -> Option<char> {
    match pt {
        PieceType::N => Some('N'),
        PieceType::B => Some('B'),
        PieceType::R => Some('R'),
        PieceType::Q => Some('Q'),
        PieceType::K => Some('K'),
        _ => None,
    }
}

/// Castling is the only legal king move that crosses two or more files. Holds
/// for king-to-castled-square and king-takes-rook encodings alike.
pub(crate) fn is_castle_move(mover: PieceType, src: SQ, dest: SQ) -> bool {
    mover == PieceType::K
        && (src.0 >> 3) == (dest.0 >> 3)
        && ((src.0 & 7) as i32 - (dest.0 & 7) as i32).abs() >= 2
}

/// Pawns only ever reach the last rank by promoting.
pub(crate) fn is_promotion_move(mover: PieceType, dest: SQ) -> bool {
    mover == PieceType::P && matches!(dest.0 >> 3, 0 | 7)
}

/// Reversible position: a pleco board plus the stack of moves applied through it.
/// Search mutates one instance in place, so every `make` must be paired with an
/// `unmake` on every control path before the caller sees the position again.
pub struct Position {
    board: PlecoBoard,
    stack: Vec<BitMove>,
    history: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        let board = PlecoBoard::start_pos();
        Self { history: vec![board.zobrist()], board, stack: Vec::with_capacity(128) }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        PlecoBoard::from_fen(fen)
            .map(|b| Self { history: vec![b.zobrist()], board: b, stack: Vec::with_capacity(128) })
            .map_err(|e| FenError { fen: fen.to_string(), reason: format!("{e:?}") })
    }

    pub fn fen(&self) -> String {
        self.board.fen()
    }

    pub fn zobrist(&self) -> u64 {
        self.board.zobrist()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.board.generate_moves()
    }

    pub fn make(&mut self, mv: BitMove) {
        self.board.apply_move(mv);
        self.stack.push(mv);
        self.history.push(self.board.zobrist());
    }

    pub fn unmake(&mut self) {
        if self.stack.pop().is_some() {
            self.board.undo_move();
            self.history.pop();
        }
    }

    /// Number of moves applied through this wrapper and not yet undone.
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    pub fn side_to_move(&self) -> Player {
        self.board.turn()
    }

    pub fn in_check(&self) -> bool {
        self.board.in_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.in_check() && self.board.generate_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.board.in_check() && self.board.generate_moves().is_empty()
    }

    /// Fifty-move rule, or the current position occurring for a third time.
    pub fn is_draw(&self) -> bool {
        if self.board.rule_50() >= 100 {
            return true;
        }
        let key = self.board.zobrist();
        self.history.iter().filter(|&&k| k == key).count() >= 3
    }

    pub fn is_terminal(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    pub fn status(&self) -> GameStatus {
        if self.legal_moves().is_empty() {
            if self.in_check() {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            }
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    pub fn piece_at(&self, sq: SQ) -> Piece {
        self.board.piece_at_sq(sq)
    }

    pub fn count_piece(&self, player: Player, pt: PieceType) -> u8 {
        self.board.count_piece(player, pt)
    }

    /// Moves carry no gives-check flag, so probe by applying and undoing.
    pub fn gives_check(&mut self, mv: BitMove) -> bool {
        self.make(mv);
        let check = self.board.in_check();
        self.unmake();
        check
    }

    pub fn find_uci(&self, uci: &str) -> Option<BitMove> {
        self.legal_moves().iter().copied().find(|m| format!("{}", m) == uci)
    }

    /// Standard algebraic notation for a legal move in this position.
    pub fn san(&mut self, mv: BitMove) -> String {
        let src = mv.get_src();
        let dest = mv.get_dest();
        let mover = self.board.piece_at_sq(src).type_of();

        let mut core = if is_castle_move(mover, src, dest) {
            if (dest.0 & 7) > (src.0 & 7) { "O-O".to_string() } else { "O-O-O".to_string() }
        } else {
            let capture = mv.is_capture();
            let mut s = String::new();
            if let Some(c) = piece_letter(mover) {
                s.push(c);
                // Minimal disambiguation among same-type moves to the same square
                let mut others = false;
                let mut same_file = false;
                let mut same_rank = false;
                for m in self.legal_moves().iter() {
                    if *m != mv
                        && m.get_dest() == dest
                        && self.board.piece_at_sq(m.get_src()).type_of() == mover
                    {
                        others = true;
                        if (m.get_src().0 & 7) == (src.0 & 7) {
                            same_file = true;
                        }
                        if (m.get_src().0 >> 3) == (src.0 >> 3) {
                            same_rank = true;
                        }
                    }
                }
                if others {
                    if !same_file {
                        s.push(file_char(src));
                    } else if !same_rank {
                        s.push(rank_char(src));
                    } else {
                        s.push(file_char(src));
                        s.push(rank_char(src));
                    }
                }
            } else if capture {
                // Pawn captures name the source file
                s.push(file_char(src));
            }
            if capture {
                s.push('x');
            }
            s.push(file_char(dest));
            s.push(rank_char(dest));
            if is_promotion_move(mover, dest) {
                s.push('=');
                s.push(piece_letter(mv.promo_piece()).unwrap_or('Q'));
            }
            s
        };

        self.make(mv);
        if self.board.in_check() {
            core.push(if self.legal_moves().is_empty() { '#' } else { '+' });
        }
        self.unmake();
        core
    }

    /// ASCII board expanded from the FEN placement field, white at the bottom.
    pub fn pretty(&self) -> String {
        let fen = self.fen();
        let placement = fen.split_whitespace().next().unwrap_or("");
        let mut out = String::new();
        for (i, row) in placement.split('/').take(8).enumerate() {
            out.push((b'8' - i as u8) as char);
            out.push(' ');
            for c in row.chars() {
                match c.to_digit(10) {
                    Some(n) => {
                        for _ in 0..n {
                            out.push('.');
                            out.push(' ');
                        }
                    }
                    None => {
                        out.push(c);
                        out.push(' ');
                    }
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h");
        out
    }
}
