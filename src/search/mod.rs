use std::time::Duration;

use pleco::BitMove;
use serde::Serialize;
use thiserror::Error;

use crate::board::{GameStatus, Position};

pub mod eval;
pub mod ordering;
pub mod psqt;

pub mod alphabeta;
pub mod greedy;
pub mod minimax;
pub mod random;

pub use alphabeta::AlphaBeta;
pub use greedy::Greedy;
pub use minimax::Minimax;
pub use random::Random;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search called on a terminal position ({0})")]
    TerminalPosition(GameStatus),
}

/// One chosen move plus the statistics of the call that chose it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: BitMove,
    pub score_cp: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Per-call node accumulator, threaded through the recursion by reference.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Caller-side record of one engine move, ready for JSONL persistence.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub ply: u32,
    pub notation: String,
    pub elapsed_ms: u64,
    pub nodes: u64,
    pub eval_pawns: f64,
}

impl HistoryEntry {
    pub fn new(id: u64, ply: u32, notation: String, result: &SearchResult) -> Self {
        Self {
            id,
            ply,
            notation,
            elapsed_ms: result.elapsed.as_millis() as u64,
            nodes: result.nodes,
            eval_pawns: f64::from(result.score_cp) / 100.0,
        }
    }
}

/// A complete move-selection strategy. Variants share this surface and nothing
/// else; the registry picks between them by version key.
pub trait Engine {
    fn name(&self) -> &'static str;

    /// Static score of the position in centipawns, white-positive. Exposed for
    /// diagnostics; `search` scores its leaves with the same evaluation.
    fn evaluate(&self, pos: &Position) -> i32;

    /// Pick a move for the side to move. Fails loudly on a finished position;
    /// callers are expected to check `status()` before asking for a move.
    fn search(&mut self, pos: &mut Position) -> Result<SearchResult, SearchError>;
}

/// Legal moves of a position that is still in play, or the loud error every
/// engine raises when asked to move in a finished game.
pub(crate) fn legal_or_over(pos: &Position) -> Result<Vec<BitMove>, SearchError> {
    let status = pos.status();
    if status != GameStatus::Ongoing {
        return Err(SearchError::TerminalPosition(status));
    }
    Ok(pos.legal_moves().iter().copied().collect())
}
