use std::time::Instant;

use pleco::Player;

use crate::board::Position;
use crate::search::eval::{self, EvalMode};
use crate::search::{legal_or_over, Engine, SearchError, SearchResult, SearchStats};

/// Fixed-depth minimax alternating maximize/minimize by side to move. Depth
/// counts the root ply, so `new(2)` weighs my move and your reply. The first
/// move found with the best score is kept.
pub struct Minimax {
    depth: u32,
    eval_mode: EvalMode,
    mate_aware: bool,
}

impl Minimax {
    pub fn new(depth: u32) -> Self {
        Self { depth: depth.max(1), eval_mode: EvalMode::Material, mate_aware: false }
    }

    pub fn set_eval_mode(&mut self, mode: EvalMode) {
        self.eval_mode = mode;
    }

    /// Score finished leaves with the mate/draw sentinels instead of the
    /// static terms. Off by default, like the historic variant.
    pub fn set_mate_aware(&mut self, on: bool) {
        self.mate_aware = on;
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn leaf_cp(&self, pos: &Position) -> i32 {
        if self.mate_aware {
            if let Some(score) = eval::terminal_cp(pos) {
                return score;
            }
        }
        eval::eval_cp(pos, self.eval_mode)
    }

    fn minimax(&self, pos: &mut Position, depth: u32, stats: &mut SearchStats) -> i32 {
        stats.nodes += 1;
        if depth == 0 {
            return self.leaf_cp(pos);
        }
        let moves = pos.legal_moves();
        if moves.is_empty() || pos.is_draw() {
            return self.leaf_cp(pos);
        }
        let maximizing = pos.side_to_move() == Player::White;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves.iter() {
            pos.make(*mv);
            let score = self.minimax(pos, depth - 1, stats);
            pos.unmake();
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }
}

impl Engine for Minimax {
    fn name(&self) -> &'static str {
        "Minimax"
    }

    fn evaluate(&self, pos: &Position) -> i32 {
        self.leaf_cp(pos)
    }

    fn search(&mut self, pos: &mut Position) -> Result<SearchResult, SearchError> {
        let start = Instant::now();
        let moves = legal_or_over(pos)?;
        let maximizing = pos.side_to_move() == Player::White;
        let mut stats = SearchStats::default();
        let mut best_move = moves[0];
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        for &mv in &moves {
            pos.make(mv);
            let score = self.minimax(pos, self.depth - 1, &mut stats);
            pos.unmake();
            let better = if maximizing { score > best_score } else { score < best_score };
            if better {
                best_score = score;
                best_move = mv;
            }
        }
        Ok(SearchResult {
            best_move,
            score_cp: best_score,
            nodes: stats.nodes,
            elapsed: start.elapsed(),
        })
    }
}
