use std::time::Instant;

use pleco::{BitMove, Player};

use crate::board::Position;
use crate::search::eval::{self, EvalMode, MATE_SCORE};
use crate::search::ordering;
use crate::search::{legal_or_over, Engine, SearchError, SearchResult, SearchStats};

/// Fixed-depth alpha-beta with the same recursive shape as minimax plus a
/// pruning window. Interior nodes order their moves tactically; the root walks
/// moves in generation order and gives each one a full window, so the chosen
/// move and score match plain minimax at equal depth while visiting no more
/// nodes. The sharper toggles below trade that equivalence for strength.
pub struct AlphaBeta {
    depth: u32,
    eval_mode: EvalMode,
    mate_aware: bool,
    order: bool,
    root_window_sharing: bool,
    probe_checks: bool,
    shallow_tiebreak: bool,
}

impl AlphaBeta {
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            eval_mode: EvalMode::MaterialPst,
            mate_aware: true,
            order: true,
            root_window_sharing: false,
            probe_checks: false,
            shallow_tiebreak: false,
        }
    }

    pub fn set_eval_mode(&mut self, mode: EvalMode) {
        self.eval_mode = mode;
    }

    pub fn set_mate_aware(&mut self, on: bool) {
        self.mate_aware = on;
    }

    /// Ordering is an efficiency lever only; turning it off must not change
    /// the move the search returns.
    pub fn set_ordering(&mut self, on: bool) {
        self.order = on;
    }

    /// Thread the narrowing root window across root moves instead of giving
    /// each root move a fresh full window.
    pub fn set_root_window_sharing(&mut self, on: bool) {
        self.root_window_sharing = on;
    }

    /// Spend one make/unmake per move at the root and the ply below it to
    /// rank checking moves with the tactical bucket.
    pub fn set_probe_checks(&mut self, on: bool) {
        self.probe_checks = on;
    }

    /// When a root move ties the best score exactly, keep the one whose
    /// immediate static evaluation looks better for the mover.
    pub fn set_shallow_tiebreak(&mut self, on: bool) {
        self.shallow_tiebreak = on;
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

    fn shallow_cp(&self, pos: &mut Position, mv: BitMove) -> i32 {
        pos.make(mv);
        let score = self.leaf_cp(pos);
        pos.unmake();
        score
    }

    fn alphabeta(
        &self,
        pos: &mut Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;
        if depth == 0 {
            return self.leaf_cp(pos);
        }
        let mut moves: Vec<BitMove> = pos.legal_moves().iter().copied().collect();
        if moves.is_empty() || pos.is_draw() {
            return self.leaf_cp(pos);
        }
        if self.order {
            let probe = self.probe_checks && depth + 1 >= self.depth;
            ordering::order_moves(pos, &mut moves, probe);
        }
        let maximizing = pos.side_to_move() == Player::White;
        if maximizing {
            let mut best = i32::MIN;
            for &mv in &moves {
                pos.make(mv);
                let score = self.alphabeta(pos, depth - 1, alpha, beta, stats);
                pos.unmake();
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for &mv in &moves {
                pos.make(mv);
                let score = self.alphabeta(pos, depth - 1, alpha, beta, stats);
                pos.unmake();
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Engine for AlphaBeta {
    fn name(&self) -> &'static str {
        // The sharp toggles change which move gets picked, so they change
        // the reported name too
        if self.root_window_sharing || self.probe_checks || self.shallow_tiebreak {
            "Alpha-Beta Sharp"
        } else {
            "Alpha-Beta"
        }
    }

    fn evaluate(&self, pos: &Position) -> i32 {
        self.leaf_cp(pos)
    }

    fn search(&mut self, pos: &mut Position) -> Result<SearchResult, SearchError> {
        let start = Instant::now();
        let mut moves = legal_or_over(pos)?;
        if self.order && self.probe_checks {
            ordering::order_moves(pos, &mut moves, true);
        }
        let maximizing = pos.side_to_move() == Player::White;
        let mut stats = SearchStats::default();
        let mut alpha = -MATE_SCORE;
        let mut beta = MATE_SCORE;
        let mut best_move = moves[0];
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        for &mv in &moves {
            pos.make(mv);
            let score = self.alphabeta(pos, self.depth - 1, alpha, beta, &mut stats);
            pos.unmake();
            let mut take = if maximizing { score > best_score } else { score < best_score };
            if !take && self.shallow_tiebreak && score == best_score && mv != best_move {
                let cand = self.shallow_cp(pos, mv);
                let held = self.shallow_cp(pos, best_move);
                take = if maximizing { cand > held } else { cand < held };
            }
            if take {
                best_score = score;
                best_move = mv;
            }
            if self.root_window_sharing {
                if maximizing {
                    alpha = alpha.max(best_score);
                } else {
                    beta = beta.min(best_score);
                }
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
