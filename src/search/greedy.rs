use std::time::Instant;

use pleco::Player;

use crate::board::Position;
use crate::search::eval::{self, EvalMode};
use crate::search::{legal_or_over, Engine, SearchError, SearchResult, SearchStats};

/// One ply of lookahead: apply each move, take the material count, undo, and
/// keep the best immediate score for the mover. Ties go to the first move
/// found, and every candidate evaluation counts as a node.
pub struct Greedy;

impl Engine for Greedy {
    fn name(&self) -> &'static str {
        "Greedy"
    }

    fn evaluate(&self, pos: &Position) -> i32 {
        eval::eval_cp(pos, EvalMode::Material)
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
            stats.nodes += 1;
            let score = self.evaluate(pos);
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
