use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Position;
use crate::search::eval::{self, EvalMode};
use crate::search::{legal_or_over, Engine, SearchError, SearchResult};

/// Uniform pick among the legal moves. No recursion, no evaluation; the only
/// engine allowed to be non-deterministic.
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self { rng: SmallRng::from_entropy() }
    }

    /// Fixed seed for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Random {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn evaluate(&self, pos: &Position) -> i32 {
        eval::eval_cp(pos, EvalMode::Null)
    }

    fn search(&mut self, pos: &mut Position) -> Result<SearchResult, SearchError> {
        let start = Instant::now();
        let moves = legal_or_over(pos)?;
        let best_move = moves[self.rng.gen_range(0..moves.len())];
        Ok(SearchResult { best_move, score_cp: 0, nodes: 0, elapsed: start.elapsed() })
    }
}
