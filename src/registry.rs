use log::warn;

use crate::search::{AlphaBeta, Engine, Greedy, Minimax, Random};

/// One selectable entry in the engine menu. `ctor: None` marks the
/// human/no-engine sentinel: moves for that player come from elsewhere.
#[derive(Clone, Copy)]
pub struct EngineOption {
    pub name: &'static str,
    pub version: &'static str,
    pub ctor: Option<fn() -> Box<dyn Engine>>,
}

pub const DEFAULT_VERSION: &str = "v0";

fn random() -> Box<dyn Engine> {
    Box::new(Random::new())
}

fn greedy() -> Box<dyn Engine> {
    Box::new(Greedy)
}

fn minimax() -> Box<dyn Engine> {
    Box::new(Minimax::new(3))
}

fn alphabeta() -> Box<dyn Engine> {
    Box::new(AlphaBeta::new(4))
}

fn alphabeta_sharp() -> Box<dyn Engine> {
    let mut e = AlphaBeta::new(4);
    e.set_root_window_sharing(true);
    e.set_probe_checks(true);
    e.set_shallow_tiebreak(true);
    Box::new(e)
}

// Weakest first; unknown keys resolve to the first entry.
static CATALOG: [EngineOption; 6] = [
    EngineOption { name: "Random", version: "v0", ctor: Some(random) },
    EngineOption { name: "Greedy", version: "v1", ctor: Some(greedy) },
    EngineOption { name: "Minimax", version: "v2", ctor: Some(minimax) },
    EngineOption { name: "Alpha-Beta", version: "v3", ctor: Some(alphabeta) },
    EngineOption { name: "Alpha-Beta Sharp", version: "v4", ctor: Some(alphabeta_sharp) },
    EngineOption { name: "Human", version: "human", ctor: None },
];

/// The fixed menu of selectable engines.
pub fn catalog() -> &'static [EngineOption] {
    &CATALOG
}

/// Exact lookup by version key. An unknown key falls back to the default
/// (weakest) entry instead of failing; the fallback is logged.
pub fn find(version: &str) -> &'static EngineOption {
    if let Some(opt) = CATALOG.iter().find(|o| o.version == version) {
        return opt;
    }
    warn!("unknown engine version '{version}', falling back to '{DEFAULT_VERSION}'");
    &CATALOG[0]
}

/// Construct the engine behind a version key; `None` for the human sentinel.
pub fn build(version: &str) -> Option<Box<dyn Engine>> {
    find(version).ctor.map(|ctor| ctor())
}
