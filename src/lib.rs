// Engine ladder: random, greedy, minimax and alpha-beta over one apply/undo board
pub mod board;
pub mod registry;
pub mod search;

// Re-exports kept minimal for callers that only pick and run an engine
pub use board::Position;
pub use registry::EngineOption;
pub use search::{Engine, SearchResult};
