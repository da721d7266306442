//! Fixed-depth game-tree search for tyro.

pub mod search;

pub use search::{INF, SearchResult, Searcher};
