//! Static algorithm implementations
//!
//! These functions are the runnable form of the catalog entries; the
//! snippet listings in the catalog document them.

pub mod analysis;
pub mod search;

pub use analysis::{connected_components, dijkstra, sample_graph, summarize, GraphSummary};
pub use search::{bfs, dfs, ucs, SearchOutcome};
