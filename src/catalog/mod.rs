//! Algorithm catalog
//!
//! The registry maps a name to an entry pairing a snippet listing with its
//! runnable form. The statically compiled runner is authoritative; the
//! listing documents it. Listing-only entries (the Wumpus World Prolog
//! program) have a payload but nothing to run.

pub mod listings;

use std::collections::BTreeMap;

use crate::algorithms::{
    self, GraphSummary, SearchOutcome,
};
use crate::error::{Result, ToolkitError};
use crate::graph::{Graph, WeightedGraph};
use crate::snippet::Snippet;

/// The runnable form of a catalog entry
#[derive(Clone, Copy)]
pub enum Runner {
    /// Visits nodes from a start node (dfs, bfs)
    Traversal(fn(&Graph, &str) -> Result<Vec<String>>),
    /// Finds a cheapest path between two nodes (ucs, dijkstra)
    Search(fn(&WeightedGraph, &str, &str) -> Result<SearchOutcome>),
    /// Splits a graph into node groups (components)
    Partition(fn(&Graph) -> Vec<Vec<String>>),
    /// Reports structural facts (summary)
    Report(fn(&WeightedGraph) -> GraphSummary),
    /// Payload only; nothing to run
    Listing,
}

impl Runner {
    pub fn kind(&self) -> &'static str {
        match self {
            Runner::Traversal(_) => "traversal",
            Runner::Search(_) => "search",
            Runner::Partition(_) => "partition",
            Runner::Report(_) => "report",
            Runner::Listing => "listing",
        }
    }

    pub fn is_runnable(&self) -> bool {
        !matches!(self, Runner::Listing)
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

/// A named algorithm: its listing and its runnable form
#[derive(Debug, Clone)]
pub struct AlgorithmEntry {
    pub name: String,
    pub snippet: Snippet,
    pub runner: Runner,
}

impl AlgorithmEntry {
    pub fn new(name: impl Into<String>, snippet: Snippet, runner: Runner) -> Self {
        Self {
            name: name.into(),
            snippet,
            runner,
        }
    }
}

/// Name-keyed catalog of algorithm entries
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, AlgorithmEntry>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry pre-populated with the bundled algorithms
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(AlgorithmEntry::new(
            "dfs",
            Snippet::with_description(listings::DFS, "Depth-first search traversal"),
            Runner::Traversal(algorithms::dfs),
        ));
        registry.register(AlgorithmEntry::new(
            "bfs",
            Snippet::with_description(listings::BFS, "Breadth-first search traversal"),
            Runner::Traversal(algorithms::bfs),
        ));
        registry.register(AlgorithmEntry::new(
            "ucs",
            Snippet::with_description(listings::UCS, "Uniform-cost search for a cheapest path"),
            Runner::Search(algorithms::ucs),
        ));
        registry.register(AlgorithmEntry::new(
            "dijkstra",
            Snippet::with_description(
                listings::DIJKSTRA,
                "Dijkstra shortest path with predecessor reconstruction",
            ),
            Runner::Search(algorithms::dijkstra),
        ));
        registry.register(AlgorithmEntry::new(
            "components",
            Snippet::with_description(
                listings::COMPONENTS,
                "Connected components of the undirected view",
            ),
            Runner::Partition(algorithms::connected_components),
        ));
        registry.register(AlgorithmEntry::new(
            "summary",
            Snippet::with_description(listings::SUMMARY, "Structural summary of a graph"),
            Runner::Report(algorithms::summarize),
        ));
        registry.register(AlgorithmEntry::new(
            "wumpus",
            Snippet::with_description(
                listings::WUMPUS,
                "Wumpus World game logic in Prolog (listing only)",
            ),
            Runner::Listing,
        ));

        registry
    }

    /// Add or replace an entry
    pub fn register(&mut self, entry: AlgorithmEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Result<&AlgorithmEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| ToolkitError::UnknownAlgorithm(name.to_string()))
    }

    /// Entry names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// All entries in name order
    pub fn entries(&self) -> impl Iterator<Item = &AlgorithmEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = Registry::builtin();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec!["bfs", "components", "dfs", "dijkstra", "summary", "ucs", "wumpus"]
        );
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let registry = Registry::builtin();
        let err = registry.get("astar").unwrap_err();
        assert!(matches!(err, ToolkitError::UnknownAlgorithm(_)));
    }

    #[test]
    fn test_listings_carry_their_function() {
        let registry = Registry::builtin();
        assert!(registry.get("dfs").unwrap().snippet.contains("fn dfs"));
        assert!(registry.get("ucs").unwrap().snippet.contains("BinaryHeap"));
    }

    #[test]
    fn test_wumpus_is_listing_only_prolog() {
        let registry = Registry::builtin();
        let entry = registry.get("wumpus").unwrap();
        assert!(!entry.runner.is_runnable());
        assert!(entry.snippet.contains(":-"));
        assert!(entry.snippet.contains("wumpus"));
    }

    #[test]
    fn test_every_entry_has_a_description() {
        for entry in Registry::builtin().entries() {
            assert!(entry.snippet.description().is_some(), "{}", entry.name);
        }
    }

    #[test]
    fn test_ad_hoc_registration() {
        let mut registry = Registry::new();
        registry.register(AlgorithmEntry::new(
            "fib",
            Snippet::with_description("fn fib(n: u64) -> u64 { todo!() }", "Fibonacci"),
            Runner::Listing,
        ));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("fib").unwrap().snippet.description(),
            Some("Fibonacci")
        );
    }

    #[test]
    fn test_failed_lookup_leaves_registry_usable() {
        let registry = Registry::builtin();
        let before = registry.len();
        let _ = registry.get("nope");
        assert_eq!(registry.len(), before);
        assert!(registry.get("dfs").is_ok());
    }
}
