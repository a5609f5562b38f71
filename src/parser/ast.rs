//! Abstract Syntax Tree for the Algokit command language

use serde::{Deserialize, Serialize};

/// Top-level command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Command {
    /// List the catalog
    List,
    /// Show an entry's source listing
    Show(String),
    /// Show an entry's description and kind
    Describe(String),
    /// Run an entry against a graph
    Run(RunCommand),
}

/// A script is a sequence of commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub statements: Vec<Command>,
}

/// RUN command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunCommand {
    /// Catalog entry to run
    pub name: String,
    /// Start node (FROM clause)
    pub start: Option<String>,
    /// Goal node (TO clause)
    pub goal: Option<String>,
    /// Inline graph (ON clause); the sample graph when absent
    pub graph: Option<GraphLiteral>,
}

/// An inline adjacency-list graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLiteral {
    pub entries: Vec<GraphEntry>,
}

impl GraphLiteral {
    /// Whether any edge carries an explicit weight
    pub fn is_weighted(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.edges.iter().any(|edge| edge.weight.is_some()))
    }

    /// Whether the literal declares no nodes at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One adjacency entry: a node and its outgoing edges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEntry {
    pub node: String,
    pub edges: Vec<EdgeLiteral>,
}

/// One outgoing edge, optionally weighted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeLiteral {
    pub to: String,
    pub weight: Option<u64>,
}
