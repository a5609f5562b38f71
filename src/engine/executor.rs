//! Command executor
//!
//! Executes parsed commands against a registry. RUN dispatches on the
//! entry's runner kind; catalog commands read the registry only. Every
//! failure propagates to the caller unmodified.

use serde::{Deserialize, Serialize};

use crate::algorithms::{sample_graph, GraphSummary};
use crate::catalog::{Registry, Runner};
use crate::error::{Result, ToolkitError};
use crate::graph::{Graph, WeightedGraph};
use crate::output::OutputFormat;
use crate::parser::{Command, RunCommand};

/// Execution context containing runtime configuration
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Human,
            verbose: false,
        }
    }
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub data: ResultData,
    pub message: Option<String>,
}

impl ExecutionResult {
    fn from_data(data: ResultData) -> Self {
        Self {
            data,
            message: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ResultData {
    /// Catalog overview (LIST)
    Catalog(Vec<CatalogEntryInfo>),
    /// A source listing (SHOW)
    Listing(ListingInfo),
    /// Entry metadata (DESCRIBE)
    Description(DescriptionInfo),
    /// Visit order of a traversal run
    Traversal(TraversalInfo),
    /// Cheapest path of a search run
    Path(PathInfo),
    /// Node groups of a partition run
    Components(ComponentsInfo),
    /// Structural facts of a report run
    Report(GraphSummary),
    Message(String),
    Empty,
}

/// One line of the catalog overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntryInfo {
    pub name: String,
    pub description: String,
    pub kind: String,
}

/// A listing payload with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingInfo {
    pub name: String,
    pub description: Option<String>,
    pub source: String,
}

/// Entry metadata without the payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionInfo {
    pub name: String,
    pub description: Option<String>,
    pub kind: String,
    /// Character count of the stored listing
    pub chars: usize,
}

/// Visit order produced by a traversal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalInfo {
    pub algorithm: String,
    pub start: String,
    pub order: Vec<String>,
}

/// Path produced by a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathInfo {
    pub algorithm: String,
    pub start: String,
    pub goal: String,
    pub path: Vec<String>,
    pub cost: u64,
}

/// Components produced by a partition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentsInfo {
    pub components: Vec<Vec<String>>,
}

/// Execute a parsed command against a registry
pub fn execute_command(
    cmd: &Command,
    registry: &Registry,
    _ctx: &ExecutionContext,
) -> Result<ExecutionResult> {
    match cmd {
        Command::List => execute_list(registry),
        Command::Show(name) => execute_show(name, registry),
        Command::Describe(name) => execute_describe(name, registry),
        Command::Run(run) => execute_run(run, registry),
    }
}

fn execute_list(registry: &Registry) -> Result<ExecutionResult> {
    let entries = registry
        .entries()
        .map(|e| CatalogEntryInfo {
            name: e.name.clone(),
            description: e.snippet.description().unwrap_or_default().to_string(),
            kind: e.runner.kind().to_string(),
        })
        .collect();
    Ok(ExecutionResult::from_data(ResultData::Catalog(entries)))
}

fn execute_show(name: &str, registry: &Registry) -> Result<ExecutionResult> {
    let entry = registry.get(name)?;
    Ok(ExecutionResult::from_data(ResultData::Listing(
        ListingInfo {
            name: entry.name.clone(),
            description: entry.snippet.description().map(String::from),
            source: entry.snippet.source().to_string(),
        },
    )))
}

fn execute_describe(name: &str, registry: &Registry) -> Result<ExecutionResult> {
    let entry = registry.get(name)?;
    Ok(ExecutionResult::from_data(ResultData::Description(
        DescriptionInfo {
            name: entry.name.clone(),
            description: entry.snippet.description().map(String::from),
            kind: entry.runner.kind().to_string(),
            chars: entry.snippet.len(),
        },
    )))
}

fn execute_run(run: &RunCommand, registry: &Registry) -> Result<ExecutionResult> {
    let entry = registry.get(&run.name)?;

    match entry.runner {
        Runner::Traversal(f) => {
            let start = require_start(run)?;
            let graph = unweighted_input(run);
            let order = f(&graph, start)?;
            Ok(ExecutionResult::from_data(ResultData::Traversal(
                TraversalInfo {
                    algorithm: run.name.clone(),
                    start: start.to_string(),
                    order,
                },
            )))
        }
        Runner::Search(f) => {
            let start = require_start(run)?;
            let goal = run.goal.as_deref().ok_or_else(|| {
                ToolkitError::ExecutionError(format!("RUN {} requires TO <node>", run.name))
            })?;
            let graph = weighted_input(run);
            let outcome = f(&graph, start, goal)?;
            Ok(ExecutionResult::from_data(ResultData::Path(PathInfo {
                algorithm: run.name.clone(),
                start: start.to_string(),
                goal: goal.to_string(),
                path: outcome.path,
                cost: outcome.cost,
            })))
        }
        Runner::Partition(f) => {
            let graph = unweighted_input(run);
            Ok(ExecutionResult::from_data(ResultData::Components(
                ComponentsInfo {
                    components: f(&graph),
                },
            )))
        }
        Runner::Report(f) => {
            let graph = weighted_input(run);
            Ok(ExecutionResult::from_data(ResultData::Report(f(&graph))))
        }
        Runner::Listing => Err(ToolkitError::ExecutionError(format!(
            "'{}' is a listing-only entry; there is nothing to run",
            run.name
        ))),
    }
}

fn require_start(run: &RunCommand) -> Result<&str> {
    run.start.as_deref().ok_or_else(|| {
        ToolkitError::ExecutionError(format!("RUN {} requires FROM <node>", run.name))
    })
}

// Weighted literals feed traversals with weights dropped; unweighted
// literals feed searches at unit cost. ON omitted means the sample graph.

fn unweighted_input(run: &RunCommand) -> Graph {
    match &run.graph {
        Some(lit) => Graph::from_literal(lit),
        None => sample_graph().unweighted(),
    }
}

fn weighted_input(run: &RunCommand) -> WeightedGraph {
    match &run.graph {
        Some(lit) => WeightedGraph::from_literal(lit),
        None => sample_graph(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_command;

    fn run(input: &str) -> Result<ExecutionResult> {
        let cmd = parse_command(input).unwrap();
        execute_command(&cmd, &Registry::builtin(), &ExecutionContext::default())
    }

    #[test]
    fn test_list_catalog() {
        let result = run("LIST").unwrap();
        match result.data {
            ResultData::Catalog(entries) => {
                assert_eq!(entries.len(), 7);
                assert!(entries.iter().any(|e| e.name == "dfs"));
                assert!(entries.iter().any(|e| e.kind == "listing"));
            }
            _ => panic!("Expected Catalog result"),
        }
    }

    #[test]
    fn test_show_listing() {
        let result = run("SHOW dfs").unwrap();
        match result.data {
            ResultData::Listing(info) => {
                assert_eq!(info.name, "dfs");
                assert!(info.source.contains("fn dfs"));
                assert!(info.description.is_some());
            }
            _ => panic!("Expected Listing result"),
        }
    }

    #[test]
    fn test_describe_reports_kind_and_size() {
        let result = run("DESCRIBE ucs").unwrap();
        match result.data {
            ResultData::Description(info) => {
                assert_eq!(info.kind, "search");
                assert!(info.chars > 0);
            }
            _ => panic!("Expected Description result"),
        }
    }

    #[test]
    fn test_run_dfs_scenario() {
        let result =
            run("RUN dfs FROM A ON {A: [B, C], B: [D, E], C: [F], D: [], E: [F], F: []}").unwrap();
        match result.data {
            ResultData::Traversal(info) => {
                assert_eq!(info.order, vec!["A", "B", "D", "E", "F", "C"]);
            }
            _ => panic!("Expected Traversal result"),
        }
    }

    #[test]
    fn test_run_bfs_scenario() {
        let result =
            run("RUN bfs FROM A ON {A: [B, C], B: [D, E], C: [F], D: [], E: [F], F: []}").unwrap();
        match result.data {
            ResultData::Traversal(info) => {
                assert_eq!(info.order, vec!["A", "B", "C", "D", "E", "F"]);
            }
            _ => panic!("Expected Traversal result"),
        }
    }

    #[test]
    fn test_run_ucs_scenario() {
        let result = run(
            "RUN ucs FROM A TO D ON {A: [(B, 2), (C, 4)], B: [(C, 1), (D, 7)], C: [(D, 3)], D: []}",
        )
        .unwrap();
        match result.data {
            ResultData::Path(info) => {
                assert_eq!(info.path, vec!["A", "B", "C", "D"]);
                assert_eq!(info.cost, 6);
            }
            _ => panic!("Expected Path result"),
        }
    }

    #[test]
    fn test_run_on_sample_graph_by_default() {
        let result = run("RUN dijkstra FROM A TO Z").unwrap();
        match result.data {
            ResultData::Path(info) => {
                assert_eq!(info.path, vec!["A", "C", "B", "D", "Z"]);
                assert_eq!(info.cost, 10);
            }
            _ => panic!("Expected Path result"),
        }
    }

    #[test]
    fn test_traversal_ignores_weights() {
        let result = run("RUN bfs FROM A ON {A: [(B, 9)], B: []}").unwrap();
        match result.data {
            ResultData::Traversal(info) => assert_eq!(info.order, vec!["A", "B"]),
            _ => panic!("Expected Traversal result"),
        }
    }

    #[test]
    fn test_search_defaults_to_unit_cost() {
        let result = run("RUN ucs FROM A TO C ON {A: [B], B: [C], C: []}").unwrap();
        match result.data {
            ResultData::Path(info) => assert_eq!(info.cost, 2),
            _ => panic!("Expected Path result"),
        }
    }

    #[test]
    fn test_run_components() {
        let result = run("RUN components ON {A: [B], B: [], C: [], D: [C]}").unwrap();
        match result.data {
            ResultData::Components(info) => {
                assert_eq!(info.components.len(), 2);
            }
            _ => panic!("Expected Components result"),
        }
    }

    #[test]
    fn test_run_summary() {
        let result = run("RUN summary").unwrap();
        match result.data {
            ResultData::Report(summary) => {
                assert_eq!(summary.node_count, 5);
                assert_eq!(summary.total_weight, 22);
            }
            _ => panic!("Expected Report result"),
        }
    }

    #[test]
    fn test_run_listing_only_entry_fails() {
        let err = run("RUN wumpus").unwrap_err();
        assert!(matches!(err, ToolkitError::ExecutionError(_)));
    }

    #[test]
    fn test_run_unknown_algorithm() {
        let err = run("RUN astar FROM A").unwrap_err();
        assert!(matches!(err, ToolkitError::UnknownAlgorithm(_)));
    }

    #[test]
    fn test_run_traversal_requires_from() {
        let err = run("RUN dfs").unwrap_err();
        assert!(matches!(err, ToolkitError::ExecutionError(_)));
    }

    #[test]
    fn test_run_search_requires_to() {
        let err = run("RUN ucs FROM A").unwrap_err();
        assert!(matches!(err, ToolkitError::ExecutionError(_)));
    }

    #[test]
    fn test_run_unknown_start_node() {
        let err = run("RUN dfs FROM Q ON {A: [B], B: []}").unwrap_err();
        assert!(matches!(err, ToolkitError::UnknownNode(_)));
    }
}
