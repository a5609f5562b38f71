//! Small graph-algorithms collection
//!
//! The companion pieces to the search module: Dijkstra with predecessor
//! reconstruction, connected components over the undirected view, and a
//! structural summary. `sample_graph` is the built-in demonstration graph
//! used when a command supplies no graph literal.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::algorithms::search::SearchOutcome;
use crate::error::{Result, ToolkitError};
use crate::graph::{Graph, WeightedGraph};

/// Structural facts about a weighted graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_weight: u64,
    pub component_count: usize,
    /// Declared nodes with no outgoing edges
    pub sinks: Vec<String>,
}

/// The built-in demonstration graph.
///
/// Cheapest route from A to Z is A -> C -> B -> D -> Z at cost 10.
pub fn sample_graph() -> WeightedGraph {
    let mut g = WeightedGraph::new();
    g.add_edge("A", "B", 4);
    g.add_edge("A", "C", 2);
    g.add_edge("B", "D", 5);
    g.add_edge("C", "B", 1);
    g.add_edge("C", "D", 8);
    g.add_edge("D", "Z", 2);
    g.add_node("Z");
    g
}

/// Dijkstra's shortest path from `source` to `target`.
///
/// Distance-map variant with predecessor reconstruction, in contrast to
/// the path-carrying frontier of uniform-cost search.
pub fn dijkstra(graph: &WeightedGraph, source: &str, target: &str) -> Result<SearchOutcome> {
    if !graph.contains(source) {
        return Err(ToolkitError::UnknownNode(source.to_string()));
    }
    if !graph.contains(target) {
        return Err(ToolkitError::UnknownNode(target.to_string()));
    }

    let mut dist: BTreeMap<String, u64> = BTreeMap::new();
    let mut prev: BTreeMap<String, String> = BTreeMap::new();
    let mut heap: BinaryHeap<Reverse<(u64, String)>> = BinaryHeap::new();

    dist.insert(source.to_string(), 0);
    heap.push(Reverse((0, source.to_string())));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if cost > *dist.get(&node).unwrap_or(&u64::MAX) {
            continue;
        }
        if node == target {
            break;
        }
        for (next, weight) in graph.neighbors(&node) {
            let candidate = cost + weight;
            if candidate < *dist.get(next).unwrap_or(&u64::MAX) {
                dist.insert(next.clone(), candidate);
                prev.insert(next.clone(), node.clone());
                heap.push(Reverse((candidate, next.clone())));
            }
        }
    }

    let cost = match dist.get(target) {
        Some(c) => *c,
        None => {
            return Err(ToolkitError::NoPath {
                from: source.to_string(),
                to: target.to_string(),
            })
        }
    };

    let mut path = vec![target.to_string()];
    while let Some(p) = prev.get(path.last().map(|s| s.as_str()).unwrap_or(target)) {
        path.push(p.clone());
    }
    path.reverse();

    Ok(SearchOutcome { path, cost })
}

/// Connected components of the undirected view of `graph`.
///
/// Each component is sorted internally; components are ordered by their
/// smallest node. Edges to undeclared nodes are ignored.
pub fn connected_components(graph: &Graph) -> Vec<Vec<String>> {
    // Symmetrize edges between declared nodes
    let mut links: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for node in graph.nodes() {
        links.entry(node).or_default();
    }
    for node in graph.nodes() {
        for next in graph.neighbors(node) {
            if graph.contains(next) {
                links.entry(node).or_default().push(next);
                links.entry(next.as_str()).or_default().push(node);
            }
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut components = Vec::new();

    for node in graph.nodes() {
        if seen.contains(node) {
            continue;
        }
        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        seen.insert(node);
        queue.push_back(node);
        while let Some(current) = queue.pop_front() {
            component.push(current.to_string());
            if let Some(adjacent) = links.get(current) {
                for &next in adjacent {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        component.sort();
        components.push(component);
    }

    components
}

/// Summarize a weighted graph's structure
pub fn summarize(graph: &WeightedGraph) -> GraphSummary {
    let sinks = graph
        .nodes()
        .filter(|n| graph.neighbors(n).is_empty())
        .map(|n| n.to_string())
        .collect();

    GraphSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        total_weight: graph.total_weight(),
        component_count: connected_components(&graph.unweighted()).len(),
        sinks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dijkstra_on_sample_graph() {
        let outcome = dijkstra(&sample_graph(), "A", "Z").unwrap();
        assert_eq!(outcome.path, vec!["A", "C", "B", "D", "Z"]);
        assert_eq!(outcome.cost, 10);
    }

    #[test]
    fn test_dijkstra_agrees_with_ucs() {
        let g = sample_graph();
        let a = dijkstra(&g, "A", "D").unwrap();
        let b = crate::algorithms::search::ucs(&g, "A", "D").unwrap();
        assert_eq!(a.cost, b.cost);
        assert_eq!(a.path, b.path);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let err = dijkstra(&sample_graph(), "Z", "A").unwrap_err();
        assert!(matches!(err, ToolkitError::NoPath { .. }));
    }

    #[test]
    fn test_components_split_and_sorted() {
        let mut g = Graph::new();
        g.add_edge("B", "A");
        g.add_node("A");
        g.add_edge("C", "D");
        g.add_node("D");
        g.add_node("E");
        let components = connected_components(&g);
        assert_eq!(
            components,
            vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["C".to_string(), "D".to_string()],
                vec!["E".to_string()],
            ]
        );
    }

    #[test]
    fn test_components_ignore_undeclared_targets() {
        let mut g = Graph::new();
        g.add_edge("A", "ghost");
        let components = connected_components(&g);
        assert_eq!(components, vec![vec!["A".to_string()]]);
    }

    #[test]
    fn test_summary_of_sample_graph() {
        let summary = summarize(&sample_graph());
        assert_eq!(summary.node_count, 5);
        assert_eq!(summary.edge_count, 6);
        assert_eq!(summary.total_weight, 22);
        assert_eq!(summary.component_count, 1);
        assert_eq!(summary.sinks, vec!["Z".to_string()]);
    }
}
