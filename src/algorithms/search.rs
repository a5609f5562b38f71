//! Classic search algorithms: DFS, BFS, and uniform-cost search

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolkitError};
use crate::graph::{Graph, WeightedGraph};

/// A found path and its total cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub path: Vec<String>,
    pub cost: u64,
}

/// Depth-first traversal from `start`.
///
/// Stack-based; neighbor lists are expanded in their listed order, so the
/// visit order matches the recursive formulation. Nodes are never
/// revisited.
pub fn dfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    if !graph.contains(start) {
        return Err(ToolkitError::UnknownNode(start.to_string()));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start.to_string()];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        order.push(node.clone());

        // Reverse push keeps the listed order on a LIFO stack
        for next in graph.neighbors(&node).iter().rev() {
            if !visited.contains(next) {
                stack.push(next.clone());
            }
        }
    }

    Ok(order)
}

/// Breadth-first traversal from `start`, in level order.
pub fn bfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    if !graph.contains(start) {
        return Err(ToolkitError::UnknownNode(start.to_string()));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited.insert(start.to_string());
    queue.push_back(start.to_string());

    while let Some(node) = queue.pop_front() {
        order.push(node.clone());
        for next in graph.neighbors(&node) {
            if visited.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
    }

    Ok(order)
}

/// Uniform-cost search from `start` to `goal`.
///
/// Cheapest-first frontier; each frontier entry carries the path that
/// reached it, so the result needs no reconstruction pass. Ties break on
/// node name for deterministic output.
pub fn ucs(graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
    if !graph.contains(start) {
        return Err(ToolkitError::UnknownNode(start.to_string()));
    }
    if !graph.contains(goal) {
        return Err(ToolkitError::UnknownNode(goal.to_string()));
    }

    let mut frontier: BinaryHeap<Reverse<(u64, String, Vec<String>)>> = BinaryHeap::new();
    let mut expanded: HashSet<String> = HashSet::new();

    frontier.push(Reverse((0, start.to_string(), vec![start.to_string()])));

    while let Some(Reverse((cost, node, path))) = frontier.pop() {
        if !expanded.insert(node.clone()) {
            continue;
        }
        if node == goal {
            return Ok(SearchOutcome { path, cost });
        }
        for (next, weight) in graph.neighbors(&node) {
            if !expanded.contains(next) {
                let mut next_path = path.clone();
                next_path.push(next.clone());
                frontier.push(Reverse((cost + weight, next.clone(), next_path)));
            }
        }
    }

    Err(ToolkitError::NoPath {
        from: start.to_string(),
        to: goal.to_string(),
    })
}
