//! Human-readable output formatting

use crate::engine::executor::{ExecutionResult, ResultData};
use crate::render;
use crate::snippet::Snippet;

const RULE_WIDTH: usize = 60;

pub fn format_human(result: &ExecutionResult, enhanced: bool) -> String {
    match &result.data {
        ResultData::Catalog(entries) => {
            let mut output = String::from("Algorithm Catalog\n-----------------\n");
            for entry in entries {
                output.push_str(&format!(
                    "  {:<12} {:<10} {}\n",
                    entry.name, entry.kind, entry.description
                ));
            }
            output
        }
        ResultData::Listing(info) => {
            let mut output = String::new();
            match &info.description {
                Some(desc) => output.push_str(&format!("{} - {}\n", info.name, desc)),
                None => output.push_str(&format!("{}\n", info.name)),
            }
            output.push_str(&"=".repeat(RULE_WIDTH));
            output.push('\n');
            if enhanced {
                output.push_str(&render::display(&Snippet::new(info.source.clone())));
            } else {
                output.push_str(&info.source);
            }
            if !output.ends_with('\n') {
                output.push('\n');
            }
            output.push_str(&"=".repeat(RULE_WIDTH));
            output
        }
        ResultData::Description(info) => {
            format!(
                "{}\n  Kind:        {}\n  Listing:     {} characters\n  Description: {}",
                info.name,
                info.kind,
                info.chars,
                info.description.as_deref().unwrap_or("(none)")
            )
        }
        ResultData::Traversal(info) => {
            format!(
                "{} traversal from '{}' ({} nodes)\n  {}",
                info.algorithm,
                info.start,
                info.order.len(),
                info.order.join(" -> ")
            )
        }
        ResultData::Path(info) => {
            format!(
                "{} path from '{}' to '{}'\n  {} (total cost {})",
                info.algorithm,
                info.start,
                info.goal,
                info.path.join(" -> "),
                info.cost
            )
        }
        ResultData::Components(info) => {
            if info.components.is_empty() {
                return "No components (empty graph)".to_string();
            }
            let mut output = String::from("Connected components\n--------------------\n");
            for (i, component) in info.components.iter().enumerate() {
                output.push_str(&format!("  {}: {}\n", i + 1, component.join(", ")));
            }
            output
        }
        ResultData::Report(summary) => {
            format!(
                "Graph Summary\n\
                 -------------\n\
                 Nodes:        {}\n\
                 Edges:        {}\n\
                 Total weight: {}\n\
                 Components:   {}\n\
                 Sinks:        {}",
                summary.node_count,
                summary.edge_count,
                summary.total_weight,
                summary.component_count,
                if summary.sinks.is_empty() {
                    "(none)".to_string()
                } else {
                    summary.sinks.join(", ")
                }
            )
        }
        ResultData::Message(msg) => msg.clone(),
        ResultData::Empty => String::new(),
    }
}
