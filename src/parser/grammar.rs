//! Pest grammar parser for the Algokit command language

use pest::Parser;
use pest_derive::Parser;

use crate::error::{Result, ToolkitError};
use crate::parser::ast::*;

#[derive(Parser)]
#[grammar = "../grammar/algokit.pest"]
pub struct ToolkitParser;

/// Parse a command string into an AST
pub fn parse_command(input: &str) -> Result<Command> {
    let pairs = ToolkitParser::parse(Rule::command, input)
        .map_err(|e| ToolkitError::ParseError(e.to_string()))?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| ToolkitError::ParseError("Empty input".to_string()))?;

    let statement = pair
        .into_inner()
        .next()
        .ok_or_else(|| ToolkitError::ParseError("Expected statement".to_string()))?;

    parse_statement(statement)
}

/// Parse a script (multiple statements) into an AST
pub fn parse_script(input: &str) -> Result<Script> {
    let pairs = ToolkitParser::parse(Rule::script, input)
        .map_err(|e| ToolkitError::ParseError(e.to_string()))?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| ToolkitError::ParseError("Empty script".to_string()))?;

    let mut statements = Vec::new();

    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::statement {
            statements.push(parse_statement(inner)?);
        }
    }

    Ok(Script { statements })
}

fn parse_statement(pair: pest::iterators::Pair<Rule>) -> Result<Command> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ToolkitError::ParseError("Expected statement content".to_string()))?;

    match inner.as_rule() {
        Rule::list_cmd => Ok(Command::List),
        Rule::show_cmd => Ok(Command::Show(parse_name(inner)?)),
        Rule::describe_cmd => Ok(Command::Describe(parse_name(inner)?)),
        Rule::run_cmd => Ok(Command::Run(parse_run_cmd(inner)?)),
        _ => Err(ToolkitError::ParseError(format!(
            "Unexpected rule in statement: {:?}",
            inner.as_rule()
        ))),
    }
}

fn parse_name(pair: pest::iterators::Pair<Rule>) -> Result<String> {
    let name = pair
        .into_inner()
        .next()
        .ok_or_else(|| ToolkitError::ParseError("Expected algorithm name".to_string()))?;
    Ok(name.as_str().to_lowercase())
}

fn parse_run_cmd(pair: pest::iterators::Pair<Rule>) -> Result<RunCommand> {
    let mut inner = pair.into_inner();

    let name = inner
        .next()
        .ok_or_else(|| ToolkitError::ParseError("Expected algorithm name after RUN".to_string()))?
        .as_str()
        .to_lowercase();

    let mut start = None;
    let mut goal = None;
    let mut graph = None;

    for item in inner {
        match item.as_rule() {
            Rule::from_clause => {
                start = Some(parse_clause_node(item)?);
            }
            Rule::to_clause => {
                goal = Some(parse_clause_node(item)?);
            }
            Rule::on_clause => {
                let literal = item.into_inner().next().ok_or_else(|| {
                    ToolkitError::ParseError("Expected graph literal after ON".to_string())
                })?;
                graph = Some(parse_graph_literal(literal)?);
            }
            _ => {}
        }
    }

    Ok(RunCommand {
        name,
        start,
        goal,
        graph,
    })
}

fn parse_clause_node(pair: pest::iterators::Pair<Rule>) -> Result<String> {
    let node = pair
        .into_inner()
        .next()
        .ok_or_else(|| ToolkitError::ParseError("Expected node in clause".to_string()))?;
    Ok(node.as_str().to_string())
}

fn parse_graph_literal(pair: pest::iterators::Pair<Rule>) -> Result<GraphLiteral> {
    let mut entries = Vec::new();

    for entry_pair in pair.into_inner() {
        if entry_pair.as_rule() == Rule::graph_entry {
            entries.push(parse_graph_entry(entry_pair)?);
        }
    }

    Ok(GraphLiteral { entries })
}

fn parse_graph_entry(pair: pest::iterators::Pair<Rule>) -> Result<GraphEntry> {
    let mut inner = pair.into_inner();

    let node = inner
        .next()
        .ok_or_else(|| ToolkitError::ParseError("Expected node in graph entry".to_string()))?
        .as_str()
        .to_string();

    let mut edges = Vec::new();
    for edge_pair in inner {
        if edge_pair.as_rule() == Rule::edge {
            edges.push(parse_edge(edge_pair)?);
        }
    }

    Ok(GraphEntry { node, edges })
}

fn parse_edge(pair: pest::iterators::Pair<Rule>) -> Result<EdgeLiteral> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ToolkitError::ParseError("Expected edge content".to_string()))?;

    match inner.as_rule() {
        Rule::node => Ok(EdgeLiteral {
            to: inner.as_str().to_string(),
            weight: None,
        }),
        Rule::weighted_edge => {
            let mut parts = inner.into_inner();
            let to = parts
                .next()
                .ok_or_else(|| {
                    ToolkitError::ParseError("Expected node in weighted edge".to_string())
                })?
                .as_str()
                .to_string();
            let weight = parts
                .next()
                .ok_or_else(|| {
                    ToolkitError::ParseError("Expected weight in weighted edge".to_string())
                })?
                .as_str()
                .parse::<u64>()
                .map_err(|_| ToolkitError::ParseError("Invalid edge weight".to_string()))?;
            Ok(EdgeLiteral {
                to,
                weight: Some(weight),
            })
        }
        _ => Err(ToolkitError::ParseError("Invalid edge".to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
