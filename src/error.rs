//! Error types for Algokit

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
