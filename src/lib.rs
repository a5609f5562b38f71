//! Algokit - printable, runnable reference implementations of classic
//! search algorithms
//!
//! Each bundled algorithm is a catalog entry pairing a source listing (a
//! [`Snippet`]) with a statically compiled runner. Listings can be printed,
//! sliced, and searched like strings; runners are driven through a small
//! command language.
//!
//! # Example
//!
//! ```no_run
//! use algokit::{execute_command, format_output, parse_command, ExecutionContext, OutputFormat, Registry};
//!
//! let cmd = parse_command("RUN dfs FROM A ON {A: [B, C], B: [], C: []}").unwrap();
//! let registry = Registry::builtin();
//! let result = execute_command(&cmd, &registry, &ExecutionContext::default()).unwrap();
//! println!("{}", format_output(&result, &OutputFormat::Human));
//! ```

pub mod algorithms;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod graph;
pub mod output;
pub mod parser;
pub mod render;
pub mod script;
pub mod snippet;

#[cfg(feature = "repl")]
pub mod repl;

pub use algorithms::{GraphSummary, SearchOutcome};
pub use catalog::{AlgorithmEntry, Registry, Runner};
pub use engine::{execute_command, ExecutionContext, ExecutionResult, ResultData};
pub use error::{Result, ToolkitError};
pub use graph::{Graph, WeightedGraph};
pub use output::{format_output, OutputFormat};
pub use parser::{parse_command, parse_script, Command, Script};
pub use render::{PlainRenderer, Renderer};
pub use script::{validate_script, ScriptResult, ScriptRunner};
pub use snippet::Snippet;
