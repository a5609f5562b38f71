//! Script runner for executing .atk files

use std::fs;
use std::path::Path;

use crate::catalog::Registry;
use crate::engine::{execute_command, ExecutionContext, ExecutionResult, ResultData};
use crate::error::{Result, ToolkitError};
use crate::output::{format_output, OutputFormat};
use crate::parser::{parse_script, Command, Script};

/// Result of script execution
#[derive(Debug)]
pub struct ScriptResult {
    /// All results from executed statements
    pub results: Vec<ExecutionResult>,
    /// Total statements executed
    pub statements_executed: usize,
    /// Whether the script completed successfully
    pub success: bool,
    /// Error message if script failed
    pub error: Option<String>,
}

/// Script runner that manages script execution
pub struct ScriptRunner {
    /// Execution context (output format, verbosity)
    exec_ctx: ExecutionContext,
    /// Catalog the script runs against
    registry: Registry,
}

impl ScriptRunner {
    /// Create a new script runner over the built-in catalog
    pub fn new(exec_ctx: ExecutionContext) -> Self {
        Self {
            exec_ctx,
            registry: Registry::builtin(),
        }
    }

    /// Replace the catalog (for ad hoc entries)
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Load and run a script file
    pub fn run_file(&mut self, path: &Path) -> Result<ScriptResult> {
        // Validate file extension
        if path.extension().is_none_or(|e| e != "atk") {
            return Err(ToolkitError::ExecutionError(format!(
                "Script file must have .atk extension: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(ToolkitError::IoError)?;
        let script = parse_script(&content)?;
        self.run_script(&script)
    }

    /// Run a parsed script, printing each non-empty result
    pub fn run_script(&mut self, script: &Script) -> Result<ScriptResult> {
        let mut results = Vec::new();
        let mut statements_executed = 0;

        for cmd in &script.statements {
            match execute_command(cmd, &self.registry, &self.exec_ctx) {
                Ok(result) => {
                    statements_executed += 1;

                    match &result.data {
                        ResultData::Empty => {}
                        ResultData::Message(msg) if self.exec_ctx.verbose => {
                            println!("{}", msg);
                        }
                        _ => {
                            println!("{}", format_output(&result, &self.exec_ctx.output_format));
                        }
                    }

                    results.push(result);
                }
                Err(e) => {
                    return Ok(ScriptResult {
                        results,
                        statements_executed,
                        success: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(ScriptResult {
            results,
            statements_executed,
            success: true,
            error: None,
        })
    }

    /// The catalog this runner executes against
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Get the output format
    pub fn output_format(&self) -> &OutputFormat {
        &self.exec_ctx.output_format
    }
}

/// Explain a script without executing
pub fn explain_script(script: &Script) -> Vec<String> {
    script
        .statements
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("{}. {}", i + 1, explain_command(cmd)))
        .collect()
}

fn explain_command(cmd: &Command) -> String {
    match cmd {
        Command::List => "LIST (catalog overview)".to_string(),
        Command::Show(name) => format!("SHOW {} (print the listing)", name),
        Command::Describe(name) => format!("DESCRIBE {} (entry metadata)", name),
        Command::Run(r) => {
            let graph = match &r.graph {
                Some(lit) => format!("inline graph with {} nodes", lit.entries.len()),
                None => "the sample graph".to_string(),
            };
            format!(
                "RUN {}{}{} on {}",
                r.name,
                r.start
                    .as_ref()
                    .map(|s| format!(" FROM {}", s))
                    .unwrap_or_default(),
                r.goal
                    .as_ref()
                    .map(|g| format!(" TO {}", g))
                    .unwrap_or_default(),
                graph
            )
        }
    }
}
