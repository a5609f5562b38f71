//! Script validation
//!
//! Resolves names and checks clause shapes before anything executes, so a
//! script fails fast instead of halfway through.

use crate::catalog::{Registry, Runner};
use crate::parser::{Command, RunCommand, Script};

/// Issues found during script validation
#[derive(Debug, Clone)]
pub struct ScriptValidationError {
    pub line: Option<usize>,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for ScriptValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            ValidationSeverity::Error => "ERROR",
            ValidationSeverity::Warning => "WARNING",
        };
        if let Some(line) = self.line {
            write!(f, "{} (statement {}): {}", prefix, line, self.message)
        } else {
            write!(f, "{}: {}", prefix, self.message)
        }
    }
}

/// Validation options
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Treat weight mismatches as errors instead of warnings
    pub strict_weights: bool,
    /// Maximum statements allowed in one script
    pub max_statements: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            strict_weights: false,
            max_statements: 200,
        }
    }
}

/// Validate a script against a registry before execution
pub fn validate_script(
    script: &Script,
    registry: &Registry,
    options: &ValidationOptions,
) -> Vec<ScriptValidationError> {
    let mut errors = Vec::new();

    if script.statements.len() > options.max_statements {
        errors.push(ScriptValidationError {
            line: None,
            message: format!(
                "Script has {} statements (maximum {})",
                script.statements.len(),
                options.max_statements
            ),
            severity: ValidationSeverity::Error,
        });
    }

    for (i, cmd) in script.statements.iter().enumerate() {
        validate_command(cmd, registry, options, &mut errors, i + 1);
    }

    errors
}

fn validate_command(
    cmd: &Command,
    registry: &Registry,
    options: &ValidationOptions,
    errors: &mut Vec<ScriptValidationError>,
    line: usize,
) {
    match cmd {
        Command::List => {}
        Command::Show(name) | Command::Describe(name) => {
            if registry.get(name).is_err() {
                push_unknown(errors, line, name);
            }
        }
        Command::Run(run) => {
            let entry = match registry.get(&run.name) {
                Ok(entry) => entry,
                Err(_) => {
                    push_unknown(errors, line, &run.name);
                    return;
                }
            };
            validate_run(run, &entry.runner, options, errors, line);
        }
    }
}

fn validate_run(
    run: &RunCommand,
    runner: &Runner,
    options: &ValidationOptions,
    errors: &mut Vec<ScriptValidationError>,
    line: usize,
) {
    let mismatch_severity = if options.strict_weights {
        ValidationSeverity::Error
    } else {
        ValidationSeverity::Warning
    };

    if let Some(graph) = &run.graph {
        if graph.is_empty() {
            errors.push(ScriptValidationError {
                line: Some(line),
                message: format!("RUN {} on an empty graph", run.name),
                severity: ValidationSeverity::Warning,
            });
        }
    }

    match runner {
        Runner::Traversal(_) => {
            if run.start.is_none() {
                errors.push(ScriptValidationError {
                    line: Some(line),
                    message: format!("RUN {} requires FROM <node>", run.name),
                    severity: ValidationSeverity::Error,
                });
            }
            if run.goal.is_some() {
                errors.push(ScriptValidationError {
                    line: Some(line),
                    message: format!("TO clause is ignored by '{}'", run.name),
                    severity: ValidationSeverity::Warning,
                });
            }
            if run.graph.as_ref().is_some_and(|g| g.is_weighted()) {
                errors.push(ScriptValidationError {
                    line: Some(line),
                    message: format!("'{}' ignores edge weights", run.name),
                    severity: mismatch_severity,
                });
            }
        }
        Runner::Search(_) => {
            if run.start.is_none() || run.goal.is_none() {
                errors.push(ScriptValidationError {
                    line: Some(line),
                    message: format!("RUN {} requires FROM <node> and TO <node>", run.name),
                    severity: ValidationSeverity::Error,
                });
            }
            if run
                .graph
                .as_ref()
                .is_some_and(|g| !g.is_weighted() && !g.is_empty())
            {
                errors.push(ScriptValidationError {
                    line: Some(line),
                    message: format!(
                        "'{}' on an unweighted graph assumes unit edge costs",
                        run.name
                    ),
                    severity: mismatch_severity,
                });
            }
        }
        Runner::Partition(_) | Runner::Report(_) => {
            if run.start.is_some() || run.goal.is_some() {
                errors.push(ScriptValidationError {
                    line: Some(line),
                    message: format!("FROM/TO clauses are ignored by '{}'", run.name),
                    severity: ValidationSeverity::Warning,
                });
            }
        }
        Runner::Listing => {
            errors.push(ScriptValidationError {
                line: Some(line),
                message: format!("'{}' is a listing-only entry and cannot be run", run.name),
                severity: ValidationSeverity::Error,
            });
        }
    }
}

fn push_unknown(errors: &mut Vec<ScriptValidationError>, line: usize, name: &str) {
    errors.push(ScriptValidationError {
        line: Some(line),
        message: format!("Unknown algorithm: {}", name),
        severity: ValidationSeverity::Error,
    });
}

/// Check if a script has any validation errors (not just warnings)
pub fn has_errors(errors: &[ScriptValidationError]) -> bool {
    errors
        .iter()
        .any(|e| e.severity == ValidationSeverity::Error)
}

/// Check if a script has any validation warnings
pub fn has_warnings(errors: &[ScriptValidationError]) -> bool {
    errors
        .iter()
        .any(|e| e.severity == ValidationSeverity::Warning)
}
