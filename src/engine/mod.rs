//! Execution engine for Algokit commands

pub mod executor;

pub use executor::{
    execute_command, ExecutionContext, ExecutionResult, ResultData,
};
