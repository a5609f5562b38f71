//! Interactive REPL implementation

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::catalog::Registry;
use crate::engine::{execute_command, ExecutionContext};
use crate::error::Result;
use crate::output::format_output;
use crate::parser::parse_command;

pub fn run_repl() -> Result<()> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| crate::error::ToolkitError::ExecutionError(e.to_string()))?;

    println!("Algokit v{} - Interactive Mode", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' to quit\n");

    let exec_ctx = ExecutionContext::default();
    let registry = Registry::builtin();

    loop {
        let readline = rl.readline("algokit> ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" | "q" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" | "?" => {
                        print_help();
                        continue;
                    }
                    "clear" | "cls" => {
                        print!("\x1B[2J\x1B[1;1H");
                        continue;
                    }
                    _ => {}
                }

                let _ = rl.add_history_entry(line);

                match parse_command(line) {
                    Ok(cmd) => match execute_command(&cmd, &registry, &exec_ctx) {
                        Ok(result) => {
                            let output = format_output(&result, &exec_ctx.output_format);
                            if !output.is_empty() {
                                println!("{}\n", output);
                            }
                        }
                        Err(e) => {
                            eprintln!("Error: {}\n", e);
                        }
                    },
                    Err(e) => {
                        eprintln!("Parse error: {}\n", e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"
Algokit Commands
================

CATALOG:
  LIST                            - List all catalog entries
  SHOW <name>                     - Print an entry's source listing
  DESCRIBE <name>                 - Show an entry's description and kind

RUNNING:
  RUN dfs FROM A ON {{A: [B], B: []}}
                                  - Traverse an inline graph
  RUN ucs FROM A TO D ON {{A: [(B, 2)], B: [(D, 1)], D: []}}
                                  - Find a cheapest path
  RUN components ON {{A: [B], B: [], C: []}}
                                  - Split into connected components
  RUN summary                     - Summarize the sample graph

Graphs are adjacency lists; edges are plain nodes or (node, cost) pairs.
Omitting ON runs against the built-in sample graph.

REPL Commands:
  help, ?                         - Show this help
  clear, cls                      - Clear screen
  exit, quit, q                   - Exit REPL
"#
    );
}
