//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "algokit")]
#[command(author, version, about = "Print and run classic search algorithms", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable display enhancement (plain listings)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// List the algorithm catalog
    List,

    /// Print an algorithm's source listing
    Show {
        /// Catalog entry name (e.g. dfs, bfs, ucs, wumpus)
        name: String,
    },

    /// Show an entry's description and kind
    Describe {
        /// Catalog entry name
        name: String,
    },

    /// Execute a single command (e.g. "RUN dfs FROM A ON {A: [B], B: []}")
    Run {
        /// The command to execute
        command: String,
    },

    /// Run an Algokit script file (.atk)
    Script {
        /// Path to the .atk script file
        file: PathBuf,
    },

    /// Display a source file as a snippet
    View {
        /// Path to the file to display
        file: PathBuf,

        /// Description shown above the listing
        #[arg(long)]
        description: Option<String>,
    },

    /// Explain a script or command without executing
    Explain {
        /// Command string or path to an .atk script file
        input: String,
    },

    /// Start interactive REPL mode
    Repl,
}
