//! Algokit CLI - print and run classic search algorithms

use anyhow::Context;
use clap::Parser;

use algokit::cli::{Args, SubCommand};
use algokit::engine::executor::{ExecutionResult, ListingInfo, ResultData};
use algokit::script::{
    explain_script, has_errors, validate_script, ScriptRunner, ValidationOptions,
    ValidationSeverity,
};
use algokit::{
    execute_command, format_output, parse_command, parse_script, ExecutionContext, OutputFormat,
    Registry, Snippet,
};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let output_format = if args.json {
        OutputFormat::Json
    } else if args.plain {
        OutputFormat::Plain
    } else {
        OutputFormat::Human
    };
    let ctx = ExecutionContext {
        output_format,
        verbose: args.verbose,
    };
    let registry = Registry::builtin();

    match args.command {
        SubCommand::List => {
            let cmd = parse_command("LIST")?;
            let result = execute_command(&cmd, &registry, &ctx)?;
            println!("{}", format_output(&result, &ctx.output_format));
            Ok(())
        }

        SubCommand::Show { name } => {
            let cmd = parse_command(&format!("SHOW {}", name))
                .with_context(|| format!("invalid entry name: {}", name))?;
            let result = execute_command(&cmd, &registry, &ctx)?;
            println!("{}", format_output(&result, &ctx.output_format));
            Ok(())
        }

        SubCommand::Describe { name } => {
            let cmd = parse_command(&format!("DESCRIBE {}", name))
                .with_context(|| format!("invalid entry name: {}", name))?;
            let result = execute_command(&cmd, &registry, &ctx)?;
            println!("{}", format_output(&result, &ctx.output_format));
            Ok(())
        }

        SubCommand::Run { command } => {
            let cmd = parse_command(&command)?;
            let result = execute_command(&cmd, &registry, &ctx)?;
            println!("{}", format_output(&result, &ctx.output_format));
            Ok(())
        }

        SubCommand::Script { file } => {
            // Read and parse the script first for validation
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read script: {}", file.display()))?;
            let script = parse_script(&content)?;

            let validation_errors =
                validate_script(&script, &registry, &ValidationOptions::default());

            for err in validation_errors
                .iter()
                .filter(|e| e.severity == ValidationSeverity::Warning)
            {
                eprintln!("Warning: {}", err);
            }

            if has_errors(&validation_errors) {
                for err in validation_errors
                    .iter()
                    .filter(|e| e.severity == ValidationSeverity::Error)
                {
                    eprintln!("Error: {}", err);
                }
                anyhow::bail!("Script validation failed");
            }

            let mut runner = ScriptRunner::new(ctx.clone());
            let result = runner.run_file(&file)?;

            if !result.success {
                if let Some(err) = result.error {
                    anyhow::bail!(err);
                }
            }

            if args.verbose {
                println!(
                    "\n--- Script completed: {} statements executed ---",
                    result.statements_executed
                );
            }

            Ok(())
        }

        SubCommand::View { file, description } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read file: {}", file.display()))?;
            let snippet = match description {
                Some(desc) => Snippet::with_description(content, desc),
                None => Snippet::new(content),
            };
            let name = file
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "snippet".to_string());

            let result = ExecutionResult {
                data: ResultData::Listing(ListingInfo {
                    name,
                    description: snippet.description().map(String::from),
                    source: snippet.source().to_string(),
                }),
                message: None,
            };
            println!("{}", format_output(&result, &ctx.output_format));
            Ok(())
        }

        SubCommand::Explain { input } => {
            // Check if input is a script file or a command
            let path = std::path::Path::new(&input);

            if path.exists() && path.extension().is_some_and(|e| e == "atk") {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read script: {}", path.display()))?;
                let script = parse_script(&content)?;

                println!("Script: {}", path.display());
                println!("Statements: {}\n", script.statements.len());

                for explanation in explain_script(&script) {
                    println!("{}", explanation);
                }

                let validation_errors =
                    validate_script(&script, &registry, &ValidationOptions::default());
                if !validation_errors.is_empty() {
                    println!("\nValidation Notes:");
                    for err in &validation_errors {
                        println!("  - {}", err);
                    }
                }
            } else {
                let cmd = parse_command(&input)?;
                let script = algokit::Script {
                    statements: vec![cmd],
                };
                for explanation in explain_script(&script) {
                    println!("{}", explanation);
                }
            }

            Ok(())
        }

        #[cfg(feature = "repl")]
        SubCommand::Repl => {
            algokit::repl::run_repl()?;
            Ok(())
        }
        #[cfg(not(feature = "repl"))]
        SubCommand::Repl => {
            eprintln!("REPL support not enabled. Rebuild with --features repl");
            std::process::exit(1);
        }
    }
}
