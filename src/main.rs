use std::io::{self, Read};

use clap::{Parser as ClapParser, Subcommand};
use predicate_lang::cli::{self, CheckOptions, CheckResult, CliError};
use predicate_lang::{Data, predicate};

#[derive(ClapParser)]
#[command(name = "predicate")]
#[command(about = "Evaluate predicate expressions against JSON data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression against JSON input
    Check {
        expression: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the result
        #[arg(short, long)]
        pretty: bool,

        /// Only check that the expression parses
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the parsed tree of an expression
    Parse { expression: String },
}

fn main() {
    env_logger::init();

    let outcome = match Cli::parse().command {
        Commands::Check {
            expression,
            input,
            pretty,
            syntax_only,
        } => read_input(input, syntax_only).and_then(|input| {
            check(
                CheckOptions {
                    expression,
                    input,
                    syntax_only,
                },
                pretty,
            )
        }),
        Commands::Parse { expression } => predicate::parse(&expression)
            .map(|tree| println!("{tree:#?}"))
            .map_err(CliError::from),
    };

    if let Err(e) = outcome {
        log::debug!("predicate failed: {e:?}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// `--input` wins; otherwise piped stdin is used. A terminal means no data.
fn read_input(input: Option<String>, syntax_only: bool) -> Result<Option<String>, CliError> {
    if input.is_some() || syntax_only || atty::is(atty::Stream::Stdin) {
        return Ok(input);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}

fn check(options: CheckOptions, pretty: bool) -> Result<(), CliError> {
    let value = match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => {
            println!("Syntax is valid");
            return Ok(());
        }
        CheckResult::Evaluated(value) => value,
    };

    let json = serde_json::Value::from(Data::from(value));
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    }
    .map_err(CliError::Output)?;
    println!("{rendered}");
    Ok(())
}
