use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use clap::Parser;
use lang_parser::{errors::errors::Error, format_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing::info;

/// Tokenizes and parses a source file, then dumps the resulting tree.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source file to parse
    file: PathBuf,

    /// Dump the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    // Structured logging, filtered by RUST_LOG and defaulting to warnings only
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", args.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    match run(&source, &file_name, args.tokens) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", format_error(&error, &source));
            ExitCode::FAILURE
        }
    }
}

fn run(source: &str, file_name: &str, dump_tokens: bool) -> Result<(), Error> {
    let tokens = tokenize(source, Some(file_name))?;
    info!(file = file_name, token_count = tokens.len(), "tokenized");

    if dump_tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return Ok(());
    }

    let ast = parse(tokens)?;
    info!(file = file_name, statement_count = ast.len(), "parsed");

    println!("{:#?}", ast);
    Ok(())
}
