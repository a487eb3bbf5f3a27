use std::fs;

use clap::Parser as ArgParser;
use climb::{DEFAULT_MAX_DEPTH, Expr, Lexer, Parser, evaluate};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// climb parses and evaluates whitespace-delimited arithmetic expressions,
/// such as `- 3 * ( 2 + 3 )`.
#[derive(ArgParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a path and evaluate every non-blank line of the file.
    #[arg(short, long)]
    file: bool,

    /// Print the parsed tree instead of evaluating it.
    #[arg(short, long, conflicts_with = "json")]
    ast: bool,

    /// Print the parsed tree as JSON instead of evaluating it.
    #[arg(short, long)]
    json: bool,

    /// Reject expressions nesting deeper than this many levels.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG`
    /// is used when no flag is given.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::builder().with_default_directive(LevelFilter::WARN.into())
                                 .from_env_lossy(),
        1 => EnvFilter::new("climb=info"),
        2 => EnvFilter::new("climb=debug"),
        _ => EnvFilter::new("climb=trace"),
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn render(expr: &Expr, args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    if args.json {
        return Ok(serde_json::to_string(expr)?);
    }
    if args.ast {
        return Ok(expr.to_string());
    }
    Ok(evaluate(expr)?.to_string())
}

fn run(line: &str, args: &Args) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let mut parser = Parser::with_max_depth(Lexer::new(line), args.max_depth);

    match parser.parse()? {
        Some(expr) => render(&expr, args).map(Some),
        None => Ok(None),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let lines: Vec<String> = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                                                           eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                                     &args.contents);
                                                           std::process::exit(1);
                                                       });
        script.lines()
              .filter(|line| !line.trim().is_empty())
              .map(str::to_string)
              .collect()
    } else {
        vec![args.contents.clone()]
    };

    info!(target: "climb::cli", expressions = lines.len(), "Starting");

    let mut failed = false;
    for line in &lines {
        match run(line, &args) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {},
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
