use std::process::ExitCode;

use clap::Parser;
use reckon::{BigInt, Error, Options, Recovery, interpreter::options::DEFAULT_MAX_DEPTH, parse, tokenize};
use tracing_subscriber::EnvFilter;

/// reckon evaluates an integer arithmetic expression and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log and skip missing tokens instead of failing. Trailing input and an
    /// unclosed `(` are then ignored.
    #[arg(long)]
    lenient: bool,

    /// Maximum nesting of parentheses and negations.
    #[arg(long, env = "RECKON_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the scanned tokens to stderr before evaluating.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree, fully parenthesized, to stderr before
    /// evaluating.
    #[arg(long)]
    ast: bool,

    /// Increase log output. Repeat for more detail. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Nothing happens if it is omitted.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

impl Args {
    const fn options(&self) -> Options {
        let recovery = if self.lenient { Recovery::Lenient } else { Recovery::Strict };
        Options { recovery,
                  max_depth: self.max_depth }
    }
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                 EnvFilter::new(default_directive)
                             }))
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Some(expression) = args.expression.as_deref() else {
        return ExitCode::SUCCESS;
    };
    let options = args.options();

    if args.tokens {
        for (token, offset) in tokenize(expression) {
            eprintln!("{offset:>4}  {token}");
        }
    }

    match run(expression, &options, args.ast) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Parses the expression once, optionally shows the tree, then evaluates it.
fn run(expression: &str, options: &Options, show_ast: bool) -> Result<BigInt, Error> {
    let tree = parse(expression, options)?;
    if show_ast {
        eprintln!("{tree}");
    }
    let value = tree.eval()?;
    tracing::debug!(%value, "evaluated expression");
    Ok(value)
}
