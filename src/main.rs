use crate::errs::{CliError, CliResult};
use ir_lexer::{CharTable, HexCharTable, IrCharTable, Lexer};

use clap::Parser;
use io::{Read, Write};
use std::path::PathBuf;
use std::{fs, io, process};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod errs;

/// Prints the token stream of an IR listing, one token per line.
#[derive(Parser, Debug)]
#[clap(name = "irlex", version)]
struct Args {
    /// File to tokenize; reads standard input if omitted
    path: Option<PathBuf>,

    /// Treat hexadecimal literals such as 0x1F as numbers
    #[clap(long)]
    hex: bool,

    /// Don't print LineEnd tokens
    #[clap(long)]
    skip_line_ends: bool,

    /// Stop with an error at the first invalid token
    #[clap(long)]
    strict: bool,

    /// Log progress to stderr
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct Summary {
    tokens: usize,
    lines: usize,
    invalid: usize,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("irlex: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> CliResult<()> {
    let source = read_source(args)?;
    debug!(bytes = source.len(), "read input");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let summary = if args.hex {
        let mut lexer: Lexer<HexCharTable> = Lexer::with_char_table(&source);
        dump_tokens(&mut lexer, args, &mut out)?
    } else {
        let mut lexer: Lexer<IrCharTable> = Lexer::with_char_table(&source);
        dump_tokens(&mut lexer, args, &mut out)?
    };
    out.flush()?;

    info!(
        tokens = summary.tokens,
        lines = summary.lines,
        invalid = summary.invalid,
        "done"
    );
    Ok(())
}

fn read_source(args: &Args) -> CliResult<String> {
    match &args.path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        }),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(CliError::ReadStdin)?;
            Ok(source)
        }
    }
}

fn dump_tokens<T, W>(lexer: &mut Lexer<'_, T>, args: &Args, out: &mut W) -> CliResult<Summary>
where
    T: CharTable,
    W: Write,
{
    let mut summary = Summary::default();

    loop {
        let token = lexer.next_token();
        summary.tokens += 1;

        if token.is_invalid() {
            summary.invalid += 1;
            if args.strict {
                return Err(CliError::InvalidToken(token.location));
            }
            warn!(location = %token.location, "invalid token");
        }

        if token.is_line_end() {
            summary.lines += 1;
            if args.skip_line_ends {
                continue;
            }
        }

        writeln!(out, "{}", token)?;

        if token.is_eof() {
            return Ok(summary);
        }
    }
}
