// igra: lexer and parser front end for the igra teaching language

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use igra::parser::ast::{Program, SourceLocation};
use igra::parser::{format_tokens, print_program, render_tree, with_program, FrontendError, Token};

const EXIT_USAGE: u8 = 64;
const EXIT_SYNTAX: u8 = 65;
const EXIT_LEXICAL: u8 = 66;
const EXIT_FAILURE: u8 = 1;

/// How the syntax tree is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON
    Json,
    /// Indented node outline
    Tree,
    /// Re-parseable igra source
    Source,
}

#[derive(Parser)]
#[command(name = "igra")]
#[command(version, about = "Tokenize and parse an igra program")]
struct Args {
    /// Path to the igra source file
    source: PathBuf,

    /// Rendering of the syntax tree
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Do not print the token dump
    #[arg(long)]
    no_tokens: bool,

    /// Report progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version also arrive here
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    let source = match fs::read_to_string(&args.source) {
        Ok(source) => source,
        Err(e) => {
            report(&format!("cannot read '{}': {}", args.source.display(), e));
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if args.verbose {
        eprintln!("Parsing {}...", args.source.display());
    }

    let rendered = with_program(&source, |tokens, program| {
        if args.verbose {
            eprintln!("Tokenized {} tokens.", tokens.len());
            eprintln!(
                "Parsed successfully. Found {} top-level items.",
                program.items.len()
            );
        }
        render(&args, tokens, program)
    });

    match rendered {
        Ok(Ok(output)) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            report(&format!("cannot serialize syntax tree: {}", e));
            ExitCode::from(EXIT_FAILURE)
        }
        Err(err) => {
            report(&err.to_string());
            eprint!("{}", render_snippet(&source, &args.source, &err));
            let code = match err {
                FrontendError::Lex(_) => EXIT_LEXICAL,
                FrontendError::Parse(_) => EXIT_SYNTAX,
            };
            ExitCode::from(code)
        }
    }
}

fn render(args: &Args, tokens: &[Token], program: &Program<'_>) -> serde_json::Result<String> {
    let mut out = String::new();

    if !args.no_tokens {
        out.push_str(&format_tokens(tokens));
        out.push('\n');
    }

    match args.format {
        Format::Json => {
            out.push_str(&serde_json::to_string_pretty(program)?);
            out.push('\n');
        }
        Format::Tree => out.push_str(&render_tree(program)),
        Format::Source => out.push_str(&print_program(program)),
    }

    Ok(out)
}

/// Print an `error:` line, coloured when stderr is a terminal.
fn report(message: &str) {
    let use_color = io::stderr().is_tty() && std::env::var_os("NO_COLOR").is_none();
    if use_color {
        eprintln!("{} {}", "error:".red().bold(), message);
    } else {
        eprintln!("error: {}", message);
    }
}

/// Source line of the error with a caret marker under the reported span.
fn render_snippet(source: &str, path: &Path, err: &FrontendError) -> String {
    let SourceLocation { line, column } = err.location();

    let Some(text) = source.lines().nth(line.saturating_sub(1)) else {
        return format!(" --> {}:{}:{}\n", path.display(), line, column);
    };

    // Tabs are kept so the caret lines up however the terminal expands them.
    let padding: String = text
        .chars()
        .take(column.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    let gutter = " ".repeat(line.to_string().len());
    format!(
        "{gutter}--> {}:{}:{}\n{gutter} |\n{} | {}\n{gutter} | {}{}\n",
        path.display(),
        line,
        column,
        line,
        text,
        padding,
        "^".repeat(error_width(err).max(1)),
    )
}

/// Number of columns the caret marker covers.
fn error_width(err: &FrontendError) -> usize {
    match err {
        FrontendError::Lex(e) => e.snippet.chars().count(),
        FrontendError::Parse(e) => e.token.span.col_end + 1 - e.token.span.col_start,
    }
}
