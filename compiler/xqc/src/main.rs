//! XQuery lexer CLI.
//!
//! Dumps token streams and lexer states for debugging the lexer and the
//! tools built on it.

mod commands;

use commands::{lex_files, show_states};
use xq_lexer::LexerOptions;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let mut options = LexerOptions::default();
    let mut paths = Vec::new();
    for arg in &args[2..] {
        match arg.as_str() {
            "--xpath" => options = LexerOptions::xpath(),
            "--xquery" => options = LexerOptions::xquery(),
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown option '{flag}'");
                std::process::exit(1);
            }
            path => paths.push(path),
        }
    }

    match args[1].as_str() {
        "lex" => {
            if paths.is_empty() {
                eprintln!("Usage: xqc lex <file>... [--xpath]");
                std::process::exit(1);
            }
            if !lex_files(&paths, options) {
                std::process::exit(1);
            }
        }
        "states" => {
            let [path] = paths.as_slice() else {
                eprintln!("Usage: xqc states <file> [--xpath]");
                std::process::exit(1);
            };
            show_states(path, options);
        }
        "help" | "--help" | "-h" => print_usage(),
        command => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("XQuery lexer CLI");
    println!();
    println!("Usage: xqc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>...    Print the token stream of each file");
    println!("  states <file>    Print each token with the lexer state before it");
    println!("  help             Show this message");
    println!();
    println!("Options:");
    println!("  --xpath          Lex as XPath (no direct constructors)");
    println!("  --xquery         Lex as XQuery (default)");
    println!();
    println!("Set XQ_LOG (or RUST_LOG), e.g. XQ_LOG=xq_lexer=debug, to trace lexing.");
}

/// Install a tree-shaped stderr subscriber when `XQ_LOG` or `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let Some(directives) = ["XQ_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
    else {
        return;
    };
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!("warning: ignoring invalid log filter '{directives}': {err}");
        EnvFilter::new("warn")
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .init();
}
