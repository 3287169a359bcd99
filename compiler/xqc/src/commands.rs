//! `lex` and `states` commands.

use std::fmt::Write as _;

use rayon::prelude::*;
use xq_ir::Token;
use xq_lexer::{lex, LexedDocument, LexerOptions};

/// Lex every file in parallel and print the token streams in argument order.
///
/// Returns `false` if any file could not be read.
#[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
pub fn lex_files(paths: &[&str], options: LexerOptions) -> bool {
    let reports: Vec<Result<String, String>> = paths
        .par_iter()
        .map(|path| {
            let source = read_file(path)?;
            let tokens = lex(&source, options);
            let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
            for token in &tokens {
                render_token(&mut out, *token, &source);
                out.push('\n');
            }
            Ok(out)
        })
        .collect();

    let mut ok = true;
    for report in reports {
        match report {
            Ok(out) => print!("{out}"),
            Err(msg) => {
                eprintln!("{msg}");
                ok = false;
            }
        }
    }
    ok
}

/// Print each token of `path` with the state a lexer resuming there needs.
pub fn show_states(path: &str, options: LexerOptions) {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };
    let document = LexedDocument::lex(source, options);

    println!("States for '{path}' ({} tokens):", document.len());
    for (index, token) in document.tokens().iter().enumerate() {
        let mut line = String::new();
        match document.state_before(index) {
            Some(state) => {
                let frames = state.decode().map_or_else(
                    |err| err.to_string(),
                    |stack| format!("{:?}", stack.frames()),
                );
                let _ = write!(line, "  {:<12} {frames:<40}", state.to_string());
            }
            None => {
                let _ = write!(line, "  {:<12} {:<40}", "-", "(too deep to encode)");
            }
        }
        render_token(&mut line, *token, document.text());
        println!("{line}");
    }
}

fn render_token(out: &mut String, token: Token, source: &str) {
    let _ = write!(
        out,
        "  {:<30} @ {:<12} {:?}",
        token.kind.name(),
        token.span.to_string(),
        token.text(source)
    );
}

fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
