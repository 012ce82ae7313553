//! `lex`, `symbols` and `demo`: one-shot token inspection.

use std::io::{self, Write};

use fil_lexer::{describe, render, LexOutput, Lexer, SAMPLE_COMPONENT};

use super::read_file;

/// Print the token listing for `source`.
pub fn lex_source(lexer: &Lexer, source: &str, out: &mut impl Write) -> io::Result<i32> {
    let output = lexer.tokenize(source);
    writeln!(out, "{}", describe(&output.tokens))?;
    report(&output)
}

/// Print the canonical rendering of `source`.
pub fn symbols_source(lexer: &Lexer, source: &str, out: &mut impl Write) -> io::Result<i32> {
    let output = lexer.tokenize(source);
    writeln!(out, "{}", render(&output.tokens))?;
    report(&output)
}

/// Print the token listing for a file.
pub fn lex_file(lexer: &Lexer, path: &str, out: &mut impl Write) -> io::Result<i32> {
    match read_file(path) {
        Ok(source) => lex_source(lexer, &source, out),
        Err(msg) => {
            eprintln!("{msg}");
            Ok(1)
        }
    }
}

/// Print the canonical rendering of a file.
pub fn symbols_file(lexer: &Lexer, path: &str, out: &mut impl Write) -> io::Result<i32> {
    match read_file(path) {
        Ok(source) => symbols_source(lexer, &source, out),
        Err(msg) => {
            eprintln!("{msg}");
            Ok(1)
        }
    }
}

/// Render the built-in sample component.
pub fn demo(lexer: &Lexer, out: &mut impl Write) -> io::Result<i32> {
    symbols_source(lexer, SAMPLE_COMPONENT, out)
}

fn report(output: &LexOutput<'_>) -> io::Result<i32> {
    match &output.error {
        None => Ok(0),
        Some(error) => {
            eprintln!("error: {error}");
            Ok(1)
        }
    }
}
