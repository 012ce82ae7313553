//! Line-oriented lexer REPL.

use std::io::{self, BufRead, Write};

use fil_lexer::{describe, render, Lexer};

/// Lex each input line and print its token listing and rendering.
///
/// Stops at end of input or at the first empty line. Lex errors are
/// reported inline and do not end the session.
pub fn repl(lexer: &Lexer, input: impl BufRead, out: &mut impl Write) -> io::Result<i32> {
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }

        let output = lexer.tokenize(&line);
        writeln!(out, "\"{line}\" -> {}", describe(&output.tokens))?;
        writeln!(out, "{}", render(&output.tokens))?;
        if let Some(error) = &output.error {
            writeln!(out, "error: {error}")?;
        }
    }

    Ok(0)
}
