//! CLI commands.
//!
//! Each command writes its report to a caller-supplied writer so the
//! binary can point it at stdout and tests at a buffer. Commands return the
//! process exit code.

mod inspect;
mod repl;

pub use inspect::{demo, lex_file, lex_source, symbols_file, symbols_source};
pub use repl::repl;

use std::io;

/// Read a source file, reporting failures the way the rest of the CLI does.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })?;
    tracing::debug!(path, bytes = source.len(), "read source file");
    Ok(source)
}
