//! Filament front-end CLI.

use std::io;

use fil_lexer::Lexer;
use filc::commands::{demo, lex_file, repl, symbols_file};
use filc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let lexer = match Lexer::filament() {
        Ok(lexer) => lexer,
        Err(e) => {
            eprintln!("error: built-in lexeme table failed to compile: {e}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match args.get(1).map(String::as_str) {
        None | Some("repl") => repl(&lexer, io::stdin().lock(), &mut out),
        Some("lex") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: filc lex <file.fil>");
                std::process::exit(2);
            };
            lex_file(&lexer, path, &mut out)
        }
        Some("symbols") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: filc symbols <file.fil>");
                std::process::exit(2);
            };
            symbols_file(&lexer, path, &mut out)
        }
        Some("demo") => demo(&lexer, &mut out),
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(0)
        }
        Some("version" | "--version" | "-V") => {
            println!("filc {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Filament front end");
    println!();
    println!("Usage: filc [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Lex stdin line by line (default; empty line exits)");
    println!("  lex <file.fil>       Tokenize and display tokens");
    println!("  symbols <file.fil>   Print the canonical rendering of a file");
    println!("  demo                 Render the built-in sample component");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Set RUST_LOG=fil_lexer=debug for lexer tracing.");
}
