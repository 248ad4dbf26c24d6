//! Lexer and loader for Tractor Beam location definition files.
//!
//! A definition is line-oriented text. Each location is a block opened by a
//! `Name:` line and followed by optional `Description:`,
//! `AlternateDescription:`, `Connections:`, `IsLocked:` and `Items:` lines.
//! Loading never stops at the first problem: every diagnostic is collected so
//! authors can fix a file in one pass.

/// Diagnostic types and ariadne rendering.
pub mod diagnostics;
/// Line lexer built on logos.
pub mod lexer;
/// Turns lexed lines into a validated location graph.
pub mod loader;

pub use diagnostics::{Diagnostic, Severity};
pub use loader::LoadResult;

/// The location definition shipped with the game.
pub const BUILTIN_LOCATIONS: &str = include_str!("../data/locations.txt");

/// Load a definition from source text.
pub fn load_source(source: &str) -> LoadResult {
    let (fields, lex_errors) = lexer::lex(source);

    let mut result = loader::load(&fields, source.len());
    let mut diagnostics: Vec<Diagnostic> = lex_errors
        .into_iter()
        .map(|e| Diagnostic::error(e.span, e.message))
        .collect();
    diagnostics.append(&mut result.diagnostics);
    result.diagnostics = diagnostics;
    result
}

/// Load the built-in definition.
pub fn load_builtin() -> LoadResult {
    load_source(BUILTIN_LOCATIONS)
}
