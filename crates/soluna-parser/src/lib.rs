//! Parser for Soluna.
//!
//! This crate provides a recursive descent parser that converts
//! tokens into a parse tree.
//!
//! ## Error Recovery
//!
//! The parser implements panic-mode error recovery to continue parsing
//! after encountering errors, allowing multiple errors to be reported
//! in a single parse pass. A partial tree is kept whenever at least one
//! item parsed.

mod parser;
mod recovery;

pub use parser::{ParseResult, Parser, Recovered};
pub use recovery::{STMT_ENDS, STMT_STARTS, is_stmt_end, is_stmt_start};

use soluna_diagnostic::Diagnostic;
use soluna_lexer::Lexer;
use soluna_syntax::ParseNode;

/// Parse source code into a parse tree.
pub fn parse(source: &str) -> (Option<ParseNode>, Vec<Diagnostic>) {
    let lexer = Lexer::new(source);
    let (tokens, mut diagnostics) = lexer.tokenize();

    let mut parser = Parser::new(tokens);
    let tree = parser.parse_program();

    diagnostics.extend(parser.diagnostics());
    (tree, diagnostics)
}
