//! The Soluna analysis session.
//!
//! One pure function, `analyze`, runs the lexer and parser over a
//! source string and returns the full picture: the lossless token
//! stream, the merged diagnostics, and the parse tree when one could be
//! built. There is no shared state; every call starts from scratch.

mod collector;
mod protocol;

pub use collector::merge;
pub use protocol::{ErrorMsg, NodeMsg, ProtocolError, Request, Response, TokenMsg, handle_request};

use soluna_diagnostic::{Diagnostic, Phase};
use soluna_lexer::Token;
use soluna_parser::Parser;
use soluna_syntax::ParseNode;

/// The result of analyzing one source text.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Every token, trivia included; lexemes concatenate back to the
    /// input.
    pub tokens: Vec<Token>,
    /// All diagnostics, ordered by position with lexical first on ties.
    pub diagnostics: Vec<Diagnostic>,
    /// The parse tree; `None` for empty or fully malformed input.
    pub tree: Option<ParseNode>,
}

impl Analysis {
    pub fn has_lexical_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.phase == Phase::Lexical)
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Analyze one source text end to end.
pub fn analyze(source: &str) -> Analysis {
    let (tokens, lexical) = soluna_lexer::tokenize(source);

    let mut parser = Parser::new(tokens.clone());
    let tree = parser.parse_program();
    let syntactic = parser.diagnostics();

    Analysis {
        tokens,
        diagnostics: merge(lexical, syntactic),
        tree,
    }
}
