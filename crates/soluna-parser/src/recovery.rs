//! Error recovery strategies for the parser.
//!
//! This module provides the synchronization token sets the parser uses
//! to recover from parse errors and keep reporting.

use soluna_lexer::TokenKind;

/// Tokens that typically start a new statement/item.
pub const STMT_STARTS: &[TokenKind] = &[
    // Declarations
    TokenKind::Zeta,
    TokenKind::Hubble,
    TokenKind::Local,
    TokenKind::Void,
    TokenKind::Kai,
    TokenKind::Aster,
    TokenKind::Flux,
    TokenKind::Selene,
    TokenKind::Blaze,
    TokenKind::Lani,
    TokenKind::Let,
    // Statements
    TokenKind::Sol,
    TokenKind::Orbit,
    TokenKind::Phase,
    TokenKind::Wax,
    TokenKind::Zara,
    TokenKind::Nova,
    TokenKind::Lumen,
    TokenKind::Leo,
    TokenKind::Warp,
    TokenKind::LabelLit,
];

/// Tokens that end a statement or close a statement list.
pub const STMT_ENDS: &[TokenKind] = &[
    TokenKind::Semicolon,
    TokenKind::Mos,
    TokenKind::Wane,
    TokenKind::Cos,
];

/// Check if a token kind is in a set.
pub fn is_in_set(kind: TokenKind, set: &[TokenKind]) -> bool {
    set.contains(&kind)
}

/// Check if a token starts a statement.
pub fn is_stmt_start(kind: TokenKind) -> bool {
    is_in_set(kind, STMT_STARTS)
}

/// Check if a token ends a statement.
pub fn is_stmt_end(kind: TokenKind) -> bool {
    is_in_set(kind, STMT_ENDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_stmt_start() {
        assert!(is_stmt_start(TokenKind::Kai));
        assert!(is_stmt_start(TokenKind::Sol));
        assert!(is_stmt_start(TokenKind::Zeta));
        assert!(!is_stmt_start(TokenKind::Plus));
        assert!(!is_stmt_start(TokenKind::Mos));
    }

    #[test]
    fn test_is_stmt_end() {
        assert!(is_stmt_end(TokenKind::Semicolon));
        assert!(is_stmt_end(TokenKind::Mos));
        assert!(is_stmt_end(TokenKind::Wane));
        assert!(!is_stmt_end(TokenKind::RParen));
    }

    #[test]
    fn test_stmt_starts_exclude_enders() {
        for kind in STMT_ENDS {
            assert!(!is_stmt_start(*kind));
        }
    }
}
