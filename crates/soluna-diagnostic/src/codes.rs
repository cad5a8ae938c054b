//! Error codes for Soluna diagnostics.

/// Error codes for categorizing diagnostics.
///
/// `as_str` returns the stable identifier used on the wire; clients key
/// editor decorations off these strings, so they never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors
    UnrecognizedChar,
    UnfinishedFlux,
    UnclosedString,
    UnclosedChar,
    UnclosedComment,
    InvalidEscape,
    MalformedLabel,

    // Syntactic errors
    ParserError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            ErrorCode::UnrecognizedChar => "UNRECOGNIZED_CHAR",
            ErrorCode::UnfinishedFlux => "UNFINISHED_FLUX",
            ErrorCode::UnclosedString => "UNCLOSED_STRING",
            ErrorCode::UnclosedChar => "UNCLOSED_CHAR",
            ErrorCode::UnclosedComment => "UNCLOSED_COMMENT",
            ErrorCode::InvalidEscape => "INVALID_ESCAPE",
            ErrorCode::MalformedLabel => "MALFORMED_LABEL",

            // Syntactic
            ErrorCode::ParserError => "PARSER_ERROR",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnrecognizedChar => "unrecognized character in input",
            ErrorCode::UnfinishedFlux => "flux literal is missing its fraction digits",
            ErrorCode::UnclosedString => "string literal is not terminated",
            ErrorCode::UnclosedChar => "character literal is not terminated",
            ErrorCode::UnclosedComment => "block comment is not terminated",
            ErrorCode::InvalidEscape => "invalid escape sequence",
            ErrorCode::MalformedLabel => "malformed label literal",
            ErrorCode::ParserError => "syntax error",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnfinishedFlux => Some("add at least one digit after the radix point"),
            ErrorCode::UnclosedString => Some("add a closing quote `\"` to terminate the string"),
            ErrorCode::UnclosedChar => Some("add a closing quote `'` to terminate the character"),
            ErrorCode::UnclosedComment => Some("add `*\\` to close the comment"),
            ErrorCode::MalformedLabel => {
                Some("labels are `::name::` with 1 to 5 letters, digits, or underscores")
            }
            _ => None,
        }
    }
}
