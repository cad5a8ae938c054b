//! Token definitions for Soluna.

use soluna_common::Span;

/// A token with its kind, raw lexeme, and span.
///
/// The lexeme is the exact source slice, so concatenating the lexemes of
/// a token stream reproduces the input byte for byte (trivia included).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Returns true for tokens the parser filters out.
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    IntLit,
    FloatLit,
    StrLit,
    CharLit,
    /// Label literal (e.g., `::loop1::`)
    LabelLit,

    // Identifiers
    Ident,

    // Keywords
    And,
    Aster,
    Blaze,
    Cos,
    Flux,
    Hubble,
    Iris,
    Ixion,
    Kai,
    Lani,
    Leo,
    Let,
    Local,
    Lumen,
    Lumina,
    Luna,
    Mos,
    Not,
    Nova,
    Or,
    Orbit,
    Phase,
    Sage,
    Selene,
    Sol,
    Soluna,
    StarKw,
    Void,
    Wane,
    Warp,
    Wax,
    Zara,
    Zeru,
    Zeta,

    // Delimiters
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    // Operators
    Plus,       // +
    PlusPlus,   // ++
    PlusEq,     // +=
    Minus,      // -
    MinusMinus, // --
    MinusEq,    // -=
    Star,       // *
    StarEq,     // *=
    Slash,      // /
    SlashSlash, // //
    SlashEq,    // /=
    Percent,    // %
    PercentEq,  // %=
    Caret,      // ^
    Eq,         // =
    EqEq,       // ==
    Bang,       // !
    BangEq,     // !=
    Lt,         // <
    LtEq,       // <=
    Gt,         // >
    GtEq,       // >=
    AndAnd,     // &&
    OrOr,       // ||
    DotDot,     // ..
    Hash,       // #

    // Punctuation
    Comma,     // ,
    Semicolon, // ;

    // Trivia (kept in the stream for round-tripping)
    Whitespace,
    Comment,

    // Special
    Unknown,
    Eof,
}

impl TokenKind {
    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        Self::KEYWORDS.iter().any(|(_, kind)| kind == self)
    }

    /// Returns true for the keywords that name a data type.
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Kai
                | TokenKind::Aster
                | TokenKind::Flux
                | TokenKind::Selene
                | TokenKind::Blaze
                | TokenKind::Lani
                | TokenKind::Let
        )
    }

    /// Returns the keyword for an identifier, if any.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        Self::KEYWORDS
            .iter()
            .find(|(text, _)| *text == s)
            .map(|(_, kind)| *kind)
    }

    /// All reserved words with their token kinds.
    pub const KEYWORDS: &'static [(&'static str, TokenKind)] = &[
        ("and", TokenKind::And),
        ("aster", TokenKind::Aster),
        ("blaze", TokenKind::Blaze),
        ("cos", TokenKind::Cos),
        ("flux", TokenKind::Flux),
        ("hubble", TokenKind::Hubble),
        ("iris", TokenKind::Iris),
        ("ixion", TokenKind::Ixion),
        ("kai", TokenKind::Kai),
        ("lani", TokenKind::Lani),
        ("leo", TokenKind::Leo),
        ("let", TokenKind::Let),
        ("local", TokenKind::Local),
        ("lumen", TokenKind::Lumen),
        ("lumina", TokenKind::Lumina),
        ("luna", TokenKind::Luna),
        ("mos", TokenKind::Mos),
        ("not", TokenKind::Not),
        ("nova", TokenKind::Nova),
        ("or", TokenKind::Or),
        ("orbit", TokenKind::Orbit),
        ("phase", TokenKind::Phase),
        ("sage", TokenKind::Sage),
        ("selene", TokenKind::Selene),
        ("sol", TokenKind::Sol),
        ("soluna", TokenKind::Soluna),
        ("star", TokenKind::StarKw),
        ("void", TokenKind::Void),
        ("wane", TokenKind::Wane),
        ("warp", TokenKind::Warp),
        ("wax", TokenKind::Wax),
        ("zara", TokenKind::Zara),
        ("zeru", TokenKind::Zeru),
        ("zeta", TokenKind::Zeta),
    ];

    /// The stable token-type string used on the wire.
    pub fn type_str(&self) -> &'static str {
        match self {
            TokenKind::IntLit => "kai_lit",
            TokenKind::FloatLit => "flux_lit",
            TokenKind::StrLit => "selene_lit",
            TokenKind::CharLit => "blaze_lit",
            TokenKind::LabelLit => "label",
            TokenKind::Ident => "identifier",

            TokenKind::And => "and",
            TokenKind::Aster => "aster",
            TokenKind::Blaze => "blaze",
            TokenKind::Cos => "cos",
            TokenKind::Flux => "flux",
            TokenKind::Hubble => "hubble",
            TokenKind::Iris => "iris",
            TokenKind::Ixion => "ixion",
            TokenKind::Kai => "kai",
            TokenKind::Lani => "lani",
            TokenKind::Leo => "leo",
            TokenKind::Let => "let",
            TokenKind::Local => "local",
            TokenKind::Lumen => "lumen",
            TokenKind::Lumina => "lumina",
            TokenKind::Luna => "luna",
            TokenKind::Mos => "mos",
            TokenKind::Not => "not",
            TokenKind::Nova => "nova",
            TokenKind::Or => "or",
            TokenKind::Orbit => "orbit",
            TokenKind::Phase => "phase",
            TokenKind::Sage => "sage",
            TokenKind::Selene => "selene",
            TokenKind::Sol => "sol",
            TokenKind::Soluna => "soluna",
            TokenKind::StarKw => "star",
            TokenKind::Void => "void",
            TokenKind::Wane => "wane",
            TokenKind::Warp => "warp",
            TokenKind::Wax => "wax",
            TokenKind::Zara => "zara",
            TokenKind::Zeru => "zeru",
            TokenKind::Zeta => "zeta",

            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",

            TokenKind::Plus => "+",
            TokenKind::PlusPlus => "++",
            TokenKind::PlusEq => "+=",
            TokenKind::Minus => "-",
            TokenKind::MinusMinus => "--",
            TokenKind::MinusEq => "-=",
            TokenKind::Star => "*",
            TokenKind::StarEq => "*=",
            TokenKind::Slash => "/",
            TokenKind::SlashSlash => "//",
            TokenKind::SlashEq => "/=",
            TokenKind::Percent => "%",
            TokenKind::PercentEq => "%=",
            TokenKind::Caret => "^",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Bang => "!",
            TokenKind::BangEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::DotDot => "..",
            TokenKind::Hash => "#",

            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",

            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Unknown => "unknown",
            TokenKind::Eof => "eof",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_is_total() {
        for (text, kind) in TokenKind::KEYWORDS {
            assert_eq!(TokenKind::keyword_from_str(text), Some(*kind));
            assert!(kind.is_keyword());
            assert_eq!(kind.type_str(), *text);
        }
        assert_eq!(TokenKind::KEYWORDS.len(), 34);
    }

    #[test]
    fn non_keywords_fall_through() {
        assert_eq!(TokenKind::keyword_from_str("orbit2"), None);
        assert_eq!(TokenKind::keyword_from_str("Kai"), None);
        assert_eq!(TokenKind::keyword_from_str(""), None);
    }

    #[test]
    fn type_keywords() {
        assert!(TokenKind::Kai.is_type_keyword());
        assert!(TokenKind::Lani.is_type_keyword());
        assert!(!TokenKind::Void.is_type_keyword());
        assert!(!TokenKind::Hubble.is_type_keyword());
    }
}
