//! Integration tests for soluna-lexer crate.

use soluna_lexer::{Token, TokenKind, tokenize};

fn lex(source: &str) -> Vec<TokenKind> {
    let (tokens, _) = tokenize(source);
    tokens
        .into_iter()
        .filter(|t| !t.is_trivia())
        .map(|t| t.kind)
        .collect()
}

fn lex_with_errors(source: &str) -> (Vec<Token>, usize) {
    let (tokens, errors) = tokenize(source);
    (tokens, errors.len())
}

// ============================================================================
// Basic Token Tests
// ============================================================================

#[test]
fn test_keywords() {
    assert_eq!(
        lex("kai sol luna orbit zara mos"),
        vec![
            TokenKind::Kai,
            TokenKind::Sol,
            TokenKind::Luna,
            TokenKind::Orbit,
            TokenKind::Zara,
            TokenKind::Mos,
        ]
    );
}

#[test]
fn test_every_reserved_word_lexes_to_its_keyword() {
    for (text, kind) in TokenKind::KEYWORDS {
        let tokens = lex(text);
        assert_eq!(tokens, vec![*kind], "keyword `{}`", text);
    }
}

#[test]
fn test_identifiers_near_keywords() {
    assert_eq!(
        lex("kai2 _sol Luna orbiting"),
        vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        lex("42 3.25 0"),
        vec![TokenKind::IntLit, TokenKind::FloatLit, TokenKind::IntLit]
    );
}

#[test]
fn test_int_dotdot_int() {
    // Two dots never start a fraction: 1..5 is kai_lit .. kai_lit.
    assert_eq!(
        lex("1..5"),
        vec![TokenKind::IntLit, TokenKind::DotDot, TokenKind::IntLit]
    );
}

#[test]
fn test_trailing_radix_point_is_an_error_but_still_a_float() {
    let (tokens, errors) = lex_with_errors("3.");
    assert_eq!(errors, 1);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::FloatLit);
    assert_eq!(tokens[0].lexeme, "3.");
}

#[test]
fn test_strings_and_chars() {
    assert_eq!(
        lex(r#""hello" 'a' '\n'"#),
        vec![TokenKind::StrLit, TokenKind::CharLit, TokenKind::CharLit]
    );
}

#[test]
fn test_operators_maximal_munch() {
    assert_eq!(
        lex("++ += + -- -= - // /= / == = != <= >= && || .. ^ #"),
        vec![
            TokenKind::PlusPlus,
            TokenKind::PlusEq,
            TokenKind::Plus,
            TokenKind::MinusMinus,
            TokenKind::MinusEq,
            TokenKind::Minus,
            TokenKind::SlashSlash,
            TokenKind::SlashEq,
            TokenKind::Slash,
            TokenKind::EqEq,
            TokenKind::Eq,
            TokenKind::BangEq,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::AndAnd,
            TokenKind::OrOr,
            TokenKind::DotDot,
            TokenKind::Caret,
            TokenKind::Hash,
        ]
    );
}

#[test]
fn test_labels() {
    assert_eq!(lex("::top::"), vec![TokenKind::LabelLit]);
    assert_eq!(lex("::a1_b2::"), vec![TokenKind::LabelLit]);
}

#[test]
fn test_comments_are_tokens() {
    let (tokens, errors) = tokenize("kai x; \\\\ a note\nkai y;");
    assert_eq!(errors.len(), 0);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Comment));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Whitespace));
}

#[test]
fn test_block_comment() {
    let (tokens, errors) = tokenize("\\* spans\nlines *\\ kai x;");
    assert_eq!(errors.len(), 0);
    let comment = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Comment)
        .unwrap();
    assert_eq!(comment.lexeme, "\\* spans\nlines *\\");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_unterminated_string_stops_at_newline() {
    let (tokens, errors) = lex_with_errors("\"open\nkai x;");
    assert_eq!(errors, 1);
    let string = tokens.iter().find(|t| t.kind == TokenKind::StrLit).unwrap();
    // The newline is not part of the partial token.
    assert_eq!(string.lexeme, "\"open");
    // Lexing continues on the next line.
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Kai));
}

#[test]
fn test_unterminated_string_at_eof() {
    let (tokens, errors) = lex_with_errors("\"open");
    assert_eq!(errors, 1);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::StrLit);
}

#[test]
fn test_unterminated_char() {
    let (tokens, errors) = lex_with_errors("'a");
    assert_eq!(errors, 1);
    assert_eq!(tokens[0].kind, TokenKind::CharLit);
}

#[test]
fn test_empty_char_literal() {
    let (tokens, errors) = lex_with_errors("''");
    assert_eq!(errors, 1);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::CharLit);
    assert_eq!(tokens[0].lexeme, "''");
}

#[test]
fn test_unterminated_block_comment() {
    let (tokens, errors) = lex_with_errors("\\* never closed");
    assert_eq!(errors, 1);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
}

#[test]
fn test_invalid_escape() {
    let (tokens, errors) = lex_with_errors(r#""a\qb""#);
    assert_eq!(errors, 1);
    assert_eq!(tokens[0].kind, TokenKind::StrLit);
}

#[test]
fn test_malformed_label_too_long() {
    let (tokens, errors) = lex_with_errors("::toolong::");
    assert_eq!(errors, 1);
    assert_eq!(tokens[0].kind, TokenKind::LabelLit);
}

#[test]
fn test_malformed_label_unclosed() {
    let (tokens, errors) = lex_with_errors("::ab");
    assert_eq!(errors, 1);
    assert_eq!(tokens[0].kind, TokenKind::LabelLit);
}

#[test]
fn test_unknown_character_is_one_token() {
    let (tokens, errors) = lex_with_errors("@");
    assert_eq!(errors, 1);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Unknown);
    assert_eq!(tokens[0].lexeme, "@");
}

#[test]
fn test_lone_ampersand_pipe_dot() {
    let (tokens, errors) = lex_with_errors("& | .");
    assert_eq!(errors, 3);
    let unknowns = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Unknown)
        .count();
    assert_eq!(unknowns, 3);
}

// ============================================================================
// Stream Properties
// ============================================================================

#[test]
fn test_round_trip() {
    let sources = [
        "",
        "kai x = 1;",
        "  \t\n ",
        "\\\\ comment only",
        "sol x == 1 nova(\"yes\"); mos",
        "\"unterminated\nkai y;",
        "@#$ ::bad",
        "phase kai i = 0, 10, 1 cos x++; mos",
    ];
    for source in sources {
        let (tokens, _) = tokenize(source);
        let rebuilt: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(rebuilt, source, "round trip failed for {:?}", source);
    }
}

#[test]
fn test_empty_input_yields_no_tokens() {
    let (tokens, errors) = tokenize("");
    assert!(tokens.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_whitespace_only_input() {
    let (tokens, errors) = tokenize("  \n\t  ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Whitespace);
    assert!(errors.is_empty());
}

#[test]
fn test_positions_are_monotonic_and_adjacent() {
    let source = "kai x = \"a\nb @ ::bad 3.";
    let (tokens, _) = tokenize(source);
    let mut offset = 0;
    for token in &tokens {
        assert_eq!(token.span.start.offset, offset);
        assert!(token.span.end.offset > token.span.start.offset);
        offset = token.span.end.offset;
    }
    assert_eq!(offset as usize, source.len());
}

#[test]
fn test_progress_bound() {
    // A pathological input of N bytes produces at most N tokens.
    let source = "@".repeat(100);
    let (tokens, errors) = tokenize(&source);
    assert!(tokens.len() <= source.len());
    assert_eq!(tokens.len(), 100);
    assert_eq!(errors.len(), 100);
}

#[test]
fn test_line_and_column_tracking() {
    let (tokens, _) = tokenize("kai\nx");
    let x = tokens.iter().find(|t| t.kind == TokenKind::Ident).unwrap();
    assert_eq!(x.span.start.line, 2);
    assert_eq!(x.span.start.col, 1);
}
