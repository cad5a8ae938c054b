//! The Soluna lexer.
//! Soluna 词法分析器。

use crate::token::{Token, TokenKind};
use soluna_common::{Position, Span};
use soluna_diagnostic::{Diagnostic, ErrorCode, Label, Phase};

/// The Soluna lexer.
/// Soluna 词法分析器。
///
/// Converts source code into a sequence of tokens. Whitespace and
/// comments come out as tokens too, so the stream reproduces the input
/// exactly; the parser filters them later.
/// 将源代码转换为 token 序列。空白和注释也作为 token 输出，
/// 因此 token 流可以完整还原输入；解析器稍后将其过滤。
pub struct Lexer<'src> {
    /// The full source text, sliced for lexemes
    /// 完整源码文本，用于切取词素
    source: &'src str,
    /// Character iterator with position info
    /// 带位置信息的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Current position in source
    /// 当前在源码中的位置
    pos: Position,
    /// Collected diagnostics (errors/warnings)
    /// 收集的诊断信息（错误/警告）
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            pos: Position::START,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    /// 对整个源代码进行词法分析，返回 token 列表和诊断信息。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        while self.peek_char().is_some() {
            tokens.push(self.next_token());
        }

        (tokens, self.diagnostics)
    }

    /// Get the next token. The caller guarantees input remains.
    /// 获取下一个 token。调用者保证还有剩余输入。
    fn next_token(&mut self) -> Token {
        let start = self.pos;

        let Some(ch) = self.advance() else {
            return self.make_token(TokenKind::Eof, start);
        };

        let kind = match ch {
            // Whitespace run - 空白字符序列
            c if c.is_whitespace() => {
                while let Some(c) = self.peek_char() {
                    if c.is_whitespace() {
                        self.advance();
                    } else {
                        break;
                    }
                }
                TokenKind::Whitespace
            }

            // Comments start with a backslash: `\\` line, `\*` block
            // 注释以反斜杠开头：`\\` 行注释，`\*` 块注释
            '\\' => match self.peek_char() {
                Some('\\') => {
                    self.advance();
                    self.line_comment()
                }
                Some('*') => {
                    self.advance();
                    self.block_comment(start)
                }
                _ => {
                    self.error_unrecognized_char(ch, start);
                    TokenKind::Unknown
                }
            },

            // String literal - 字符串字面量
            '"' => self.string_literal(start),

            // Char literal - 字符字面量
            '\'' => self.char_literal(start),

            // Label literal ::name:: - 标签字面量 ::name::
            ':' => self.label_literal(ch, start),

            // Numbers - 数字
            '0'..='9' => self.number(start),

            // Identifiers and keywords - 标识符和关键字
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(start),

            // Single character tokens - 单字符 token
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '^' => TokenKind::Caret,
            '#' => TokenKind::Hash,

            // Plus, PlusPlus, or PlusEq - 加号、双加号或加等
            '+' => match self.peek_char() {
                Some('+') => {
                    self.advance();
                    TokenKind::PlusPlus
                }
                Some('=') => {
                    self.advance();
                    TokenKind::PlusEq
                }
                _ => TokenKind::Plus,
            },

            // Minus, MinusMinus, or MinusEq - 减号、双减号或减等
            '-' => match self.peek_char() {
                Some('-') => {
                    self.advance();
                    TokenKind::MinusMinus
                }
                Some('=') => {
                    self.advance();
                    TokenKind::MinusEq
                }
                _ => TokenKind::Minus,
            },

            // Star or StarEq - 星号或乘等
            '*' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::StarEq
                } else {
                    TokenKind::Star
                }
            }

            // Slash, SlashSlash, or SlashEq - 斜杠、双斜杠或除等
            '/' => match self.peek_char() {
                Some('/') => {
                    self.advance();
                    TokenKind::SlashSlash
                }
                Some('=') => {
                    self.advance();
                    TokenKind::SlashEq
                }
                _ => TokenKind::Slash,
            },

            // Percent or PercentEq - 百分号或模等
            '%' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::PercentEq
                } else {
                    TokenKind::Percent
                }
            }

            // Equals - 等号
            '=' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                }
            }

            // Bang (not) - 感叹号（逻辑非）
            '!' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::BangEq
                } else {
                    TokenKind::Bang
                }
            }

            // Less than - 小于号
            '<' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                }
            }

            // Greater than - 大于号
            '>' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }

            // Ampersand: only && is a token - & 符号：只有 && 是 token
            '&' => {
                if self.peek_char() == Some('&') {
                    self.advance();
                    TokenKind::AndAnd
                } else {
                    self.error_unrecognized_char(ch, start);
                    TokenKind::Unknown
                }
            }

            // Pipe: only || is a token - 管道符号：只有 || 是 token
            '|' => {
                if self.peek_char() == Some('|') {
                    self.advance();
                    TokenKind::OrOr
                } else {
                    self.error_unrecognized_char(ch, start);
                    TokenKind::Unknown
                }
            }

            // Dot: only .. is a token - 点号：只有 .. 是 token
            '.' => {
                if self.peek_char() == Some('.') {
                    self.advance();
                    TokenKind::DotDot
                } else {
                    self.error_unrecognized_char(ch, start);
                    TokenKind::Unknown
                }
            }

            _ => {
                self.error_unrecognized_char(ch, start);
                TokenKind::Unknown
            }
        };

        self.make_token(kind, start)
    }

    /// Advance to the next character, tracking line and column.
    /// 前进到下一个字符，同时跟踪行列。
    fn advance(&mut self) -> Option<char> {
        let (idx, ch) = self.chars.next()?;
        self.pos.offset = (idx + ch.len_utf8()) as u32;
        if ch == '\n' {
            self.pos.line += 1;
            self.pos.col = 1;
        } else {
            self.pos.col += 1;
        }
        Some(ch)
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Peek at the nth character ahead.
    /// 查看前方第 n 个字符。
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    /// Build a token whose lexeme is the source slice since `start`.
    /// 构造 token，其词素为从 `start` 起的源码切片。
    fn make_token(&self, kind: TokenKind, start: Position) -> Token {
        let span = Span::new(start, self.pos);
        Token::new(kind, &self.source[span.range()], span)
    }

    /// Consume a line comment (`\\` to end of line).
    /// The newline itself is left for the next whitespace token.
    /// 消耗行注释（`\\` 到行尾）。换行符留给下一个空白 token。
    fn line_comment(&mut self) -> TokenKind {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
        TokenKind::Comment
    }

    /// Consume a block comment (`\*` ... `*\`).
    /// 消耗块注释（`\*` ... `*\`）。
    fn block_comment(&mut self, start: Position) -> TokenKind {
        loop {
            match self.advance() {
                Some('*') => {
                    if self.peek_char() == Some('\\') {
                        self.advance();
                        break;
                    }
                }
                Some(_) => {}
                None => {
                    // Unterminated comment - 未终止的注释
                    let span = Span::new(start, self.pos);
                    self.diagnostics.push(
                        Diagnostic::error(
                            Phase::Lexical,
                            ErrorCode::UnclosedComment,
                            span,
                            "unterminated block comment",
                        )
                        .with_label(Label::new(span, "comment opened here is never closed")),
                    );
                    break;
                }
            }
        }
        TokenKind::Comment
    }

    /// Consume a string literal. The opening quote is already consumed.
    /// An unterminated string stops at the line boundary (the newline is
    /// not consumed) and still yields a partial `StrLit` token.
    /// 消耗字符串字面量。开头引号已被消耗。未终止的字符串在行边界
    /// 停止（不消耗换行符），仍产生部分 `StrLit` token。
    fn string_literal(&mut self, start: Position) -> TokenKind {
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\n') | None => {
                    let span = Span::new(start, self.pos);
                    self.diagnostics.push(
                        Diagnostic::error(
                            Phase::Lexical,
                            ErrorCode::UnclosedString,
                            span,
                            "unterminated string literal",
                        )
                        .with_label(Label::new(span, "string opened here is never closed")),
                    );
                    break;
                }
                Some('\\') => {
                    self.advance();
                    self.escape_char();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        TokenKind::StrLit
    }

    /// Consume a character literal. The opening quote is already
    /// consumed. The body must be exactly one character; an empty or
    /// unterminated literal is reported but still yields a `CharLit`.
    /// 消耗字符字面量。开头引号已被消耗。主体必须恰好是一个字符；
    /// 空的或未终止的字面量会报告错误，但仍产生 `CharLit`。
    fn char_literal(&mut self, start: Position) -> TokenKind {
        match self.peek_char() {
            Some('\\') => {
                self.advance();
                self.escape_char();
            }
            Some('\n') | None => {
                self.error_unclosed_char(start);
                return TokenKind::CharLit;
            }
            Some('\'') => {
                // Empty literal: consume the closing quote and report.
                // 空字面量：消耗闭引号并报告错误。
                self.advance();
                let span = Span::new(start, self.pos);
                self.diagnostics.push(
                    Diagnostic::error(
                        Phase::Lexical,
                        ErrorCode::UnclosedChar,
                        span,
                        "character literal must contain exactly one character",
                    )
                    .with_label(Label::new(span, "empty character literal")),
                );
                return TokenKind::CharLit;
            }
            Some(_) => {
                self.advance();
            }
        }

        if self.peek_char() == Some('\'') {
            self.advance();
        } else {
            self.error_unclosed_char(start);
        }
        TokenKind::CharLit
    }

    /// Consume the character after a backslash in a string/char literal.
    /// 消耗字符串/字符字面量中反斜杠后的字符。
    fn escape_char(&mut self) {
        let escape_start = self.pos;
        match self.peek_char() {
            Some('n' | 'r' | 't' | '0' | '\\' | '"' | '\'') => {
                self.advance();
            }
            Some('\n') | None => {
                // The enclosing literal will report itself unterminated.
                // 外层字面量会报告自身未终止。
            }
            Some(ch) => {
                self.advance();
                let span = Span::new(escape_start, self.pos);
                self.diagnostics.push(Diagnostic::error(
                    Phase::Lexical,
                    ErrorCode::InvalidEscape,
                    span,
                    format!("invalid escape sequence: \\{}", ch),
                ));
            }
        }
    }

    /// Consume a label literal `::name::`. The first colon is consumed.
    /// The name is 1 to 5 letters, digits, or underscores; anything else
    /// is reported but still yields a best-effort `LabelLit`.
    /// 消耗标签字面量 `::name::`。第一个冒号已被消耗。名称为 1 到 5
    /// 个字母、数字或下划线；其他情况会报告错误，但仍产生尽力而为的
    /// `LabelLit`。
    fn label_literal(&mut self, first: char, start: Position) -> TokenKind {
        if self.peek_char() != Some(':') {
            self.error_unrecognized_char(first, start);
            return TokenKind::Unknown;
        }
        self.advance();

        let mut name_len = 0usize;
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                name_len += 1;
                self.advance();
            } else {
                break;
            }
        }

        let closed = self.peek_char() == Some(':') && self.peek_nth(1) == Some(':');
        if closed {
            self.advance();
            self.advance();
        }

        if !closed || name_len == 0 || name_len > 5 {
            let span = Span::new(start, self.pos);
            let message = if !closed {
                "label is missing its closing `::`".to_string()
            } else {
                format!("label name must be 1 to 5 characters, found {}", name_len)
            };
            self.diagnostics.push(
                Diagnostic::error(Phase::Lexical, ErrorCode::MalformedLabel, span, message)
                    .with_label(Label::new(span, "malformed label")),
            );
        }
        TokenKind::LabelLit
    }

    /// Consume a number literal. The first digit is already consumed.
    /// `1..5` stays an integer followed by `..`; a bare trailing radix
    /// point is an error but still produces a `FloatLit`.
    /// 消耗数字字面量。第一个数字已被消耗。`1..5` 保持为整数后跟
    /// `..`；孤立的小数点是错误，但仍产生 `FloatLit`。
    fn number(&mut self, start: Position) -> TokenKind {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        if self.peek_char() != Some('.') {
            return TokenKind::IntLit;
        }

        match self.peek_nth(1) {
            // Two dots form the concatenation operator, not a fraction.
            // 两个点构成连接运算符，而非小数部分。
            Some('.') => TokenKind::IntLit,
            Some(ch) if ch.is_ascii_digit() => {
                self.advance();
                while let Some(ch) = self.peek_char() {
                    if ch.is_ascii_digit() {
                        self.advance();
                    } else {
                        break;
                    }
                }
                TokenKind::FloatLit
            }
            _ => {
                self.advance();
                let span = Span::new(start, self.pos);
                self.diagnostics.push(
                    Diagnostic::error(
                        Phase::Lexical,
                        ErrorCode::UnfinishedFlux,
                        span,
                        "flux literal has no digits after the radix point",
                    )
                    .with_label(Label::new(span, "expected digits after `.`")),
                );
                TokenKind::FloatLit
            }
        }
    }

    /// Consume an identifier or keyword. The first char is consumed.
    /// 消耗标识符或关键字。第一个字符已被消耗。
    fn identifier(&mut self, start: Position) -> TokenKind {
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        // Check for keywords - 检查是否为关键字
        let text = &self.source[start.offset as usize..self.pos.offset as usize];
        TokenKind::keyword_from_str(text).unwrap_or(TokenKind::Ident)
    }

    /// Report an unrecognized character error.
    /// 报告无法识别的字符错误。
    fn error_unrecognized_char(&mut self, ch: char, start: Position) {
        let span = Span::new(start, self.pos);
        self.diagnostics.push(
            Diagnostic::error(
                Phase::Lexical,
                ErrorCode::UnrecognizedChar,
                span,
                format!("unrecognized character: '{}'", ch),
            )
            .with_label(Label::new(span, "unrecognized character here")),
        );
    }

    /// Report an unterminated character literal.
    /// 报告未终止的字符字面量。
    fn error_unclosed_char(&mut self, start: Position) {
        let span = Span::new(start, self.pos);
        self.diagnostics.push(
            Diagnostic::error(
                Phase::Lexical,
                ErrorCode::UnclosedChar,
                span,
                "unterminated character literal",
            )
            .with_label(Label::new(span, "character opened here is never closed")),
        );
    }
}
