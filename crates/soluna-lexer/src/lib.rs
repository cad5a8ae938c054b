//! Lexical analysis for Soluna.
//! Soluna 词法分析模块。
//!
//! This crate provides the lexer that converts source code into tokens.
//! 本 crate 提供词法分析器，将源代码转换为 token 序列。
//!
//! The token stream is lossless: whitespace and comments are tokens, and
//! concatenating every lexeme reproduces the input exactly.
//! token 流是无损的：空白和注释也是 token，拼接所有词素即可精确
//! 还原输入。

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use soluna_diagnostic::Diagnostic;

/// Tokenize source code in one call.
/// 一次调用完成词法分析。
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Lexer::new(source).tokenize()
}
