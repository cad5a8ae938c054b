//! The `soluna tokens` command.
//! `soluna tokens` 命令。

use soluna_lexer::tokenize;
use std::fs;

/// Dump the token stream of a Soluna file.
/// 输出 Soluna 文件的 token 流。
pub fn run(file: &str, trivia: bool) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let (tokens, diagnostics) = tokenize(&source);

    for token in &tokens {
        if !trivia && token.is_trivia() {
            continue;
        }
        println!(
            "{:>4}:{:<3} {:<12} {:?}",
            token.span.start.line,
            token.span.start.col,
            token.kind.type_str(),
            token.lexeme
        );
    }

    for diag in &diagnostics {
        soluna_diagnostic::emit(&source, file, diag);
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(format!("{} lexical error(s) found", diagnostics.len()))
    }
}
