//! The `soluna check` command.
//! `soluna check` 命令。

use crate::output;
use soluna_analysis::analyze;
use soluna_diagnostic::emit;
use std::fs;

/// Run lexical and syntactic analysis on a Soluna file.
/// 对 Soluna 文件运行词法和语法分析。
pub fn run(file: &str, verbose: bool) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let analysis = analyze(&source);

    for diag in &analysis.diagnostics {
        emit(&source, file, diag);
    }

    if verbose {
        output::info(&format!("{} token(s)", analysis.tokens.len()));
        if analysis.tree.is_some() {
            output::info("parse tree built");
        }
    }

    if analysis.has_errors() {
        output::error(&format!("{} error(s) found", analysis.diagnostics.len()));
        return Err("analysis error".to_string());
    }

    output::success("OK - No errors found");
    Ok(())
}
