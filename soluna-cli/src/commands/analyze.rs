//! The `soluna analyze` command.
//! `soluna analyze` 命令。

use soluna_analysis::Response;
use std::fs;

/// Analyze a Soluna file and print the wire-format JSON response.
/// 分析 Soluna 文件并打印线上格式的 JSON 响应。
pub fn run(file: &str, pretty: bool) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let response = Response::from_source(&source);

    let json = if pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .map_err(|e| format!("cannot encode response: {}", e))?;

    println!("{json}");
    Ok(())
}
