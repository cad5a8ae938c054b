//! Colored terminal output for the CLI.
//! CLI 的彩色终端输出。

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Print a success line in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Print an error line to stderr with a red prefix.
/// 以红色前缀向标准错误打印错误消息。
pub fn error(msg: &str) {
    eprintln!("{RED}error:{RESET} {msg}");
}

/// Print an informational line with a blue prefix.
/// 以蓝色前缀打印信息消息。
pub fn info(msg: &str) {
    println!("{BLUE}info:{RESET} {msg}");
}
