//! Soluna CLI - offline front end for the Soluna analysis engine.
//! Soluna CLI - Soluna 分析引擎的离线前端。

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "soluna")]
#[command(author, version, about = "Soluna - live lexical and syntactic analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Dump the token stream of a file. / 输出文件的 token 流。
    Tokens {
        /// The file to tokenize. / 要进行词法分析的文件。
        file: String,

        /// Include whitespace and comment tokens. / 包含空白和注释 token。
        #[arg(long)]
        trivia: bool,
    },

    /// Check a file and render its diagnostics. / 检查文件并渲染诊断信息。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },

    /// Analyze a file and print the JSON response. / 分析文件并打印 JSON 响应。
    Analyze {
        /// The file to analyze. / 要分析的文件。
        file: String,

        /// Pretty-print the JSON output. / 美化 JSON 输出。
        #[arg(long)]
        pretty: bool,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokens { file, trivia } => commands::tokens::run(&file, trivia),
        Commands::Check { file } => commands::check::run(&file, cli.verbose),
        Commands::Analyze { file, pretty } => commands::analyze::run(&file, pretty),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
