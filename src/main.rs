use clap::Parser;

use diff_hide::{
    cli::{Cli, Commands},
    handler::{handle_debug, handle_decode, handle_encode},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`enc`、`dec` 或 `debug`）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Enc(args) => handle_encode(args),
        Commands::Dec(args) => handle_decode(args),
        Commands::Debug(args) => handle_debug(args),
    }
}
