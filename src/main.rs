use clap::Parser;

use bitveil::{
    cli::{Cli, Commands},
    handler::{handle_check, handle_decode, handle_encode, handle_info},
};

/// 程序的主入口点
///
/// 负责解析命令行参数、初始化日志，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 日志输出到 stderr，RUST_LOG 作为基础配置
    env_logger::Builder::from_default_env()
        .filter_level(cli.loglevel.to_level_filter())
        .format_timestamp(None)
        .try_init()?;

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Encode(args) => handle_encode(args),
        Commands::Decode(args) => handle_decode(args),
        Commands::Check(args) => handle_check(args),
        Commands::Info(args) => handle_info(args),
    }
}
