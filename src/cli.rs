//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令、全局日志级别和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// 图像隐写的载荷工具：把单字节文本编码为比特流、把比特流还原为文本，并检查图像容量是否足够。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "图像隐写的载荷工具：把单字节文本编码为比特流、把比特流还原为文本，并检查图像容量是否足够。"
)]
pub struct Cli {
    /// 日志级别 (输出到 stderr)。
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub loglevel: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 将文本文件编码为比特流。
    Encode(EncodeArgs),

    /// 将比特流文件解码为文本。
    Decode(DecodeArgs),

    /// 检查图像容量是否足以容纳文本。
    Check(CheckArgs),

    /// 显示图像尺寸、格式和容量。
    Info(InfoArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// 要编码的文本文件路径 (UTF-8，且每个字符码位不超过 255)。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 比特流的输出路径。省略时输出到标准输出。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// 比特流文件路径。首尾空白会被忽略。
    #[arg(short, long)]
    pub bits: PathBuf,

    /// 文本的输出路径。省略时输出到标准输出。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'check' 命令所需的参数。
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// 载体图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 待隐藏的文本文件路径。
    #[arg(short, long)]
    pub text: PathBuf,
}

/// 'info' 命令所需的参数。
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// 图像路径。
    #[arg(short, long)]
    pub image: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// 关闭日志。
    Off,
    /// 只显示错误。
    Error,
    /// 显示警告和错误 (默认)。
    Warn,
    /// 显示一般信息。
    Info,
    /// 显示调试信息。
    Debug,
    /// 显示全部日志。
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
