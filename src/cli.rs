//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// 一款基于参照图像比对的隐写命令行工具：对照原始图像翻转颜色通道的单个比特，
/// 把任意数据文件藏进 PNG 图像，之后用原始图像恢复数据。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于参照图像比对的隐写命令行工具：对照原始图像翻转颜色通道的单个比特，把任意数据文件藏进 PNG 图像，之后用原始图像恢复数据。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：enc (嵌入)、dec (恢复) 和 debug (容量诊断)。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 把数据文件嵌入原始图像，输出一张携带数据的 PNG。
    Enc(EncArgs),

    /// 对照原始图像，从被修改的图像中恢复隐藏的数据。
    Dec(DecArgs),

    /// 打印原始图像能承载的最大数据量。
    Debug(DebugArgs),
}

/// 'enc' 命令所需的参数。
#[derive(Args, Debug)]
pub struct EncArgs {
    /// 作为载体的原始图像文件路径。
    pub origin: PathBuf,

    /// 要隐藏的数据文件路径。
    pub data: PathBuf,

    /// 嵌入完成后保存结果图像的输出路径，必须以 .png 结尾。
    pub output: PathBuf,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'dec' 命令所需的参数。
#[derive(Args, Debug)]
pub struct DecArgs {
    /// 作为参照的原始图像文件路径。
    pub origin: PathBuf,

    /// 携带隐藏数据的图像文件路径。
    pub modified: PathBuf,

    /// 恢复数据后保存内容的输出路径。
    pub output: PathBuf,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'debug' 命令所需的参数。
#[derive(Args, Debug)]
pub struct DebugArgs {
    /// 要检查容量的原始图像文件路径。
    pub origin: PathBuf,
}
