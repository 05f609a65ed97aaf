//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::{DEFAULT_BIT_DEPTH, MAX_BIT_DEPTH, MIN_BIT_DEPTH};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 一款基于位平面隐写术的命令行工具，用于把一幅图像隐藏在另一幅图像的低位中，或将其提取出来。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于位平面隐写术的命令行工具，用于把一幅图像隐藏在另一幅图像每个通道的低位中，或将其提取出来。\n提取结果只保留秘密图像每个通道的高位，是原图的近似。"
)]
pub struct Cli {
    /// 输出更详细的日志 (-v 为 info, -vv 为 debug)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：embed (嵌入) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将秘密图像隐藏到载体图像中。
    Embed(EmbedArgs),

    /// 从隐写图像中提取秘密图像。
    Extract(ExtractArgs),
}

/// 'embed' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// 载体图像的文件路径。
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// 要隐藏的秘密图像的文件路径。
    #[arg(short, long)]
    pub secret: PathBuf,

    /// 隐写结果的输出路径。省略时在载体旁生成 `encoded_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 每个通道用于承载秘密的低位数。
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BIT_DEPTH,
        value_parser = clap::value_parser!(u8).range(MIN_BIT_DEPTH as i64..=MAX_BIT_DEPTH as i64)
    )]
    pub bits: u8,

    /// 不缩放秘密图像；尺寸与载体不同时直接报错。
    #[arg(long)]
    pub no_resize: bool,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已隐藏秘密图像的隐写图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取结果的输出路径。省略时在输入旁生成 `decoded_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 嵌入时使用的低位数，必须与嵌入时一致。
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BIT_DEPTH,
        value_parser = clap::value_parser!(u8).range(MIN_BIT_DEPTH as i64..=MAX_BIT_DEPTH as i64)
    )]
    pub bits: u8,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}
