//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::channel::Channel;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 一款基于奇偶校验 LSB 隐写术的命令行工具，在无损格式图像的单个颜色通道中隐藏或恢复文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于奇偶校验 LSB 隐写术的命令行工具。每个像素的指定颜色通道携带 1 bit，\
                  消息前带有三位十进制长度头部，最多可隐藏 999 个字符。"
)]
pub struct Cli {
    /// 提高日志详细程度 (-v 为 info，-vv 为 debug，-vvv 为 trace)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中隐藏文本文件内容。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 显示图像最多能隐藏的字符数。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 结果图像的输出路径，默认为输入图像旁的 `<通道编号>_<文件名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 承载数据的颜色通道。
    #[arg(short, long, value_enum, default_value_t = Channel::Green)]
    pub channel: Channel,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本的保存路径，省略时直接输出到终端。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 承载数据的颜色通道。
    #[arg(short, long, value_enum, default_value_t = Channel::Green)]
    pub channel: Channel,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 待检查的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
