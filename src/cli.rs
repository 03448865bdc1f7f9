//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::embed::EmbedConfig;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于奇偶校验 LSB 隐写的命令行工具，把文本隐藏在无损格式图像 (如 PNG, BMP) 的像素中。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于奇偶校验 LSB 隐写的命令行工具。每个字符占用 3 个像素，其中 8 个颜色通道的奇偶性表示字符的 8 个比特，第 9 个通道标记消息是否结束。"
)]
pub struct HideArgs {
    /// 要隐藏的文本，每个字符的码点必须在 0-255 之间。
    pub message: String,

    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    pub image: PathBuf,

    /// 保存结果图像的输出路径，默认为输入文件同目录下的 `doctored_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,

    /// 调试模式：输出每个通道要求的奇偶性以及逐像素的跟踪日志。
    #[arg(long)]
    pub debug: bool,
}

impl HideArgs {
    /// 由命令行参数得到嵌入配置。
    pub fn config(&self) -> EmbedConfig {
        EmbedConfig { debug: self.debug }
    }
}
