//! # 错误类型模块
//!
//! 库内部使用带类型的 [`StegoError`]；命令处理层再用 `anyhow` 附加上下文。

use std::path::PathBuf;
use thiserror::Error;

/// 隐写流程中可能出现的全部错误。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 载体图像无法打开或解码。
    #[error("Unable to open carrier image {}: {source}", .path.display())]
    CarrierUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 隐写后的图像无法编码或写入。
    #[error("Unable to write doctored image {}: {source}", .path.display())]
    CarrierUnwritable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 消息所需像素数超过图像像素总数。
    #[error("Not enough space in the image to hide the message. Required: {required} pixels, Available: {available} pixels")]
    CapacityExceeded { required: usize, available: usize },

    /// 字符码点超出 8 bits 可表示的范围。
    #[error("Character {character:?} at index {index} is outside the 8-bit range")]
    CharacterOutOfRange { character: char, index: usize },

    /// 像素的通道数少于 3 个 (如灰度图像)，没有 RGB 通道可供嵌入。
    #[error("Pixels with {channels} channel(s) cannot hold a message, at least 3 color channels are required")]
    UnsupportedPixel { channels: u8 },

    /// 空消息没有可以承载终止标记的字符槽。
    #[error("The message is empty, there is nothing to hide")]
    EmptyMessage,

    /// 输出文件已存在且未指定 `--force`。
    #[error("Output file already exists: {}. Use --force to overwrite it", .path.display())]
    OutputExists { path: PathBuf },
}

/// 本库统一使用的 `Result` 别名。
pub type Result<T> = std::result::Result<T, StegoError>;
