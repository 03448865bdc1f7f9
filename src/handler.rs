//! # 命令处理逻辑模块
//!
//! 包含隐藏文本的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::HideArgs;
use crate::constants::DEFAULT_OUTPUT_PREFIX;
use crate::embed::{EmbedConfig, EmbedReport, embed_message};
use crate::error::StegoError;
use crate::report::print_report;
use anyhow::{Context, Result};
use colored::Colorize;
use image::{DynamicImage, ImageBuffer, Pixel, PixelWithColorType};
use std::path::{Path, PathBuf};

/// 未指定输出路径时的默认路径：与输入同目录，文件名前加 `doctored_`。
pub fn default_dest(image: &Path) -> PathBuf {
    let file_name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image.png".to_owned());
    image.with_file_name(format!("{DEFAULT_OUTPUT_PREFIX}{file_name}"))
}

/// 打开并解码载体图像。
///
/// # Errors
///
/// * [`StegoError::CarrierUnreadable`] - 文件不存在或格式无法解码。
pub fn load_carrier(path: &Path) -> Result<DynamicImage, StegoError> {
    image::open(path).map_err(|source| StegoError::CarrierUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

fn embed_and_save<P>(
    mut buffer: ImageBuffer<P, Vec<u8>>,
    message: &str,
    config: EmbedConfig,
    dest: &Path,
) -> Result<EmbedReport>
where
    P: Pixel<Subpixel = u8> + PixelWithColorType,
{
    let report = embed_message(&mut buffer, message, config)?;

    buffer
        .save(dest)
        .map_err(|source| StegoError::CarrierUnwritable {
            path: dest.to_path_buf(),
            source,
        })?;

    Ok(report)
}

/// 处理隐藏文本的执行逻辑。
///
/// 负责读取图像、检查输出路径、调用嵌入流程并打印报告，最后将结果写入目标图像文件。
/// 带 Alpha 通道的图像保留 Alpha，其余图像按 8 位 RGB 处理。
///
/// # Arguments
///
/// * `args` - 包含消息、输入/输出路径和调试开关的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 目标文件已存在且未指定 `--force`。
/// * 消息为空、图像空间不足，或消息含有超出 8 bits 的字符。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<EmbedReport> {
    let config = args.config();
    let dest = args.dest.clone().unwrap_or_else(|| default_dest(&args.image));

    let carrier = load_carrier(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    if dest.exists() && !args.force {
        return Err(StegoError::OutputExists { path: dest }.into());
    }

    tracing::debug!(
        image = %args.image.display(),
        dest = %dest.display(),
        color = ?carrier.color(),
        "carrier loaded"
    );

    let report = if carrier.color().has_alpha() {
        embed_and_save(carrier.to_rgba8(), &args.message, config, &dest)
    } else {
        embed_and_save(carrier.to_rgb8(), &args.message, config, &dest)
    }
    .with_context(|| {
        format!(
            "Failed to hide the message in {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    print_report(&report);

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(report)
}
