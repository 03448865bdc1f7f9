//! # 嵌入流程模块
//!
//! 把容量检查、比特序列化、像素窗口选取和奇偶编码串联起来，
//! 并在编码前后对比像素窗口，生成只用于观察的 [`EmbedReport`]。

use crate::bits::bit_groups;
use crate::capacity::{check_capacity, pixel_count};
use crate::constants::{COLOR_CHANNELS, PIXELS_PER_CHAR};
use crate::error::{Result, StegoError};
use crate::steganography::encode;
use crate::window::{select_window, write_window};
use image::{ImageBuffer, Pixel};

/// 一次嵌入操作的配置，由命令行参数显式传入。
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbedConfig {
    /// 输出逐通道的详细跟踪信息。
    pub debug: bool,
}

/// 单个字符槽在编码前后的 RGB 值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    pub index: usize,
    pub character: char,
    pub bits: String,
    pub before: [[u8; COLOR_CHANNELS]; PIXELS_PER_CHAR],
    pub after: [[u8; COLOR_CHANNELS]; PIXELS_PER_CHAR],
    pub is_last: bool,
}

impl SlotReport {
    /// 本槽中被修改过的通道数量。
    pub fn changed_channels(&self) -> usize {
        self.before
            .iter()
            .flatten()
            .zip(self.after.iter().flatten())
            .filter(|(before, after)| before != after)
            .count()
    }
}

/// 嵌入结果的摘要。
#[derive(Debug, Clone)]
pub struct EmbedReport {
    pub message: String,
    pub image_pixels: usize,
    pub pixels_needed: usize,
    pub slots: Vec<SlotReport>,
    pub config: EmbedConfig,
}

impl EmbedReport {
    /// 全部被修改过的通道数量。
    pub fn changed_channels(&self) -> usize {
        self.slots.iter().map(SlotReport::changed_channels).sum()
    }
}

fn rgb<P: Pixel<Subpixel = u8>>(pixel: &P) -> [u8; COLOR_CHANNELS] {
    let channels = pixel.channels();
    [channels[0], channels[1], channels[2]]
}

fn rgb_triplet<P: Pixel<Subpixel = u8>>(
    pixels: &[P],
) -> [[u8; COLOR_CHANNELS]; PIXELS_PER_CHAR] {
    [rgb(&pixels[0]), rgb(&pixels[1]), rgb(&pixels[2])]
}

/// 把 `message` 嵌入 `image` 的前 `3 * len(message)` 个像素。
///
/// 图像只有在所有检查都通过后才会被修改。
///
/// # Errors
///
/// * [`StegoError::UnsupportedPixel`] - 像素少于 3 个颜色通道 (如 `Luma`, `LumaA`)。
/// * [`StegoError::EmptyMessage`] - 消息为空。
/// * [`StegoError::CapacityExceeded`] - 图像像素不足。
/// * [`StegoError::CharacterOutOfRange`] - 消息中含有码点大于 255 的字符。
pub fn embed_message<P>(
    image: &mut ImageBuffer<P, Vec<u8>>,
    message: &str,
    config: EmbedConfig,
) -> Result<EmbedReport>
where
    P: Pixel<Subpixel = u8>,
{
    if usize::from(P::CHANNEL_COUNT) < COLOR_CHANNELS {
        return Err(StegoError::UnsupportedPixel {
            channels: P::CHANNEL_COUNT,
        });
    }

    if message.is_empty() {
        return Err(StegoError::EmptyMessage);
    }

    let (width, height) = image.dimensions();
    let pixels_needed = check_capacity(message, width, height)?;
    let groups = bit_groups(message)?;
    let original = select_window(image, pixels_needed)?;

    tracing::info!(
        width,
        height,
        characters = groups.len(),
        pixels_needed,
        "embedding message"
    );

    let mut window = original.clone();
    encode(&mut window, &groups.concat());

    let slot_count = groups.len();
    let slots = message
        .chars()
        .zip(groups)
        .zip(
            original
                .chunks_exact(PIXELS_PER_CHAR)
                .zip(window.chunks_exact(PIXELS_PER_CHAR)),
        )
        .enumerate()
        .map(|(index, ((character, bits), (before, after)))| SlotReport {
            index,
            character,
            bits,
            before: rgb_triplet(before),
            after: rgb_triplet(after),
            is_last: index + 1 == slot_count,
        })
        .collect::<Vec<_>>();

    for slot in &slots {
        tracing::debug!(
            slot = slot.index,
            character = %slot.character,
            bits = %slot.bits,
            before = ?slot.before,
            after = ?slot.after,
            "slot diff"
        );
    }

    write_window(image, &window);

    Ok(EmbedReport {
        message: message.to_owned(),
        image_pixels: pixel_count(width, height),
        pixels_needed,
        slots,
        config,
    })
}
