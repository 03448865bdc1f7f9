//! # 像素窗口模块
//!
//! 按光栅顺序取出载体图像的前 `3 * len(message)` 个像素作为嵌入区域，
//! 以及把编码后的窗口写回图像。

use crate::error::{Result, StegoError};
use image::{ImageBuffer, Pixel};

/// 复制图像的前 `pixel_count` 个像素，原图不会被修改。
///
/// # Errors
///
/// * [`StegoError::CapacityExceeded`] - 图像像素数少于 `pixel_count`。
pub fn select_window<P>(image: &ImageBuffer<P, Vec<u8>>, pixel_count: usize) -> Result<Vec<P>>
where
    P: Pixel<Subpixel = u8>,
{
    let available = image.width() as usize * image.height() as usize;
    if pixel_count > available {
        return Err(StegoError::CapacityExceeded {
            required: pixel_count,
            available,
        });
    }

    Ok(image.pixels().take(pixel_count).copied().collect())
}

/// 用 `window` 覆盖图像开头对应数量的像素。
pub fn write_window<P>(image: &mut ImageBuffer<P, Vec<u8>>, window: &[P])
where
    P: Pixel<Subpixel = u8>,
{
    image
        .pixels_mut()
        .zip(window)
        .for_each(|(target, source)| *target = *source);
}
