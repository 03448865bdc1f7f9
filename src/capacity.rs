//! # 容量检查模块
//!
//! 判断载体图像是否有足够的像素来容纳整条消息。
//! 每个字符固定占用 [`PIXELS_PER_CHAR`] 个像素，不支持只嵌入部分消息。

use crate::constants::PIXELS_PER_CHAR;
use crate::error::{Result, StegoError};

/// 图像的像素总数 (`width * height`)。
pub fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// 消息需要的像素数。长度按字符 (Unicode 标量值) 计算，而不是按字节。
pub fn pixels_needed(message: &str) -> usize {
    message.chars().count() * PIXELS_PER_CHAR
}

/// 当且仅当 `3 * len(message) <= width * height` 时返回 `true`。
pub fn text_fits(message: &str, width: u32, height: u32) -> bool {
    pixels_needed(message) <= pixel_count(width, height)
}

/// 与 [`text_fits`] 相同的判断，但在空间不足时返回同时包含所需和可用像素数的错误。
///
/// # Errors
///
/// * [`StegoError::CapacityExceeded`] - 消息所需像素数大于图像像素总数。
pub fn check_capacity(message: &str, width: u32, height: u32) -> Result<usize> {
    let required = pixels_needed(message);
    let available = pixel_count(width, height);

    if required > available {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }

    Ok(required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_is_accepted() {
        // 2 个字符需要 6 个像素，3x2 的图像刚好够用
        assert!(text_fits("Hi", 3, 2));
        assert_eq!(check_capacity("Hi", 3, 2).unwrap(), 6);
    }

    #[test]
    fn one_pixel_short_is_rejected() {
        assert!(!text_fits("Hi", 5, 1));
        match check_capacity("Hi", 5, 1) {
            Err(StegoError::CapacityExceeded {
                required,
                available,
            }) => {
                assert_eq!(required, 6);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 'é' 在 UTF-8 中占 2 个字节，但只算一个字符
        assert_eq!(pixels_needed("é"), 3);
        assert!(text_fits("é", 3, 1));
    }
}
