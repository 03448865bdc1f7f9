//! # 奇偶隐写核心模块
//!
//! 每个字符占用一个字符槽：3 个像素、9 个颜色通道。
//! 前 8 个通道按 `p0.r, p0.g, p0.b, p1.r, p1.g, p1.b, p2.r, p2.g` 的顺序承载字符的 8 个比特，
//! 比特 `0` 对应偶数，比特 `1` 对应奇数。
//! 第 9 个通道 (`p2.b`) 是标记通道：后面还有字符时为偶数，最后一个字符时为奇数。
//! 解码端因此可以逐槽扫描，遇到第一个奇数标记即停止，而不需要事先知道消息长度。

use crate::constants::{BITS_PER_CHAR, COLOR_CHANNELS, MARKER_CHANNEL, PIXELS_PER_CHAR};
use image::Pixel;

/// 把 `value` 调整为指定奇偶性，需要时减 1。
///
/// 唯一的例外是 `0` 需要变为奇数的情况：此时结果为 `1`，保证通道值不越界。
pub fn force_parity(value: u8, odd: bool) -> u8 {
    if (value % 2 == 1) == odd {
        value
    } else {
        value.checked_sub(1).unwrap_or(1)
    }
}

/// 一个字符槽：字符对应的 3 个像素、8 个比特，以及它是否为消息中的最后一个槽。
pub struct CharacterSlot<'a, P> {
    pub index: usize,
    pub pixels: &'a mut [P],
    pub bits: &'a [u8],
    pub is_last: bool,
}

impl<P> CharacterSlot<'_, P>
where
    P: Pixel<Subpixel = u8>,
{
    /// 对本槽的 8 个载荷通道和 1 个标记通道强制奇偶性。
    pub fn encode(&mut self) {
        let mut bits = self.bits.iter();

        for (pixel_index, pixel) in self.pixels.iter_mut().enumerate() {
            let channels = pixel.channels_mut().iter_mut().take(COLOR_CHANNELS);
            for (channel_index, channel) in channels.enumerate() {
                let is_marker =
                    pixel_index == PIXELS_PER_CHAR - 1 && channel_index == MARKER_CHANNEL;
                let odd = if is_marker {
                    self.is_last
                } else {
                    bits.next().is_some_and(|&bit| bit == b'1')
                };
                *channel = force_parity(*channel, odd);
            }
        }
    }
}

/// 把像素窗口与比特串切分为字符槽的有限迭代器，可以重复创建。
pub fn character_slots<'a, P>(
    window: &'a mut [P],
    bits: &'a str,
) -> impl Iterator<Item = CharacterSlot<'a, P>> + 'a {
    let slot_count = window.len() / PIXELS_PER_CHAR;

    window
        .chunks_exact_mut(PIXELS_PER_CHAR)
        .zip(bits.as_bytes().chunks_exact(BITS_PER_CHAR))
        .enumerate()
        .map(move |(index, (pixels, bits))| CharacterSlot {
            index,
            pixels,
            bits,
            is_last: index + 1 == slot_count,
        })
}

/// 将比特串嵌入像素窗口。
///
/// 调用方需保证 `window.len() == 3 * n`、`bits.len() == 8 * n`，且像素至少有 3 个颜色通道，
/// 容量与字符范围的检查都在上游完成，本函数不会失败。
pub fn encode<P>(window: &mut [P], bits: &str)
where
    P: Pixel<Subpixel = u8>,
{
    debug_assert_eq!(
        window.len() / PIXELS_PER_CHAR,
        bits.len() / BITS_PER_CHAR,
        "pixel window and bit string describe a different number of characters"
    );

    for mut slot in character_slots(window, bits) {
        slot.encode();
        tracing::debug!(
            slot = slot.index,
            bits = %String::from_utf8_lossy(slot.bits),
            is_last = slot.is_last,
            "character slot encoded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn parity_is_forced_by_decrement() {
        assert_eq!(force_parity(100, false), 100);
        assert_eq!(force_parity(100, true), 99);
        assert_eq!(force_parity(101, true), 101);
        assert_eq!(force_parity(101, false), 100);
        assert_eq!(force_parity(255, false), 254);
    }

    #[test]
    fn zero_becomes_one_when_odd_is_required() {
        assert_eq!(force_parity(0, true), 1);
        assert_eq!(force_parity(0, false), 0);
    }

    #[test]
    fn single_character_gets_termination_marker() {
        let mut window = vec![Rgb([200u8, 200, 200]); 3];
        // 'A' = 01000001
        encode(&mut window, "01000001");
        assert_eq!(window[0], Rgb([200, 199, 200]));
        assert_eq!(window[1], Rgb([200, 200, 200]));
        assert_eq!(window[2], Rgb([200, 199, 199]));
    }

    #[test]
    fn alpha_channel_is_left_alone() {
        let mut window = vec![Rgba([10u8, 10, 10, 7]); 3];
        encode(&mut window, "11111111");
        assert!(window.iter().all(|p| p[3] == 7));
        assert!(window.iter().all(|p| p.0[..3].iter().all(|c| c % 2 == 1)));
    }

    #[test]
    fn slots_know_which_one_is_last() {
        let mut window = vec![Rgb([0u8, 0, 0]); 9];
        let bits = "000000001111111101010101";
        let flags: Vec<(usize, bool)> = character_slots(&mut window, bits)
            .map(|slot| (slot.index, slot.is_last))
            .collect();
        assert_eq!(flags, vec![(0, false), (1, false), (2, true)]);
    }
}
