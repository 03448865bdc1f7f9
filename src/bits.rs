//! # 比特序列化模块
//!
//! 把消息中的每个字符转换为 8 位、高位在前、左侧补零的二进制字符串，
//! 并按字符顺序无分隔地拼接起来。

use crate::constants::BITS_PER_CHAR;
use crate::error::{Result, StegoError};

/// 单个字符的 8 位二进制表示，例如 `'A'` -> `"01000001"`。
///
/// # Errors
///
/// * [`StegoError::CharacterOutOfRange`] - 字符码点大于 255。`index` 为该字符在消息中的位置。
pub fn character_bits(character: char, index: usize) -> Result<String> {
    let code = u8::try_from(character)
        .map_err(|_| StegoError::CharacterOutOfRange { character, index })?;
    Ok(format!("{code:0width$b}", width = BITS_PER_CHAR))
}

/// 逐字符的二进制表示，供报告输出使用。
pub fn bit_groups(message: &str) -> Result<Vec<String>> {
    message
        .chars()
        .enumerate()
        .map(|(index, character)| character_bits(character, index))
        .collect()
}

/// 整条消息的比特串，长度为 `8 * len(message)`。
///
/// # Errors
///
/// 消息中任意字符超出 8 bits 范围时返回 [`StegoError::CharacterOutOfRange`]，不做截断。
pub fn to_bit_string(message: &str) -> Result<String> {
    Ok(bit_groups(message)?.concat())
}
