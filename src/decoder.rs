//! # 解码模块
//!
//! 从颜色通道数值的奇偶性中还原比特流，再根据头部记录的长度取出消息。
//! 找不到消息时返回 `None` 或长度 0，而不是报错。

use crate::channel::Channel;
use crate::constants::{BITS_PER_CHAR, HEADER_BITS, HEADER_DIGITS};
use crate::grid::PixelGrid;
use crate::steganography::{extract_channel_values, intensity_to_bit};

/// 将恰好 8 个通道数值还原为一个字符，数量不符时返回 `None`。
pub fn bits_to_char(values: &[u8]) -> Option<char> {
    if values.len() != BITS_PER_CHAR {
        return None;
    }

    let byte = values
        .iter()
        .fold(0u8, |acc, &value| (acc << 1) | u8::from(intensity_to_bit(value)));
    Some(char::from(byte))
}

/// 解码 `count` 个字符，要求 `values.len() == count * 8`。
pub fn decode_chars(values: &[u8], count: usize) -> Option<String> {
    if count.checked_mul(BITS_PER_CHAR) != Some(values.len()) {
        return None;
    }

    values.chunks_exact(BITS_PER_CHAR).map(bits_to_char).collect()
}

/// 读取长度头部。
///
/// 数值不足或头部不是纯数字时返回 0，表示没有隐藏消息。
pub fn read_header(values: &[u8], header_length: usize) -> usize {
    let Some(header_bits) = header_length.checked_mul(BITS_PER_CHAR) else {
        return 0;
    };
    let Some(region) = values.get(..header_bits) else {
        return 0;
    };

    decode_chars(region, header_length)
        .filter(|text| !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()))
        .and_then(|text| text.parse().ok())
        .unwrap_or(0)
}

/// 从已展开的通道数值中取出消息，头部之后多余的数值会被忽略。
pub fn decode_values(values: &[u8]) -> Option<String> {
    let length = read_header(values, HEADER_DIGITS);
    let end = HEADER_BITS + length * BITS_PER_CHAR;
    log::debug!("header declares {length} characters");

    let body = values.get(HEADER_BITS..end)?;
    decode_chars(body, length)
}

/// 读取 `grid` 中 `channel` 通道隐藏的消息，不会修改网格。
pub fn decode<G: PixelGrid + ?Sized>(grid: &G, channel: Channel) -> Option<String> {
    let values = extract_channel_values(grid, channel);
    decode_values(&values)
}

/// 长度为 0 的头部与无法解码同样视为没有消息。
pub fn has_message<G: PixelGrid + ?Sized>(grid: &G, channel: Channel) -> bool {
    decode(grid, channel).is_some_and(|message| !message.is_empty())
}
