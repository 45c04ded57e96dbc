//! # 编码模块
//!
//! 把消息转换为带长度头部的比特流，并写入像素网格的指定颜色通道。

use crate::channel::Channel;
use crate::constants::{BITS_PER_CHAR, HEADER_DIGITS, MAX_CODE_POINT, MAX_MESSAGE_LEN};
use crate::error::{Result, StegoError};
use crate::grid::PixelGrid;
use crate::steganography::embed_bits;

/// 在消息前加上三位、左侧补零的长度头部。
///
/// # Errors
///
/// 消息超过 999 个字符时返回 [`StegoError::MessageTooLong`]。
pub fn prepend_header(message: &str) -> Result<String> {
    let length = message.chars().count();
    if length > MAX_MESSAGE_LEN {
        return Err(StegoError::MessageTooLong {
            length,
            max: MAX_MESSAGE_LEN,
        });
    }

    Ok(format!("{length:0width$}{message}", width = HEADER_DIGITS))
}

/// 把每个字符转换为 8 个比特，高位在前。
///
/// # Errors
///
/// 码位超过 U+00FF 的字符返回 [`StegoError::UnencodableChar`]。
pub fn message_to_bits(text: &str) -> Result<Vec<bool>> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);

    for (index, ch) in text.chars().enumerate() {
        if u32::from(ch) > MAX_CODE_POINT {
            return Err(StegoError::UnencodableChar { ch, index });
        }
        let byte = u32::from(ch) as u8;
        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1 == 1));
    }

    Ok(bits)
}

/// 生成头部加消息的完整比特流。
pub fn encode(message: &str) -> Result<Vec<bool>> {
    let framed = prepend_header(message)?;
    let bits = message_to_bits(&framed)?;
    log::debug!(
        "encoded {} characters into {} bits",
        message.chars().count(),
        bits.len()
    );
    Ok(bits)
}

/// 将消息原地写入 `grid` 的 `channel` 通道。
///
/// 在修改任何像素之前完成全部校验，失败时 `grid` 保持不变。
pub fn encode_into<G: PixelGrid + ?Sized>(grid: &mut G, message: &str, channel: Channel) -> Result<()> {
    let bits = encode(message)?;
    embed_bits(grid, &bits, channel)
}

/// 返回写入消息后的副本，原网格不受影响。
pub fn hide_message<G: PixelGrid + Clone>(grid: &G, message: &str, channel: Channel) -> Result<G> {
    let mut doctored = grid.clone();
    encode_into(&mut doctored, message, channel)?;
    Ok(doctored)
}
