use crate::channel::Channel;
use crate::constants::{BITS_PER_CHAR, HEADER_DIGITS, MAX_MESSAGE_LEN};
use crate::error::{Result, StegoError};
use crate::grid::PixelGrid;

/// 奇数返回 `true` (比特 1)，偶数返回 `false` (比特 0)。
pub fn intensity_to_bit(value: u8) -> bool {
    value & 1 == 1
}

/// 以最小的改动 (±1) 使 `value` 的奇偶性与 `bit` 一致。
///
/// 奇数只会减一，偶数只会加一，因此 255 和 0 都不会越界。
pub fn adjust_intensity_for_bit(value: u8, bit: bool) -> u8 {
    match (intensity_to_bit(value), bit) {
        (true, false) => value - 1,
        (false, true) => value + 1,
        _ => value,
    }
}

/// 按列优先顺序把线性下标映射为像素坐标：`index = x * height + y`。
pub fn pixel_position(index: usize, height: u32) -> (u32, u32) {
    let height = height as usize;
    ((index / height) as u32, (index % height) as u32)
}

pub fn embed_bits<G: PixelGrid + ?Sized>(grid: &mut G, bits: &[bool], channel: Channel) -> Result<()> {
    let available = grid.pixel_count();
    if bits.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: bits.len(),
            available,
        });
    }

    let (_, height) = grid.dimensions();
    let slot = channel.index();

    for (i, &bit) in bits.iter().enumerate() {
        let (x, y) = pixel_position(i, height);
        let mut rgb = grid.get(x, y);
        rgb[slot] = adjust_intensity_for_bit(rgb[slot], bit);
        grid.set(x, y, rgb);
    }

    log::debug!("embedded {} bits into the {} channel", bits.len(), channel);
    Ok(())
}

pub fn extract_channel_values<G: PixelGrid + ?Sized>(grid: &G, channel: Channel) -> Vec<u8> {
    let (width, height) = grid.dimensions();
    let slot = channel.index();

    (0..width)
        .flat_map(|x| (0..height).map(move |y| (x, y)))
        .map(|(x, y)| grid.get(x, y)[slot])
        .collect()
}

/// 给定尺寸的图像最多能隐藏的字符数。
pub fn max_message_len(width: u32, height: u32) -> usize {
    let pixels = width as usize * height as usize;
    (pixels / BITS_PER_CHAR)
        .saturating_sub(HEADER_DIGITS)
        .min(MAX_MESSAGE_LEN)
}
