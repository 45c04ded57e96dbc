//! # 错误类型模块
//!
//! 隐写编解码过程中可能出现的错误。解码端找不到消息不属于错误，
//! 而是通过 `Option` 返回 `None`。

use thiserror::Error;

/// 编解码操作的 `Result` 别名。
pub type Result<T> = std::result::Result<T, StegoError>;

/// 编码或参数校验失败时返回的错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 比特流长度超过图像的像素数。
    #[error("Not enough space in the image: need {required} pixels, have {available}")]
    CapacityExceeded { required: usize, available: usize },

    /// 消息长度超出三位头部所能表示的范围。
    #[error("Message is too long: {length} characters, at most {max} are supported")]
    MessageTooLong { length: usize, max: usize },

    /// 字符无法用单个字节表示。
    #[error("Character {ch:?} at index {index} cannot be encoded as a single byte")]
    UnencodableChar { ch: char, index: usize },

    /// 颜色通道索引不是 0、1 或 2。
    #[error("Invalid channel index {0}: expected 0 (red), 1 (green) or 2 (blue)")]
    InvalidChannel(u8),
}
