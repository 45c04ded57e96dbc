//! # parity_hide 库
//!
//! 本库包含奇偶校验 LSB 隐写工具的核心逻辑：消息被编码为带三位长度头部的比特流，
//! 每个像素指定颜色通道数值的奇偶性携带 1 bit，按列优先顺序写入。

// 声明库包含的所有模块。

pub mod channel;
pub mod cli;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod grid;
pub mod handler;
pub mod steganography;

pub use channel::Channel;
pub use decoder::decode;
pub use encoder::encode_into;
pub use error::{Result, StegoError};
pub use grid::PixelGrid;
