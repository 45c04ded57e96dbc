//! # 颜色通道模块
//!
//! 定义携带隐藏数据的颜色通道。

use crate::error::StegoError;
use clap::ValueEnum;
use std::fmt;

/// 承载隐藏比特的颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Channel {
    Red,
    #[default]
    Green,
    Blue,
}

impl Channel {
    /// 通道在 RGB 三元组中的下标。
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = StegoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            other => Err(StegoError::InvalidChannel(other)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}
