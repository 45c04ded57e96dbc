/// 消息头部的十进制位数。
/// 头部以三位十进制 ASCII 数字 (左侧补零) 记录消息的字符数。
pub const HEADER_DIGITS: usize = 3;

/// 每个字符占用的比特数。
/// 每个像素只携带 1 bit，因此一个字符需要 8 个像素。
pub const BITS_PER_CHAR: usize = 8;

/// 头部占用的像素数 (3 * 8 = 24)。
pub const HEADER_BITS: usize = HEADER_DIGITS * BITS_PER_CHAR;

/// 三位头部能够表示的最大消息长度。
pub const MAX_MESSAGE_LEN: usize = 999;

/// 单个字符允许的最大码位 (Latin-1)，超出部分无法用一个字节表示。
pub const MAX_CODE_POINT: u32 = 0xFF;
