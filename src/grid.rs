//! # 像素网格模块
//!
//! 编解码器只通过 [`PixelGrid`] 访问像素，图像的加载与保存交给 `image` crate。

use image::{Rgb, RgbImage};

/// 由 RGB 三元组组成的二维像素网格。
pub trait PixelGrid {
    /// 返回 `(width, height)`。
    fn dimensions(&self) -> (u32, u32);

    fn get(&self, x: u32, y: u32) -> [u8; 3];

    fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]);

    /// 网格中的像素总数，即可携带的最大比特数。
    fn pixel_count(&self) -> usize {
        let (width, height) = self.dimensions();
        width as usize * height as usize
    }
}

impl PixelGrid for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }

    fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.put_pixel(x, y, Rgb(rgb));
    }
}
