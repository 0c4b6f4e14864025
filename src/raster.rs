//! # 栅格协作者模块
//!
//! 编解码器不直接依赖任何具体的图像类型，只要求协作者暴露一个
//! 宽高已知、R,G,B,A 交错排列的扁平字节缓冲区，并能从这样的缓冲区
//! 构造出新图像。文件读写、格式解码等全部留在核心之外。

use image::RgbaImage;

use crate::error::{Result, StegoError};

/// 隐写编解码器所需的最小图像抽象。
///
/// `rgba_bytes` 采用复制语义：编解码器拿到的是自己的缓冲区，
/// 绝不会就地修改调用方仍持有的像素数据。
pub trait Raster: Sized {
    /// 图像的 (宽, 高)，单位为像素。
    fn dimensions(&self) -> (u32, u32);

    /// 以 `宽 × 高 × 4` 字节、R,G,B,A 交错的形式复制出像素缓冲区。
    fn rgba_bytes(&self) -> Vec<u8>;

    /// 从像素缓冲区构造新图像。
    ///
    /// # Errors
    ///
    /// 缓冲区长度与 `width * height * 4` 不符时返回 [`StegoError::Corruption`]。
    fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self>;
}

impl Raster for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn rgba_bytes(&self) -> Vec<u8> {
        self.as_raw().clone()
    }

    fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        RgbaImage::from_raw(width, height, data).ok_or_else(|| {
            StegoError::Corruption(format!(
                "pixel buffer does not match the declared {width}x{height} dimensions"
            ))
        })
    }
}
