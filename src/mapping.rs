//! # 通道映射与容量模块
//!
//! 把逻辑位索引映射到 RGBA 像素缓冲区中的物理字节偏移，并根据图像尺寸
//! 计算精确的容量上界。编码与解码必须使用同一个映射函数，
//! 两侧出现任何偏差都是正确性错误。

use crate::constants::{CHANNELS_PER_PIXEL, HEADER_SIZE, USABLE_CHANNELS};

/// 把逻辑位索引 `bit_idx` (只计非 alpha 字节) 映射为像素缓冲区中的字节偏移。
///
/// 每 3 个连续的逻辑位落在同一像素的 R、G、B 字节上 (像素内偏移 0、1、2)，
/// 随后跳过 alpha 字节 (偏移 3) 进入下一个像素：
///
/// ```text
/// offset(b) = 4 * (b / 3) + b % 3
/// ```
pub fn channel_offset(bit_idx: usize) -> usize {
    CHANNELS_PER_PIXEL * (bit_idx / USABLE_CHANNELS) + bit_idx % USABLE_CHANNELS
}

/// 给定图像尺寸下，帧 (头部 + 载荷) 最多可占用的字节数。
/// 每像素 3 个可用位，即 `floor(width * height * 3 / 8)`。
pub fn max_total_bytes(width: u32, height: u32) -> usize {
    (u64::from(width) * u64::from(height) * USABLE_CHANNELS as u64 / 8) as usize
}

/// 给定图像尺寸下，载荷本身最多可占用的字节数 (总容量减去头部)。
pub fn max_payload_bytes(width: u32, height: u32) -> usize {
    max_total_bytes(width, height).saturating_sub(HEADER_SIZE)
}

/// 图像是否大到至少能容纳头部之外的数据。
pub fn is_valid_image_size(width: u32, height: u32) -> bool {
    max_total_bytes(width, height) > HEADER_SIZE
}

/// 载荷长度是否落在 `0 < len <= 最大载荷字节数` 的有效区间内。
pub fn is_valid_payload_size(len: usize, width: u32, height: u32) -> bool {
    len > 0 && len <= max_payload_bytes(width, height)
}
