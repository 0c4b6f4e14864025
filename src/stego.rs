//! # 隐写编解码器模块
//!
//! 编排位数组、帧格式与通道映射，实现 `encode` 与 `decode` 两个操作。
//! 两次调用之间不保留任何状态；编码对调用方而言是原子的：
//! 所有校验都在写入任何像素字节之前完成，失败的编码绝不会返回
//! 修改了一半的图像。

use crate::bits::{self, BitArray};
use crate::constants::{HEADER_BITS, HEADER_SIZE};
use crate::error::{Result, StegoError};
use crate::frame;
use crate::mapping;
use crate::raster::Raster;

/// 把 UTF-8 文本编码进图像 R/G/B 通道字节的最低有效位，返回一张新图像。
///
/// 源图像不会被修改；alpha 字节 (偏移 ≡ 3 mod 4) 原样保留。
///
/// # Errors
///
/// * [`StegoError::Capacity`] — 图像太小装不下任何数据，
///   或消息为空，或消息超出图像的最大可编码字节数。
pub fn encode<R: Raster>(message: &str, image: &R) -> Result<R> {
    let (width, height) = image.dimensions();
    if !mapping::is_valid_image_size(width, height) {
        return Err(StegoError::Capacity(format!(
            "a {width}x{height} image is not large enough to encode any data"
        )));
    }

    let payload = message.as_bytes();
    if !mapping::is_valid_payload_size(payload.len(), width, height) {
        return Err(StegoError::Capacity(format!(
            "message is {} bytes, but a {width}x{height} image can encode at most {} bytes (and no fewer than 1)",
            payload.len(),
            mapping::max_payload_bytes(width, height)
        )));
    }

    let frame_bits = BitArray::new(frame::build(payload)?);
    let mut data = image.rgba_bytes();

    // 帧的第 b 个位写入映射偏移处字节的最低有效位，其余 7 位不动。
    for (bit_idx, bit) in frame_bits.iter().enumerate() {
        let offset = mapping::channel_offset(bit_idx);
        data[offset] = bits::set_bit(data[offset], 0, bit);
    }

    R::from_rgba(width, height, data)
}

/// 从图像中恢复隐藏的 UTF-8 文本。
///
/// # Errors
///
/// * [`StegoError::Capacity`] — 图像太小，连头部都容纳不下。
/// * [`StegoError::Corruption`] — 头部声明的长度为 0 或超出图像剩余容量，
///   说明图像不含隐写数据或数据已损坏。
/// * [`StegoError::Decoding`] — 提取出的载荷不是合法的 UTF-8。
pub fn decode<R: Raster>(image: &R) -> Result<String> {
    let (width, height) = image.dimensions();
    if !mapping::is_valid_image_size(width, height) {
        return Err(StegoError::Capacity(format!(
            "a {width}x{height} image is too small to contain any encoded data"
        )));
    }

    let data = image.rgba_bytes();
    let payload_len = parse_header(&data);
    let max_total = mapping::max_total_bytes(width, height);

    if payload_len == 0 || HEADER_SIZE + payload_len > max_total {
        return Err(StegoError::Corruption(format!(
            "header declares a {payload_len}-byte payload, but a {width}x{height} image can hold at most {} bytes",
            max_total - HEADER_SIZE
        )));
    }

    // 载荷位与头部位共用同一条逻辑位索引序列，从索引 32 起继续读。
    let mut payload_bits = BitArray::new(vec![0u8; payload_len]);
    for bit_idx in 0..payload_bits.len() {
        let offset = mapping::channel_offset(HEADER_BITS + bit_idx);
        payload_bits.write(bit_idx, bits::get_bit(data[offset], 0))?;
    }

    String::from_utf8(payload_bits.into_bytes()).map_err(StegoError::from)
}

/// 从像素缓冲区的前 32 个映射位中重组出小端序的载荷长度。
fn parse_header(data: &[u8]) -> usize {
    let mut len: u32 = 0;

    for bit_idx in 0..HEADER_BITS {
        let bit = bits::get_bit(data[mapping::channel_offset(bit_idx)], 0);
        len |= u32::from(bit) << bit_idx;
    }

    len as usize
}
