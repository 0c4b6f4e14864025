//! # 帧格式模块
//!
//! 唯一的在线格式：4 字节小端序 `u32` 头部存放载荷字节长度，
//! 后面紧跟 UTF-8 载荷本身。没有版本字段。
//! 编码端与解码端必须使用完全一致的字节序，这是格式契约而非实现细节。

use crate::constants::HEADER_SIZE;
use crate::error::{Result, StegoError};

/// 把 `u32` 转换为 4 字节的小端序列：字节 0 = `value & 0xFF`，依此类推。
pub fn to_le_bytes(value: u32) -> [u8; HEADER_SIZE] {
    value.to_le_bytes()
}

/// 按给定顺序拼接多段字节序列。
pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    let size = parts.iter().map(|part| part.len()).sum();
    let mut result = Vec::with_capacity(size);

    for part in parts {
        result.extend_from_slice(part);
    }

    result
}

/// 为载荷构建完整的帧：长度头部 + 载荷字节。
///
/// # Errors
///
/// 载荷长度超出 `u32` 可表示范围时返回 [`StegoError::Capacity`]。
pub fn build(payload: &[u8]) -> Result<Vec<u8>> {
    let len = u32::try_from(payload.len()).map_err(|_| {
        StegoError::Capacity(format!(
            "payload of {} bytes cannot be described by the 32-bit length header",
            payload.len()
        ))
    })?;

    Ok(concat(&[&to_le_bytes(len), payload]))
}
