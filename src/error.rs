//! # 错误类型模块
//!
//! 编解码器的四类错误，调用方可以直接对变体进行模式匹配，
//! 不需要任何运行时类型检查。

use thiserror::Error;

/// 隐写编解码过程中可能出现的所有错误。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 容量不足：图像太小装不下任何数据，或载荷超出图像所能容纳的上限。
    /// 一定在任何像素字节被修改之前返回。
    #[error("insufficient capacity: {0}")]
    Capacity(String),

    /// 解码出的头部长度与图像容量不一致，或像素缓冲区与声明的尺寸不符。
    /// 说明图像不含隐写数据，或数据已被破坏。
    #[error("corrupted data: {0}")]
    Corruption(String),

    /// 提取出的载荷字节不是合法的 UTF-8 文本。
    /// 与 [`Corruption`][StegoError::Corruption] 不同：头部长度本身是可信的。
    #[error("hidden payload is not valid UTF-8 text")]
    Decoding(#[from] std::string::FromUtf8Error),

    /// 位数组的越界访问。属于调用方的契约错误，而非数据错误。
    #[error("bit index {index} is out of range for a bit array of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// 本库统一使用的 Result 别名。
pub type Result<T> = std::result::Result<T, StegoError>;
