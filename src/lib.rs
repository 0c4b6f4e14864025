//! # lsb_stash 库
//!
//! 本库实现基于帧格式的 LSB 隐写编解码器：
//! 把 UTF-8 文本藏进 RGBA 图像 R/G/B 通道字节的最低有效位 (跳过 alpha 通道)，
//! 并能无损地恢复出来。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod error;
pub mod frame;
pub mod handler;
pub mod mapping;
pub mod raster;
pub mod stego;

pub use error::{Result, StegoError};
