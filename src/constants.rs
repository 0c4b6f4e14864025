/// 帧头部的字节数。
/// 头部以小端序 `u32` 存放载荷的字节长度，紧跟在后面的就是载荷本身。
pub const HEADER_SIZE: usize = 4;

/// 帧头部占用的位数 (4 字节 × 8 位)。
/// 载荷的逻辑位索引从这个值开始，与头部共用同一条通道映射序列。
pub const HEADER_BITS: usize = HEADER_SIZE * 8;

/// RGBA 像素缓冲区中每个像素占用的字节数。
pub const CHANNELS_PER_PIXEL: usize = 4;

/// 每个像素中可用于隐写的通道数 (R、G、B)。
/// alpha 通道永远不被写入。
pub const USABLE_CHANNELS: usize = 3;

/// alpha 通道在单个像素内的字节偏移 (偏移 ≡ 3 mod 4 的字节)。
pub const ALPHA_CHANNEL: usize = 3;
