//! # 位数组模块
//!
//! [`BitArray`] 把一段字节缓冲区视为可随机访问的位序列：
//! 位索引 `i` 落在第 `i / 8` 个字节中，字节内偏移为 `i % 8` (位 0 = 最低有效位)。
//! 同时提供对单个字节读写某一位的辅助函数 [`get_bit`] 和 [`set_bit`]。

use crate::error::{Result, StegoError};

/// 一段字节缓冲区上的位视图，长度固定为 `8 × 字节数`。
///
/// 读写越界会返回 [`StegoError::OutOfRange`]，绝不会静默截断或越界访问。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    data: Vec<u8>,
}

impl BitArray {
    /// 以给定的字节缓冲区创建位数组。缓冲区长度在构造后不再变化。
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// 位数组的总位数 (`字节数 × 8`)。
    pub fn len(&self) -> usize {
        self.data.len() * 8
    }

    /// 位数组是否不含任何位。
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 读取索引 `bit_idx` 处的位，返回 0 或 1。
    ///
    /// # Errors
    ///
    /// 当 `bit_idx >= self.len()` 时返回 [`StegoError::OutOfRange`]。
    pub fn read(&self, bit_idx: usize) -> Result<u8> {
        let byte = self.byte_at(bit_idx)?;
        Ok(get_bit(byte, (bit_idx % 8) as u32))
    }

    /// 把索引 `bit_idx` 处的位设置为 `bit & 1`，同一字节的其余 7 位保持不变。
    ///
    /// # Errors
    ///
    /// 当 `bit_idx >= self.len()` 时返回 [`StegoError::OutOfRange`]。
    pub fn write(&mut self, bit_idx: usize, bit: u8) -> Result<()> {
        let byte = self.byte_at(bit_idx)?;
        self.data[bit_idx / 8] = set_bit(byte, (bit_idx % 8) as u32, bit);
        Ok(())
    }

    /// 按索引升序惰性地遍历所有位。迭代器不消耗数组本身，
    /// 重新调用 `iter` 总是得到同一条序列。
    pub fn iter(&self) -> Bits<'_> {
        Bits { bits: self, next: 0 }
    }

    /// 以只读切片的形式访问底层字节。
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// 取回底层字节缓冲区。
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn byte_at(&self, bit_idx: usize) -> Result<u8> {
        self.data
            .get(bit_idx / 8)
            .copied()
            .ok_or(StegoError::OutOfRange {
                index: bit_idx,
                len: self.len(),
            })
    }
}

impl<'a> IntoIterator for &'a BitArray {
    type Item = u8;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`BitArray`] 的位迭代器，按索引 0..len 的顺序逐位产出 0/1。
#[derive(Debug)]
pub struct Bits<'a> {
    bits: &'a BitArray,
    next: usize,
}

impl Iterator for Bits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.bits.len() {
            return None;
        }

        let bit = self.bits.read(self.next).ok()?;
        self.next += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

/// 读取 `byte` 在偏移 `offset` (0 = 最低有效位) 处的位。
pub fn get_bit(byte: u8, offset: u32) -> u8 {
    debug_assert!(offset < 8);
    (byte >> offset) & 1
}

/// 返回把 `byte` 在偏移 `offset` 处的位改为 `bit & 1` 后的新字节，其余位不变。
pub fn set_bit(byte: u8, offset: u32, bit: u8) -> u8 {
    debug_assert!(offset < 8);
    let mask = !(1 << offset);
    (byte & mask) | ((bit & 1) << offset)
}
