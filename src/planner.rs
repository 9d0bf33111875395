//! # 比特规划模块
//!
//! 提供编码与解码共用的两条惰性序列：坐标序列与比特序列。
//! 两侧必须以完全一致的顺序遍历坐标，否则恢复的数据会损坏。

use crate::channel::Channel;
use crate::constants::MASKS;

/// (通道, x, y) 坐标序列，嵌套顺序为：通道最外层，x 居中，y 最内层。
/// 由线性计数器直接算出坐标，不在内存中物化完整列表，可随时重新创建。
#[derive(Debug, Clone)]
pub struct Coordinates {
    width: u32,
    height: u32,
    index: u64,
    total: u64,
}

impl Coordinates {
    pub fn new(width: u32, height: u32) -> Self {
        let total = Channel::ALL.len() as u64 * u64::from(width) * u64::from(height);
        Self {
            width,
            height,
            index: 0,
            total,
        }
    }
}

impl Iterator for Coordinates {
    type Item = (Channel, u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.total {
            return None;
        }

        let area = u64::from(self.width) * u64::from(self.height);
        let channel = Channel::ALL[(self.index / area) as usize];
        let offset = self.index % area;
        let x = (offset / u64::from(self.height)) as u32;
        let y = (offset % u64::from(self.height)) as u32;

        self.index += 1;
        Some((channel, x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.index) as usize;
        (remaining, Some(remaining))
    }
}

/// 把字节切片按 MSB 优先顺序展开为比特流。
#[derive(Debug, Clone)]
pub struct FrameBits<'a> {
    data: &'a [u8],
    index: usize,
}

impl<'a> FrameBits<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, index: 0 }
    }
}

impl Iterator for FrameBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.data.len() * 8 {
            return None;
        }

        let mask = MASKS[self.index % 8];
        let bit = self.data[self.index / 8] & mask == mask;
        self.index += 1;
        Some(bit)
    }
}

/// 把比特流按 MSB 优先顺序重新拼装成字节。
/// 末尾不足 8 位的残余比特会被丢弃。
#[derive(Debug)]
pub struct PackBytes<I> {
    bits: I,
}

impl<I> PackBytes<I>
where
    I: Iterator<Item = bool>,
{
    pub fn new(bits: I) -> Self {
        Self { bits }
    }
}

impl<I> Iterator for PackBytes<I>
where
    I: Iterator<Item = bool>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let mut byte = 0u8;
        for mask in MASKS {
            if self.bits.next()? {
                byte |= mask;
            }
        }
        Some(byte)
    }
}
