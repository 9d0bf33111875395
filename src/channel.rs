//! # 颜色通道模块
//!
//! 定义三个原色通道及其在 24 位打包 RGB 值上的编码/解码掩码。
//! 编码掩码每个通道只翻转一个比特，且分别落在互不重叠的字节内。

use image::Rgb;

/// 单个颜色通道。编码时翻转该通道的最低位，
/// 解码时比较两幅图像中该通道所在的整个字节。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// 坐标序列外层循环使用的固定通道顺序。
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    const fn encode_mask(self) -> u32 {
        match self {
            Channel::Red => 0x01_0000,
            Channel::Green => 0x00_0100,
            Channel::Blue => 0x00_0001,
        }
    }

    const fn decode_mask(self) -> u32 {
        match self {
            Channel::Red => 0xff_0000,
            Channel::Green => 0x00_ff00,
            Channel::Blue => 0x00_00ff,
        }
    }

    /// 在打包 RGB 值上翻转本通道的编码位。
    pub fn encode_bit(self, rgb: u32) -> u32 {
        rgb ^ self.encode_mask()
    }

    /// 当且仅当两个打包 RGB 值在本通道的字节上不同时读出 1。
    pub fn decode_bit(self, origin: u32, modified: u32) -> bool {
        origin & self.decode_mask() != modified & self.decode_mask()
    }
}

/// 把像素打包为 `0xRRGGBB` 形式的整数。
pub fn pack(pixel: &Rgb<u8>) -> u32 {
    (u32::from(pixel[0]) << 16) | (u32::from(pixel[1]) << 8) | u32::from(pixel[2])
}

/// `pack` 的逆操作。
pub fn unpack(rgb: u32) -> Rgb<u8> {
    Rgb([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8])
}
