//! # diff_hide 库
//!
//! 本库包含基于参照图像比对的隐写工具的核心逻辑：
//! 把任意二进制数据通过单比特翻转嵌入 PNG 的颜色通道低位，
//! 之后借助原始图像逐通道比对恢复数据。

// 声明库包含的所有模块。

pub mod channel;
pub mod cli;
pub mod constants;
pub mod format;
pub mod handler;
pub mod planner;
pub mod steganography;
