/// 按 MSB 优先顺序展开单个字节时使用的位掩码表。
/// 编码与解码共用同一张表，保证两侧以相同顺序遍历比特。
pub const MASKS: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

/// 数据帧的长度前缀所占字节数 (大端序 `u32`)。
pub const LENGTH_PREFIX_BYTES: usize = 4;

/// 每个像素可承载的比特数 (R、G、B 各一位)。
pub const BITS_PER_PIXEL: u64 = 3;
