//! # 字节数格式化模块
//!
//! 把字节数渲染成人类可读的形式，供 `debug` 子命令与容量报错使用。
//! 同时提供二进制 (KiB) 与十进制 (kB) 两套单位。

const BINARY_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
const SI_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// 按 1024 进制渲染，如 "1.5 KiB"。不足 1 KiB 时输出整数字节。
pub fn human_readable_bin(bytes: i64) -> String {
    human_readable(bytes, 1024.0, &BINARY_UNITS)
}

/// 按 1000 进制渲染，如 "1.5 kB"。不足 1 kB 时输出整数字节。
pub fn human_readable_si(bytes: i64) -> String {
    human_readable(bytes, 1000.0, &SI_UNITS)
}

fn human_readable(bytes: i64, base: f64, units: &[&str; 7]) -> String {
    if (bytes.unsigned_abs() as f64) < base {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value.abs() >= base && unit < units.len() - 1 {
        value /= base;
        unit += 1;
    }

    format!("{:.1} {}", value, units[unit])
}
