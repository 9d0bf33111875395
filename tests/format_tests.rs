use diff_hide::format::{human_readable_bin, human_readable_si};

/// 验证二进制单位的渲染
#[test]
fn test_human_readable_bin() {
    assert_eq!(human_readable_bin(0), "0 B");
    assert_eq!(human_readable_bin(33), "33 B");
    assert_eq!(human_readable_bin(1023), "1023 B");
    assert_eq!(human_readable_bin(1536), "1.5 KiB");
    assert_eq!(human_readable_bin(2048), "2.0 KiB");
    assert_eq!(human_readable_bin(1024 * 1024), "1.0 MiB");
}

/// 验证十进制单位的渲染
#[test]
fn test_human_readable_si() {
    assert_eq!(human_readable_si(999), "999 B");
    assert_eq!(human_readable_si(1500), "1.5 kB");
    assert_eq!(human_readable_si(2_000_000), "2.0 MB");
    assert_eq!(human_readable_si(3_000_000_000), "3.0 GB");
}

/// 容量可能为负数，渲染时保留符号
#[test]
fn test_negative_byte_counts() {
    assert_eq!(human_readable_bin(-3), "-3 B");
    assert_eq!(human_readable_si(-3), "-3 B");
    assert_eq!(human_readable_bin(-2048), "-2.0 KiB");
}
