//! # 命令处理逻辑模块
//!
//! 包含处理 `enc`、`dec` 和 `debug` 子命令的高级业务逻辑。
//! 本模块负责协调文件与图像 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{DebugArgs, DecArgs, EncArgs};
use crate::format::{human_readable_bin, human_readable_si};
use crate::steganography::{capacity, decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use std::fs;
use std::path::Path;

/// 处理 'enc' 命令的执行逻辑。
///
/// 负责校验输出路径、读取原始图像和数据文件、检查载体容量是否足够、
/// 调用核心编码函数嵌入数据帧，最后把结果图像写成 PNG 文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `EncArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出路径不以 `.png` 结尾，或已存在且未指定 `--force`。
/// * 无法读取输入的图像或数据文件。
/// * 原始图像没有足够的容量来承载数据。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncArgs) -> Result<()> {
    anyhow::ensure!(
        args.output.extension().is_some_and(|ext| ext == "png"),
        "Output must be a PNG file."
    );
    check_overwrite(&args.output, args.force)?;

    let origin = read_image(&args.origin)?;

    let data = fs::read(&args.data).with_context(|| {
        format!(
            "Unable to read data file: {}",
            args.data.to_string_lossy().red().bold()
        )
    })?;

    let max = capacity(origin.width(), origin.height());
    anyhow::ensure!(
        data.len() as i64 <= max,
        "The origin image can only hold {} / {}. \nPlease use less data or a bigger origin image.",
        human_readable_bin(max).green().bold(),
        human_readable_si(max).green().bold()
    );

    let modified = encode(&origin, &data)
        .context("Failed to embed the data frame into the origin image.")?;

    modified.save(&args.output).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The data has been successfully hidden and saved: {}",
        args.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'dec' 命令的执行逻辑。
///
/// 负责读取原始图像和被修改的图像、调用核心解码函数逐通道比对并恢复数据帧，
/// 最后把恢复出的原始字节写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `DecArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取任一输入图像，或输出文件已存在且未指定 `--force`。
/// * 两幅图像的尺寸不一致。
/// * 恢复出的长度前缀超过图像能承载的数据量。
/// * 无法写入到目标文件。
pub fn handle_decode(args: DecArgs) -> Result<()> {
    check_overwrite(&args.output, args.force)?;

    let origin = read_image(&args.origin)?;
    let modified = read_image(&args.modified)?;

    let data = decode(&origin, &modified).with_context(|| {
        format!(
            "Failed to recover data from '{}'. \nThe image may not carry hidden data or does not match the origin.",
            args.modified.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&args.output, data).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The data has been successfully recovered and saved: {}",
        args.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'debug' 命令的执行逻辑。
///
/// 读取原始图像并打印它能承载的最大数据量，
/// 同时给出二进制 (KiB) 与十进制 (kB) 两种人类可读单位。
pub fn handle_debug(args: DebugArgs) -> Result<()> {
    let origin = read_image(&args.origin)?;
    let max = capacity(origin.width(), origin.height());

    println!(
        "Max data length for origin file: {} / {}",
        human_readable_bin(max).green().bold(),
        human_readable_si(max).green().bold()
    );

    Ok(())
}

/// 读取图像文件并转换为 8 位 RGB 像素网格。
fn read_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    Ok(image.to_rgb8())
}

/// 输出文件已存在且未指定 `--force` 时拒绝执行，避免意外覆盖。
fn check_overwrite(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );

    Ok(())
}
