//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `recover` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心编解码器以及向用户报告结果。
//! 核心编解码器自身不做任何文件操作。

use crate::cli::{HideArgs, RecoverArgs};
use crate::mapping;
use crate::stego;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、检查隐写空间是否足够、调用编码器把文本
/// 写入像素缓冲区的最低有效位，最后将结果保存为目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖开关的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像文件没有足够的空间来隐藏文本。
/// * 核心编码器 (`stego::encode`) 在执行过程中失败。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| prefixed_sibling(&args.image, "doctored_"));
    ensure_writable(&dest, args.force)?;

    let image = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .into_rgba8();

    let text = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        !text.is_empty(),
        "The text file is empty; there is nothing to hide: {}",
        args.text.to_string_lossy().red().bold()
    );

    let (width, height) = image.dimensions();
    let available_space = mapping::max_payload_bytes(width, height);

    anyhow::ensure!(
        available_space >= text.len(),
        "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
        text.len().to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    let encoded = stego::encode(&text, &image).with_context(|| {
        "Failed to hide the text in the image. \nThe image may be too small for the message."
    })?;

    encoded.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用解码器从像素缓冲区的最低有效位
/// 中提取帧并还原文本，最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖开关的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 核心解码器 (`stego::decode`) 在执行过程中失败，
///   例如图像不含隐写数据、头部长度非法或载荷不是合法 UTF-8。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let text_path = args.text.unwrap_or_else(|| recovered_text_path(&args.image));
    ensure_writable(&text_path, args.force)?;

    let image = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .into_rgba8();

    let message = stego::decode(&image).with_context(|| {
        format!(
            "Failed to recover text from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&text_path, message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        text_path.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 目标文件已存在且未指定 `--force` 时拒绝覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 在 `path` 所在目录下生成带前缀的同名文件路径，
/// 如 `a/b.png` -> `a/doctored_b.png`。
fn prefixed_sibling(path: &Path, prefix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    path.with_file_name(format!("{prefix}{file_name}"))
}

/// 恢复文本的默认输出路径：图像旁的 `recovered_<图像名>.txt`。
fn recovered_text_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    image.with_file_name(format!("recovered_{stem}.txt"))
}
