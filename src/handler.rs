//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。
//!
//! 文本文件按字节读写，每个字节对应一个字符，因此任意字节内容都能原样恢复。

use crate::channel::Channel;
use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::MAX_MESSAGE_LEN;
use crate::decoder::decode;
use crate::encoder::encode_into;
use crate::steganography::max_message_len;
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、检查隐写空间是否足够、调用编码器写入指定通道，
/// 最后以 PNG 格式保存结果图像。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、通道和覆盖选项的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 文本超过 999 个字符或图像没有足够的空间。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_hidden_path(&args.image, args.channel));
    ensure_writable(&dest, args.force)?;

    let mut picture = load_rgb(&args.image)?;

    let text = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;
    let message: String = text.iter().copied().map(char::from).collect();

    let (width, height) = picture.dimensions();
    let required = text.len();
    let available = max_message_len(width, height);
    if required <= MAX_MESSAGE_LEN {
        anyhow::ensure!(
            required <= available,
            "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
            required.to_string().red().bold(),
            available.to_string().green().bold()
        );
    }

    encode_into(&mut picture, &message, args.channel).with_context(|| {
        format!(
            "Failed to hide the text from {}. \nThe text must be at most {} characters long.",
            args.text.to_string_lossy().red().bold(),
            MAX_MESSAGE_LEN.to_string().green().bold()
        )
    })?;

    log::info!(
        "hid {} characters in the {} channel of a {}x{} image",
        text.len(),
        args.channel,
        width,
        height
    );

    picture
        .save_with_format(&dest, image::ImageFormat::Png)
        .with_context(|| {
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
/// 负责读取经过隐写的图像、从指定通道解码消息，
/// 然后将其写入目标文本文件，或在未指定路径时输出到终端。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 图像中没有隐藏的消息。
/// * 输出文件已存在且未指定 `--force`，或无法写入。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    if let Some(path) = &args.text {
        ensure_writable(path, args.force)?;
    }

    let picture = load_rgb(&args.image)?;

    let message = decode(&picture, args.channel)
        .filter(|message| !message.is_empty())
        .with_context(|| {
            format!(
                "No hidden message found in the {} channel of '{}'.",
                args.channel.to_string().red().bold(),
                args.image.to_string_lossy().red().bold()
            )
        })?;

    log::info!(
        "recovered {} characters from the {} channel",
        message.chars().count(),
        args.channel
    );

    // 每个字符都不超过 U+00FF，按字节写回即可还原原始内容。
    let bytes: Vec<u8> = message.chars().map(|c| u32::from(c) as u8).collect();

    match &args.text {
        Some(path) => {
            fs::write(path, &bytes).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The text has been successfully recovered and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => {
            println!("{}", "Message hidden in file:".green().bold());
            println!("{}", String::from_utf8_lossy(&bytes));
        }
    }

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑，输出图像尺寸与可隐藏的最大字符数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = load_rgb(&args.image)?;
    let (width, height) = picture.dimensions();

    println!(
        "{}: {}x{} pixels, up to {} characters per channel",
        args.image.to_string_lossy().bold(),
        width,
        height,
        max_message_len(width, height).to_string().green().bold()
    );

    Ok(())
}

/// 输出图像的默认路径：与输入同目录，文件名为 `<通道编号>_<原文件名>.png`。
pub fn default_hidden_path(image: &Path, channel: Channel) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("{}_{}.png", channel.index(), stem))
}

fn load_rgb(path: &Path) -> Result<RgbImage> {
    let picture = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    log::debug!("loaded {} as {:?}", path.display(), picture.color());
    Ok(picture.to_rgb8())
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
