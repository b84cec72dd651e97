//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode`、`check` 和 `info` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心编解码与容量校验函数、记录日志以及向用户报告结果。

use crate::capacity::PixelGrid;
use crate::cli::{CheckArgs, DecodeArgs, EncodeArgs, InfoArgs};
use crate::codec::{decode, encode};
use crate::constants::BITS_PER_CHAR;
use crate::imageio;
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// 读取 UTF-8 文本文件。
fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| {
        format!(
            "Unable to read text file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 将结果写入输出文件；未指定路径时打印到标准输出。
///
/// 目标文件已存在且未设置 `force` 时拒绝覆盖。
fn write_output(output: Option<&Path>, force: bool, contents: &str) -> Result<()> {
    let Some(path) = output else {
        println!("{contents}");
        return Ok(());
    };

    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );

    fs::write(path, contents).with_context(|| {
        format!(
            "Unable to write to output file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The result has been successfully saved: {}",
        path.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 读取文本文件，将其编码为比特流，并写入输出文件或标准输出。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取文本文件，或其内容不是有效的 UTF-8。
/// * 文本中存在码位大于 255 的字符。
/// * 输出文件已存在且未指定 `--force`，或无法写入。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let text = read_text(&args.text)?;

    let bits = encode(&text).with_context(|| {
        format!(
            "Unable to encode {}. \nOnly characters in the range U+0000..U+00FF are supported.",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    info!(
        "Encoded {} characters into {} bits",
        text.chars().count(),
        bits.len()
    );

    write_output(args.output.as_deref(), args.force, bits.as_str())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 读取比特流文件 (忽略首尾空白)，将其解码为文本，并写入输出文件或标准输出。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取比特流文件。
/// * 比特流长度不是 8 的倍数，或含有 '0'/'1' 以外的符号。
/// * 输出文件已存在且未指定 `--force`，或无法写入。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let raw = read_text(&args.bits)?;
    let bits = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    debug!("Read {} bits from {}", bits.len(), args.bits.display());

    let text = decode(bits).with_context(|| {
        format!(
            "Unable to decode bitstream from '{}'. \nThe data appears to be truncated or corrupted.",
            args.bits.to_string_lossy().red().bold()
        )
    })?;

    info!("Decoded {} characters", text.chars().count());

    write_output(args.output.as_deref(), args.force, &text)
}

/// 处理 'Check' 命令的执行逻辑。
///
/// 解码图像获取像素网格，计算文本所需比特数与可用比特数，并报告结果。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码图像，或无法读取文本文件。
/// * 图像没有足够的容量来容纳文本。
pub fn handle_check(args: CheckArgs) -> Result<()> {
    let grid = imageio::grid(&args.image).with_context(|| {
        format!(
            "Unable to load image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let text = read_text(&args.text)?;

    let report = grid.report(&text);
    debug!("{report:?}");

    anyhow::ensure!(
        report.fits,
        "Not enough capacity in the image to carry the text. \nRequired: {} bits, Available: {} bits",
        report.required_bits.to_string().red().bold(),
        report.available_bits.to_string().green().bold()
    );

    println!(
        "The text fits: {} of {} bits used.",
        report.required_bits.to_string().green().bold(),
        report.available_bits.to_string().green().bold()
    );
    Ok(())
}

/// 处理 'Info' 命令的执行逻辑。
///
/// 只读取图像头部，打印尺寸、格式以及按每像素一比特计算的容量。
///
/// # Errors
///
/// 无法读取图像或无法识别其格式时返回错误。
pub fn handle_info(args: InfoArgs) -> Result<()> {
    let info = imageio::info(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!("{}", describe(&info.grid, &info.format));
    Ok(())
}

fn describe(grid: &PixelGrid, format: &str) -> String {
    format!(
        "Format: {}\nDimensions: {}x{}\nCapacity: {} bits ({} characters at {} bits each)",
        format.green().bold(),
        grid.width(),
        grid.height(),
        grid.available_bits().to_string().green().bold(),
        grid.max_chars().to_string().green().bold(),
        BITS_PER_CHAR
    )
}
