//! # 图像读取适配模块
//!
//! 通过 `image` crate 打开并解码图像，向核心提供像素网格描述。
//! 所有失败都以 [`ImageIoError`] 返回，由调用方决定是否记录日志。

use crate::capacity::PixelGrid;
use crate::error::StegoError;
use image::{DynamicImage, ImageError, ImageReader};
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 图像读取过程中可能出现的错误。
#[derive(Debug, Error)]
pub enum ImageIoError {
    /// 无法打开或解码图像。
    #[error("failed to load image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// 无法识别图像格式。
    #[error("unrecognized image format: {}", path.display())]
    UnknownFormat { path: PathBuf },

    /// 解码后的图像尺寸无效。
    #[error(transparent)]
    Geometry(#[from] StegoError),
}

/// 图像的基本信息：像素网格和小写格式名 (如 "png")。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub grid: PixelGrid,
    pub format: String,
}

fn load_failure(path: &Path, source: ImageError) -> ImageIoError {
    ImageIoError::Load {
        path: path.to_path_buf(),
        source,
    }
}

/// 打开并完整解码图像。
///
/// # Errors
///
/// 文件不存在、无法读取或无法解码时返回 [`ImageIoError::Load`]。
pub fn load(path: &Path) -> Result<DynamicImage, ImageIoError> {
    let image = image::open(path).map_err(|e| load_failure(path, e))?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// 解码图像并返回其像素网格。
///
/// # Errors
///
/// 读取失败时返回 [`ImageIoError::Load`]；尺寸为零时返回 [`ImageIoError::Geometry`]。
pub fn grid(path: &Path) -> Result<PixelGrid, ImageIoError> {
    let image = load(path)?;
    Ok(PixelGrid::new(image.width(), image.height())?)
}

/// 只读取图像头部，获取尺寸和格式。
///
/// # Errors
///
/// 读取失败时返回 [`ImageIoError::Load`]，格式无法识别时返回 [`ImageIoError::UnknownFormat`]。
pub fn info(path: &Path) -> Result<ImageInfo, ImageIoError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_failure(path, ImageError::IoError(e)))?;

    let format = reader
        .format()
        .map(|format| format!("{format:?}").to_lowercase())
        .ok_or_else(|| ImageIoError::UnknownFormat {
            path: path.to_path_buf(),
        })?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| load_failure(path, e))?;

    Ok(ImageInfo {
        grid: PixelGrid::new(width, height)?,
        format,
    })
}
