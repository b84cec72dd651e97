//! # 容量校验模块
//!
//! 判断一幅图像的像素网格能否容纳编码后的消息。
//! 按每像素一个比特计算，与通道数无关。

use crate::constants::{BITS_PER_CHAR, BITS_PER_PIXEL};
use crate::error::StegoError;

/// 图像的像素网格描述，宽和高都为正数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: u32,
    height: u32,
}

/// 一次容量校验的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub required_bits: u64,
    pub available_bits: u64,
    pub fits: bool,
}

impl PixelGrid {
    /// # Errors
    ///
    /// 宽或高为零时返回 [`StegoError::InvalidGeometry`]。
    pub fn new(width: u32, height: u32) -> Result<Self, StegoError> {
        if width == 0 || height == 0 {
            return Err(StegoError::InvalidGeometry { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn available_bits(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * BITS_PER_PIXEL
    }

    /// 可容纳的最大字符数。
    pub fn max_chars(&self) -> u64 {
        self.available_bits() / BITS_PER_CHAR
    }

    pub fn fits(&self, text: &str) -> bool {
        required_bits(text) <= self.available_bits()
    }

    pub fn report(&self, text: &str) -> CapacityReport {
        let required_bits = required_bits(text);
        let available_bits = self.available_bits();
        CapacityReport {
            required_bits,
            available_bits,
            fits: required_bits <= available_bits,
        }
    }

    /// 嵌入前的硬性前置条件。
    ///
    /// # Errors
    ///
    /// 容量不足时返回 [`StegoError::InsufficientCapacity`]。
    pub fn ensure_fits(&self, text: &str) -> Result<(), StegoError> {
        let report = self.report(text);
        if !report.fits {
            return Err(StegoError::InsufficientCapacity {
                required_bits: report.required_bits,
                available_bits: report.available_bits,
            });
        }
        Ok(())
    }
}

/// 消息编码后所需的比特数：字符数乘以 8。
pub fn required_bits(text: &str) -> u64 {
    (text.chars().count() as u64).saturating_mul(BITS_PER_CHAR)
}

/// 判断 `width` x `height` 的图像能否容纳 `text`。
///
/// # Errors
///
/// 宽或高为零时返回 [`StegoError::InvalidGeometry`]，而不是报告容量不足。
pub fn validate(width: u32, height: u32, text: &str) -> Result<bool, StegoError> {
    PixelGrid::new(width, height).map(|grid| grid.fits(text))
}
