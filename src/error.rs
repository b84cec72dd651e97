//! # 错误类型模块
//!
//! 定义编解码与容量校验的全部失败情况。
//! 核心函数只返回这些错误，从不记录日志，也不吞掉错误。

use thiserror::Error;

/// 比特流格式错误的具体原因。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitstreamDefect {
    /// 长度不是 8 的倍数，最后一组不完整。
    #[error("length {len} is not a multiple of 8 ({trailing} trailing bits)")]
    PartialGroup { len: usize, trailing: usize },

    /// 出现了 '0' 和 '1' 以外的符号。
    #[error("unexpected symbol {symbol:?} at position {index}")]
    InvalidSymbol { symbol: char, index: usize },
}

/// 编解码和容量校验过程中可能出现的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegoError {
    /// 字符码位超出 8 位范围，无法编码。
    #[error("character {character:?} at index {index} is outside the 8-bit range")]
    Encoding { character: char, index: usize },

    /// 比特流无法解码。
    #[error("malformed bitstream: {0}")]
    MalformedBitstream(#[from] BitstreamDefect),

    /// 图像尺寸为零。
    #[error("invalid image geometry {width}x{height}: both dimensions must be positive")]
    InvalidGeometry { width: u32, height: u32 },

    /// 图像容量不足以容纳消息。
    #[error("message needs {required_bits} bits but the image only provides {available_bits}")]
    InsufficientCapacity {
        required_bits: u64,
        available_bits: u64,
    },
}
