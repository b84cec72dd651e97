//! # bitveil 库
//!
//! 本库包含图像隐写工具的载荷编解码与容量校验逻辑，以及命令行前端。
//! 核心部分 ([`codec`]、[`capacity`]) 是无状态的纯函数，不做 I/O，也不记录日志。

// 声明库包含的所有模块。

pub mod capacity;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod imageio;

pub use capacity::{CapacityReport, PixelGrid, validate};
pub use codec::{Bitstream, Payload, decode, encode};
pub use error::{BitstreamDefect, StegoError};
